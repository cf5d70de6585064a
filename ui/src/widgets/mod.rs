mod auth_gate;
mod chart_panel;
mod login;
mod navigation;
mod order_summary;
pub mod users;

pub use auth_gate::auth_gate;
pub use chart_panel::{chart_panel, usage_chart};
pub use login::login_widget;
pub use navigation::{navigation_bar, sign_out};
pub use order_summary::order_summary;
pub use users::users_panel;
