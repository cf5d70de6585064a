//! Pages selected by [`turbo_business::Route`].
//!
//! - `login_page`: token sign-in
//! - `users_page`: user management
//! - `dashboard_page`: API usage and order totals

mod dashboard_page;
mod login_page;
mod users_page;

pub use dashboard_page::dashboard_page;
pub use login_page::login_page;
pub use users_page::users_page;
