//! Users management: table, panel and edit modal.

mod edit_modal;
mod panel;
pub mod table;

pub use edit_modal::edit_modal;
pub use panel::users_panel;
pub use table::users_table;
