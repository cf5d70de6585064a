//! Column definitions for the users table.

use egui_extras::Column;

pub const PHONE_WIDTH: f32 = 130.0;
pub const ROLE_WIDTH: f32 = 110.0;
pub const STATUS_WIDTH: f32 = 100.0;
pub const ACTIONS_WIDTH: f32 = 80.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Name, Email, Phone, Role, Status, Actions.
///
/// Name and email share the remaining width.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::auto().at_least(120.0),      // Name
        Column::remainder().at_least(160.0), // Email
        Column::exact(PHONE_WIDTH),
        Column::exact(ROLE_WIDTH),
        Column::exact(STATUS_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
