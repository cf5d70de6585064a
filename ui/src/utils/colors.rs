//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for enabled users and healthy states.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for disabled users, errors and the successful-hits series.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for pending states.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Blue of the total-hits series.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(0x41, 0x85, 0xF4);
