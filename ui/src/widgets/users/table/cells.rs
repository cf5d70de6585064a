//! Cell renderers for the users table.

use egui::{Sense, Ui, vec2};
use turbo_business::UserStatus;

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

const STATUS_DOT_RADIUS: f32 = 4.0;

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(text);
    });
}

pub fn status_color(status: UserStatus) -> egui::Color32 {
    match status {
        UserStatus::Enabled => COLOR_GREEN,
        UserStatus::Disabled => COLOR_RED,
    }
}

/// Colored dot followed by the status label.
#[inline]
pub fn render_status_cell(ui: &mut Ui, status: UserStatus) {
    let color = status_color(status);
    ui.horizontal(|ui| {
        status_dot(ui, color);
        ui.colored_label(color, status.label());
    });
}

fn status_dot(ui: &mut Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(
        vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        Sense::hover(),
    );
    ui.painter()
        .circle_filled(rect.center(), STATUS_DOT_RADIUS, color);
}

/// Returns `true` if the `Edit` button was clicked.
#[inline]
pub fn render_edit_button(ui: &mut Ui) -> bool {
    ui.centered_and_justified(|ui| ui.button("Edit").clicked())
        .inner
}
