//! Row rendering for the users table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use turbo_business::{CellContent, UserRow};

use super::cells::{render_edit_button, render_status_cell, render_text_cell};

/// Renders one body row.
///
/// Returns the row's email when its `Edit` button was clicked.
#[inline]
pub fn render_user_row<'a>(row: &mut TableRow<'_, '_>, data: &'a UserRow) -> Option<&'a str> {
    let mut clicked = None;

    for cell in &data.cells {
        row.col(|ui| {
            match cell {
                CellContent::Text(text) => render_text_cell(ui, text),
                CellContent::StatusTag(status) => render_status_cell(ui, *status),
                CellContent::EditAction { email } => {
                    if render_edit_button(ui) {
                        clicked = Some(email.as_str());
                    }
                }
            }
            draw_cell_bottom_border(ui);
        });
    }

    clicked
}

#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
