//! Users table rendering.
//!
//! - `columns`: column widths
//! - `header`: header row
//! - `row`: body rows
//! - `cells`: per-cell renderers

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Response, Ui};
use egui_extras::TableBuilder;
use turbo_business::UsersTableModel;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders `model` as a table followed by its footer.
///
/// `on_edit` receives the email of the row whose `Edit` button was clicked.
pub fn users_table(
    ui: &mut Ui,
    model: &UsersTableModel,
    mut on_edit: impl FnMut(&str),
) -> Response {
    ui.vertical(|ui| {
        let mut builder = TableBuilder::new(ui)
            .id_salt("users_table")
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for column in table_columns() {
            builder = builder.column(column);
        }

        builder
            .header(HEADER_HEIGHT, |mut header| {
                render_table_header(&mut header, &model.headers);
            })
            .body(|mut body| {
                for user_row in &model.rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        if let Some(email) = render_user_row(&mut row, user_row) {
                            on_edit(email);
                        }
                    });
                }
            });

        ui.add_space(4.0);
        ui.label(egui::RichText::new(&model.footer).weak());
    })
    .response
}
