//! Order totals card.

use egui::{Grid, Response, RichText, Ui};
use turbo_business::{OrderSummary, SummaryMode};

fn text_size(mode: SummaryMode) -> f32 {
    match mode {
        SummaryMode::Small => 12.0,
        SummaryMode::Medium => 14.0,
    }
}

/// Renders the summary rows with the grand total emphasised.
pub fn order_summary(ui: &mut Ui, summary: &OrderSummary, mode: SummaryMode) -> Response {
    let size = text_size(mode);
    let rows = summary.rows();
    let last = rows.len() - 1;

    ui.group(|ui| {
        Grid::new("order_summary")
            .num_columns(2)
            .spacing([32.0, 6.0])
            .show(ui, |ui| {
                for (index, (label, amount)) in rows.into_iter().enumerate() {
                    let label = RichText::new(label).size(size);
                    let amount = RichText::new(amount).size(size);
                    if index == last {
                        ui.label(label.strong());
                        ui.label(amount.strong());
                    } else {
                        ui.label(label);
                        ui.label(amount);
                    }
                    ui.end_row();
                }
            });
    })
    .response
}
