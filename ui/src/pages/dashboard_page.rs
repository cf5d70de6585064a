//! Dashboard: API usage chart and order totals.

use egui::{ScrollArea, Ui};
use turbo_business::{OrderSummary, SummaryMode};
use turbo_states::StateCtx;

use crate::widgets;

pub fn dashboard_page(state_ctx: &mut StateCtx, ui: &mut Ui) {
    ScrollArea::vertical().show(ui, |ui| {
        widgets::chart_panel(state_ctx, ui);
        ui.add_space(16.0);

        ui.heading("Order Summary");
        let summary = *state_ctx.state::<OrderSummary>();
        widgets::order_summary(ui, &summary, SummaryMode::Medium);
    });
}
