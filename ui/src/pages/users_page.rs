use egui::Ui;
use turbo_states::StateCtx;

use crate::widgets;

pub fn users_page(state_ctx: &mut StateCtx, ui: &mut Ui) {
    ui.heading("Users");
    ui.add_space(8.0);
    widgets::users_panel(state_ctx, ui);
}
