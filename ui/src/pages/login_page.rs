//! Login page for signed-out users.

use egui::Ui;
use turbo_business::{AuthCompute, Route, SignInInput};
use turbo_states::StateCtx;

use crate::widgets;

/// Renders the sign-in form, or leaves for the users page once authorized.
pub fn login_page(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let authorized = state_ctx
        .cached::<AuthCompute>()
        .is_some_and(AuthCompute::is_authorized);

    if authorized {
        state_ctx.state_mut::<SignInInput>().token.clear();
        state_ctx.update::<Route>(|route| *route = Route::Users);
        ui.ctx().request_repaint();
        return;
    }

    widgets::login_widget(state_ctx, ui);
}
