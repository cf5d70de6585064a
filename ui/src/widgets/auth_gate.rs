//! Gate for protected pages.

use egui::{Align, Layout, Ui};
use turbo_business::{AuthCompute, AuthStatus, Route};
use turbo_states::StateCtx;

/// Renders `children` only once the session is authorized.
///
/// While the session is still resolving a spinner is shown. An unauthorized
/// session is sent to the login route and `children` never runs.
pub fn auth_gate<R>(
    state_ctx: &mut StateCtx,
    ui: &mut Ui,
    children: impl FnOnce(&mut StateCtx, &mut Ui) -> R,
) -> Option<R> {
    let status = state_ctx
        .cached::<AuthCompute>()
        .map(|auth| auth.status.clone())
        .unwrap_or_default();

    match status {
        AuthStatus::Authorized { .. } => Some(children(state_ctx, ui)),
        AuthStatus::Unauthorized => {
            state_ctx.update::<Route>(|route| *route = Route::Login);
            ui.ctx().request_repaint();
            checking(ui);
            None
        }
        AuthStatus::Unknown => {
            checking(ui);
            None
        }
    }
}

fn checking(ui: &mut Ui) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(40.0);
        ui.spinner();
    });
}
