//! Top navigation bar.

use egui::{Align, Layout, Response, RichText, Ui};
use log::info;
use turbo_business::{
    AuthCompute, FetchUsageMetricsCommand, RefreshUsersCommand, Route, SignInInput,
    SignOutCommand, UpdateUserCommand, UpdateUserCompute, UsageMetricsCompute, UserListCompute,
    UsersPageState,
};
use turbo_states::StateCtx;

const ATTRIBUTION_URL: &str = "https://unicommerce.com";

/// Renders the back button, brand, page links and the sign-out control.
pub fn navigation_bar(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let authorized = state_ctx
        .cached::<AuthCompute>()
        .is_some_and(AuthCompute::is_authorized);
    let route = *state_ctx.state::<Route>();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(authorized && route != Route::Users, egui::Button::new("⬅ Back"))
            .on_hover_text("Back to users")
            .clicked()
        {
            navigate(state_ctx, Route::Users);
        }

        ui.label(RichText::new("Turbo Merchant").strong());

        if authorized {
            ui.separator();
            for target in [Route::Users, Route::Dashboard] {
                if ui
                    .selectable_label(route == target, target.title())
                    .clicked()
                {
                    navigate(state_ctx, target);
                }
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if authorized && ui.button("Sign out").clicked() {
                sign_out(state_ctx);
            }
            ui.hyperlink_to("TURBO", ATTRIBUTION_URL);
            ui.label(RichText::new("Powered by").weak());
        });
    })
    .response
}

fn navigate(state_ctx: &mut StateCtx, target: Route) {
    state_ctx.update::<Route>(|route| *route = target);
}

/// Ends the session and drops everything fetched with it.
///
/// In-flight requests are cancelled so their results never land after the
/// session is gone. The auth gate performs the redirect once the session is
/// cleared.
pub fn sign_out(state_ctx: &mut StateCtx) {
    info!("signing out");
    state_ctx.cancel::<RefreshUsersCommand>();
    state_ctx.cancel::<UpdateUserCommand>();
    state_ctx.cancel::<FetchUsageMetricsCommand>();

    let updater = state_ctx.updater();
    updater.set(UserListCompute::default());
    updater.set(UpdateUserCompute::default());
    updater.set(UsageMetricsCompute::default());

    state_ctx.state_mut::<UsersPageState>().edit.close();
    state_ctx.state_mut::<SignInInput>().token.clear();
    state_ctx.dispatch::<SignOutCommand>();
}
