//! Token sign-in form.

use egui::{Align, Layout, Response, RichText, TextEdit, Ui};
use turbo_business::{SignInCommand, SignInInput};
use turbo_states::StateCtx;

/// Displays the sign-in form. Blank tokens are never submitted.
pub fn login_widget(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut token = state_ctx.state::<SignInInput>().token.clone();
    let mut should_sign_in = false;

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(20.0);
            ui.heading("Turbo Merchant");
            ui.add_space(40.0);

            ui.label(RichText::new("Paste your merchant session token to continue.").weak());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Token:");
                let input = ui.add(
                    TextEdit::singleline(&mut token)
                        .password(true)
                        .hint_text("Session token"),
                );
                if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    should_sign_in = true;
                }
            });

            ui.add_space(16.0);

            let can_sign_in = !token.trim().is_empty();
            if ui
                .add_enabled(can_sign_in, egui::Button::new("Sign in"))
                .clicked()
            {
                should_sign_in = true;
            }
            should_sign_in &= can_sign_in;
        })
        .response;

    state_ctx.state_mut::<SignInInput>().token = token;
    if should_sign_in {
        state_ctx.dispatch::<SignInCommand>();
    }

    response
}
