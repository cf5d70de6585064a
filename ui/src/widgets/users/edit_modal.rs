//! "Edit User" window.

use egui::{Button, Grid, TextEdit, Window};
use log::{info, warn};
use turbo_business::{
    EditOutcome, RefreshUsersCommand, UpdateUserCommand, UpdateUserCompute, UpdateUserInput,
    UsersPageState,
};
use turbo_states::StateCtx;

use crate::utils::colors::COLOR_RED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalAction {
    None,
    Save,
    Cancel,
}

/// Shows the edit window while a user is selected and applies update results.
///
/// A successful save closes the window and refreshes the list. A failed one
/// keeps the window open with the error text.
pub fn edit_modal(state_ctx: &mut StateCtx, ctx: &egui::Context) {
    let result = state_ctx.compute::<UpdateUserCompute>().result.clone();
    let outcome = state_ctx
        .state_mut::<UsersPageState>()
        .edit
        .on_update_result(&result);
    match outcome {
        EditOutcome::Saved => {
            info!("edit modal: saved {}", result.email().unwrap_or_default());
            state_ctx.updater().set(UpdateUserCompute::default());
            state_ctx.dispatch::<RefreshUsersCommand>();
        }
        EditOutcome::Failed => warn!("edit modal: save failed, keeping the form open"),
        EditOutcome::Pending => {}
    }

    let page = state_ctx.state_mut::<UsersPageState>();
    if !page.edit.is_open() {
        return;
    }

    let submitting = page.edit.is_submitting();
    let error = page.edit.error().map(str::to_owned);
    let mut action = ModalAction::None;
    let mut open = true;

    Window::new("Edit User")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            if let Some(error) = &error {
                ui.colored_label(COLOR_RED, format!("Error: {error}"));
                ui.add_space(8.0);
            }

            if let Some(form) = page.edit.form_mut() {
                ui.add_enabled_ui(!submitting, |ui| {
                    Grid::new("edit_user_form")
                        .num_columns(2)
                        .spacing([12.0, 8.0])
                        .show(ui, |ui| {
                            ui.label("Full name");
                            ui.add(TextEdit::singleline(&mut form.full_name));
                            ui.end_row();

                            ui.label("Email");
                            ui.label(form.email.as_str());
                            ui.end_row();

                            ui.label("Phone");
                            ui.add(TextEdit::singleline(&mut form.phone_number));
                            ui.end_row();

                            ui.label("Role");
                            ui.add(TextEdit::singleline(&mut form.role));
                            ui.end_row();

                            ui.label("Status");
                            ui.checkbox(&mut form.enabled, "Enabled");
                            ui.end_row();
                        });
                });
            }

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(page.edit.can_submit(), Button::new("Save"))
                    .clicked()
                {
                    action = ModalAction::Save;
                }
                if ui.button("Cancel").clicked() {
                    action = ModalAction::Cancel;
                }
                if submitting {
                    ui.spinner();
                    ui.label("Saving...");
                }
            });
        });

    if !open {
        action = ModalAction::Cancel;
    }

    match action {
        ModalAction::Save => submit(state_ctx),
        ModalAction::Cancel => cancel(state_ctx),
        ModalAction::None => {}
    }
}

fn submit(state_ctx: &mut StateCtx) {
    let Some(input) = state_ctx.state_mut::<UsersPageState>().edit.submit() else {
        return;
    };
    state_ctx.update::<UpdateUserInput>(|current| *current = input);
    state_ctx.dispatch::<UpdateUserCommand>();
}

fn cancel(state_ctx: &mut StateCtx) {
    state_ctx.state_mut::<UsersPageState>().edit.close();
    state_ctx.cancel::<UpdateUserCommand>();
    state_ctx.updater().set(UpdateUserCompute::default());
}
