//! Users page panel: toolbar, table and the edit modal.

use egui::{Response, ScrollArea, Ui};
use turbo_business::{
    RefreshUsersCommand, UpdateUserCommand, UpdateUserCompute, UserListCompute, UserRecord,
    UsersPageState, UsersTableModel,
};
use turbo_states::StateCtx;

use super::edit_modal::edit_modal;
use super::table::users_table;
use crate::utils::colors::{COLOR_AMBER, COLOR_RED};

/// Displays the user list. The first frame with an idle list starts a fetch.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let list = state_ctx.compute::<UserListCompute>().clone();
    if list.is_idle() {
        state_ctx.dispatch::<RefreshUsersCommand>();
    }

    let mut edit_email: Option<String> = None;

    let response = ui
        .vertical(|ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!list.is_loading(), egui::Button::new("🔄 Refresh"))
                    .clicked()
                {
                    state_ctx.dispatch::<RefreshUsersCommand>();
                }
                if list.is_loading() {
                    ui.spinner();
                    ui.colored_label(COLOR_AMBER, "Loading users...");
                } else if let Some(fetched_at) = list.fetched_at() {
                    ui.label(
                        egui::RichText::new(format!(
                            "Last updated {}",
                            fetched_at.format("%H:%M:%S")
                        ))
                        .weak(),
                    );
                }
            });

            if let Some(error) = list.error() {
                ui.colored_label(COLOR_RED, format!("Error: {error}"));
            }

            ui.add_space(8.0);

            if let Some(users) = list.users() {
                let model = UsersTableModel::build(users);
                ScrollArea::horizontal().show(ui, |ui| {
                    users_table(ui, &model, |email| edit_email = Some(email.to_owned()));
                });
            }
        })
        .response;

    if let Some(email) = edit_email {
        open_editor(state_ctx, &email, list.users().unwrap_or_default());
    }

    edit_modal(state_ctx, ui.ctx());

    response
}

fn open_editor(state_ctx: &mut StateCtx, email: &str, users: &[UserRecord]) {
    if state_ctx
        .state_mut::<UsersPageState>()
        .open_edit(email, users)
    {
        // A result left over from a previous edit must not close the new one.
        state_ctx.cancel::<UpdateUserCommand>();
        state_ctx.updater().set(UpdateUserCompute::default());
    }
}
