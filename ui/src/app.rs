use std::time::Duration;

use turbo_business::{RestoreSessionCommand, Route};

use crate::state::State;
use crate::{pages, widgets};

/// Polling interval while commands are in flight.
const TASK_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub struct TurboApp {
    state: State,
}

impl TurboApp {
    /// Called once before the first frame. Queues the session restore.
    pub fn new(mut state: State) -> Self {
        state.ctx.dispatch::<RestoreSessionCommand>();
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for TurboApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state_ctx = &mut self.state.ctx;
        state_ctx.sync_computes();

        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            widgets::navigation_bar(state_ctx, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let route = *state_ctx.state::<Route>();
            if !route.is_protected() {
                pages::login_page(state_ctx, ui);
                return;
            }
            widgets::auth_gate(state_ctx, ui, |state_ctx, ui| match route {
                Route::Dashboard => pages::dashboard_page(state_ctx, ui),
                Route::Users | Route::Login => pages::users_page(state_ctx, ui),
            });
        });

        state_ctx.flush_commands();
        if state_ctx.task_count() > 0 {
            ctx.request_repaint_after(TASK_REPAINT_INTERVAL);
        }
    }
}
