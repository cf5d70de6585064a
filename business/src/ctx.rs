//! State context wiring shared by the app and the tests.

use turbo_states::StateCtx;

use crate::{
    AuthCompute, BusinessConfig, FetchUsageMetricsCommand, OrderSummary, RefreshUsersCommand,
    RestoreSessionCommand, Route, SignInCommand, SignInInput, SignOutCommand, UpdateUserCommand,
    UpdateUserCompute, UpdateUserInput, UsageMetricsCompute, UsageMetricsInput, UserListCompute,
    UsersPageState,
};

/// Registers every state, compute and command of the dashboard.
pub fn build_state_ctx(config: BusinessConfig) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(config);
    ctx.add_state(Route::default());

    // session
    ctx.add_state(SignInInput::default());
    ctx.record_compute(AuthCompute::default());

    // users page
    ctx.add_state(UsersPageState::default());
    ctx.add_state(UpdateUserInput::default());
    ctx.record_compute(UserListCompute::default());
    ctx.record_compute(UpdateUserCompute::default());

    // dashboard
    ctx.add_state(UsageMetricsInput::default());
    ctx.add_state(OrderSummary::default());
    ctx.record_compute(UsageMetricsCompute::default());

    ctx.record_command(RestoreSessionCommand);
    ctx.record_command(SignInCommand);
    ctx.record_command(SignOutCommand);
    ctx.record_command(RefreshUsersCommand);
    ctx.record_command(UpdateUserCommand);
    ctx.record_command(FetchUsageMetricsCommand);

    ctx
}

/// Waits for every spawned task, applying updates as they land.
pub async fn await_pending_tasks(ctx: &mut StateCtx) {
    while ctx.task_count() > 0 {
        if ctx.task_set_mut().join_next().await.is_some() {
            ctx.sync_computes();
        }
    }
}

/// Spawns queued commands and waits for them to finish.
pub async fn flush_and_await(ctx: &mut StateCtx) {
    ctx.sync_computes();
    ctx.flush_commands();
    await_pending_tasks(ctx).await;
    ctx.sync_computes();
}
