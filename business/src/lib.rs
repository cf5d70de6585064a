//! Business layer of the Turbo merchant dashboard: domain types, the merchant
//! API client and the states, computes and commands the UI drives.

pub mod api;
pub mod auth;
pub mod config;
pub mod ctx;
pub mod edit_user;
pub mod http;
pub mod list_users_compute;
pub mod metrics;
pub mod order_summary;
pub mod route;
pub mod users;
pub mod users_table;

pub use api::{ApiError, ApiResult};
pub use auth::{
    AuthCompute, AuthStatus, RestoreSessionCommand, SignInCommand, SignInInput, SignOutCommand,
};
pub use config::{BusinessConfig, ConfigError};
pub use ctx::{await_pending_tasks, build_state_ctx, flush_and_await};
pub use edit_user::{
    EditModalState, EditOutcome, UpdateUserCommand, UpdateUserCompute, UpdateUserInput,
    UpdateUserResult, UsersPageState,
};
pub use list_users_compute::{LoadedUsers, RefreshUsersCommand, UserListCompute, UserListResult};
pub use metrics::{
    ChartTab, FetchUsageMetricsCommand, MetricsDuration, UsageMetricsCompute, UsageMetricsInput,
    UsageMetricsResult, UsagePoint,
};
pub use order_summary::{OrderSummary, SummaryMode, format_rupees};
pub use route::Route;
pub use users::{EditUserForm, UserListResponse, UserPatch, UserRecord, UserStatus};
pub use users_table::{CellContent, UserColumn, UserRow, UsersTableModel};
