//! User list cache and the command that refreshes it.
//!
//! UI reads `ctx.cached::<UserListCompute>()` and dispatches
//! `ctx.dispatch::<RefreshUsersCommand>()`. Overlapping refreshes are resolved
//! by the context: only the newest dispatch may publish.

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};
use log::{info, warn};
use turbo_states::{CancellationToken, Command, CommandSnapshot, LatestOnlyUpdater, impl_compute};

use crate::BusinessConfig;
use crate::api::{self, ApiError};
use crate::auth::AuthCompute;
use crate::users::UserRecord;

/// Users from the last successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedUsers {
    pub users: Vec<UserRecord>,
    pub fetched_at: DateTime<Utc>,
}

/// `Loading` and `Error` keep the previous list so the table stays populated
/// while a refresh is in flight or after it failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserListResult {
    #[default]
    Idle,
    Loading {
        previous: Option<LoadedUsers>,
    },
    Loaded(LoadedUsers),
    Error {
        error: ApiError,
        previous: Option<LoadedUsers>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListCompute {
    pub result: UserListResult,
}

impl_compute!(UserListCompute);

impl UserListCompute {
    pub fn loaded(users: Vec<UserRecord>) -> Self {
        Self {
            result: UserListResult::Loaded(LoadedUsers {
                users,
                fetched_at: Utc::now(),
            }),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.result == UserListResult::Idle
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.result, UserListResult::Loading { .. })
    }

    /// The last successfully loaded list, whatever the current request state.
    pub fn last_loaded(&self) -> Option<&LoadedUsers> {
        match &self.result {
            UserListResult::Loaded(loaded) => Some(loaded),
            UserListResult::Loading { previous } | UserListResult::Error { previous, .. } => {
                previous.as_ref()
            }
            UserListResult::Idle => None,
        }
    }

    pub fn users(&self) -> Option<&[UserRecord]> {
        self.last_loaded().map(|loaded| loaded.users.as_slice())
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.last_loaded().map(|loaded| loaded.fetched_at)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.result {
            UserListResult::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn find(&self, email: &str) -> Option<&UserRecord> {
        self.users()?.iter().find(|user| user.email == email)
    }
}

#[derive(Debug, Default)]
pub struct RefreshUsersCommand;

impl Command for RefreshUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let config: BusinessConfig = snap.state();
        let auth: AuthCompute = snap.compute();
        let current: UserListCompute = snap.compute();
        let previous = current.last_loaded().cloned();

        // published before the future runs so the next frame already shows the spinner
        updater.set(UserListCompute {
            result: UserListResult::Loading {
                previous: previous.clone(),
            },
        });

        Box::pin(async move {
            let result = tokio::select! {
                () = cancel.cancelled() => {
                    info!("RefreshUsersCommand: superseded, dropping request");
                    return;
                }
                result = api::fetch_user_list(&config, auth.token()) => result,
            };

            match result {
                Ok(users) => {
                    info!("RefreshUsersCommand: loaded {} users", users.len());
                    updater.set(UserListCompute::loaded(users));
                }
                Err(err) => {
                    warn!("RefreshUsersCommand: {err}");
                    updater.set(UserListCompute {
                        result: UserListResult::Error {
                            error: err,
                            previous,
                        },
                    });
                }
            }
        })
    }
}
