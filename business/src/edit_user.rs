//! Edit-user modal flow.
//!
//! ```text
//! Closed --open_for(email)--> Open --submit--> Open{submitting}
//!    ^                         |                   |
//!    +------- cancel ----------+                   +-- Success --> Closed (list refreshed)
//!                                                  +-- Error   --> Open{error}
//! ```

use std::future::Future;
use std::pin::Pin;

use log::{info, warn};
use turbo_states::{
    CancellationToken, Command, CommandSnapshot, LatestOnlyUpdater, impl_compute, impl_state,
};
use ustr::Ustr;

use crate::BusinessConfig;
use crate::api::{self, ApiError};
use crate::auth::AuthCompute;
use crate::list_users_compute::UserListCompute;
use crate::users::{EditUserForm, UserPatch, UserRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditModalState {
    #[default]
    Closed,
    Open {
        original: UserRecord,
        form: EditUserForm,
        submitting: bool,
        error: Option<String>,
    },
}

/// What the UI has to do after feeding an update result to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Pending,
    Saved,
    Failed,
}

impl EditModalState {
    /// Opens the modal on the row whose email matches. Unknown emails keep it closed.
    pub fn open_for(email: &str, users: &[UserRecord]) -> Self {
        match users.iter().find(|user| user.email == email) {
            Some(record) => Self::Open {
                original: record.clone(),
                form: EditUserForm::from_record(record),
                submitting: false,
                error: None,
            },
            None => {
                warn!("EditModalState: no user with email {email}");
                Self::Closed
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Open { submitting: true, .. })
    }

    pub fn form(&self) -> Option<&EditUserForm> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EditUserForm> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            Self::Closed => None,
        }
    }

    /// Changes the form would send; `None` while closed.
    pub fn patch(&self) -> Option<UserPatch> {
        match self {
            Self::Open { original, form, .. } => Some(UserPatch::diff(original, form)),
            Self::Closed => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.patch().is_some_and(|patch| !patch.is_empty())
    }

    /// Marks the modal as submitting and returns the request to dispatch.
    pub fn submit(&mut self) -> Option<UpdateUserInput> {
        if !self.can_submit() {
            return None;
        }
        let patch = self.patch()?;
        match self {
            Self::Open {
                form,
                submitting,
                error,
                ..
            } => {
                *submitting = true;
                *error = None;
                Some(UpdateUserInput {
                    email: Some(Ustr::from(&form.email)),
                    patch,
                })
            }
            Self::Closed => None,
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Applies the latest update result. Results for another email, or arriving
    /// while nothing was submitted, are ignored.
    pub fn on_update_result(&mut self, result: &UpdateUserResult) -> EditOutcome {
        let Self::Open {
            form,
            submitting,
            error,
            ..
        } = self
        else {
            return EditOutcome::Pending;
        };
        if !*submitting || result.email().is_none_or(|email| email != form.email) {
            return EditOutcome::Pending;
        }

        match result {
            UpdateUserResult::Success { .. } => {
                self.close();
                EditOutcome::Saved
            }
            UpdateUserResult::Error { error: err, .. } => {
                *submitting = false;
                *error = Some(err.to_string());
                EditOutcome::Failed
            }
            UpdateUserResult::Idle | UpdateUserResult::InFlight { .. } => EditOutcome::Pending,
        }
    }
}

/// UI-owned state of the users page.
#[derive(Debug, Default)]
pub struct UsersPageState {
    pub edit: EditModalState,
}

impl_state!(UsersPageState);

impl UsersPageState {
    pub fn open_edit(&mut self, email: &str, users: &[UserRecord]) -> bool {
        self.edit = EditModalState::open_for(email, users);
        self.edit.is_open()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserInput {
    pub email: Option<Ustr>,
    pub patch: UserPatch,
}

impl_state!(UpdateUserInput, snapshot);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UpdateUserResult {
    #[default]
    Idle,
    InFlight {
        email: Ustr,
    },
    Success {
        email: Ustr,
        response: serde_json::Value,
    },
    Error {
        email: Ustr,
        error: ApiError,
    },
}

impl UpdateUserResult {
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::InFlight { email } | Self::Success { email, .. } | Self::Error { email, .. } => {
                Some(email.as_str())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserCompute {
    pub result: UpdateUserResult,
}

impl_compute!(UpdateUserCompute);

impl UpdateUserCompute {
    pub fn is_in_flight(&self) -> bool {
        matches!(self.result, UpdateUserResult::InFlight { .. })
    }
}

/// PATCHes the user named by [`UpdateUserInput`].
///
/// The email must belong to the last loaded user list.
#[derive(Debug, Default)]
pub struct UpdateUserCommand;

impl Command for UpdateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let input: UpdateUserInput = snap.state();
        let config: BusinessConfig = snap.state();
        let auth: AuthCompute = snap.compute();
        let list: UserListCompute = snap.compute();

        let email = input.email.unwrap_or_default();
        let rejected = if email.is_empty() {
            Some(ApiError::InvalidRequest("email is required".to_owned()))
        } else if list.find(&email).is_none() {
            Some(ApiError::InvalidRequest(format!("unknown user {email}")))
        } else {
            None
        };
        if let Some(error) = rejected {
            warn!("UpdateUserCommand: {error}");
            updater.set(UpdateUserCompute {
                result: UpdateUserResult::Error { email, error },
            });
            return Box::pin(async {});
        }

        updater.set(UpdateUserCompute {
            result: UpdateUserResult::InFlight { email },
        });

        Box::pin(async move {
            let result = tokio::select! {
                () = cancel.cancelled() => {
                    info!("UpdateUserCommand: cancelled update of {email}");
                    return;
                }
                result = api::update_user(&config, auth.token(), &email, &input.patch) => result,
            };

            let result = match result {
                Ok(response) => {
                    info!("UpdateUserCommand: updated {email}");
                    UpdateUserResult::Success { email, response }
                }
                Err(error) => {
                    warn!("UpdateUserCommand: update of {email} failed: {error}");
                    UpdateUserResult::Error { email, error }
                }
            };
            updater.set(UpdateUserCompute { result });
        })
    }
}
