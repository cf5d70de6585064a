//! Session state for the merchant dashboard.
//!
//! `AuthCompute` starts `Unknown` and is resolved exactly once at startup by
//! [`RestoreSessionCommand`]. After that it only moves between `Authorized`
//! and `Unauthorized`.

use std::future::Future;
use std::pin::Pin;

use log::info;
use turbo_states::{
    CancellationToken, Command, CommandSnapshot, LatestOnlyUpdater, impl_compute, impl_state,
};

use crate::BusinessConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Unknown,
    Authorized {
        token: String,
    },
    Unauthorized,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthCompute {
    pub status: AuthStatus,
}

impl_compute!(AuthCompute);

impl AuthCompute {
    pub fn authorized(token: impl Into<String>) -> Self {
        Self {
            status: AuthStatus::Authorized {
                token: token.into(),
            },
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            status: AuthStatus::Unauthorized,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.status {
            AuthStatus::Authorized { token } => Some(token),
            AuthStatus::Unknown | AuthStatus::Unauthorized => None,
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.token().is_some()
    }

    pub fn is_resolved(&self) -> bool {
        self.status != AuthStatus::Unknown
    }
}

fn resolve(token: Option<&str>) -> AuthCompute {
    match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => AuthCompute::authorized(token),
        None => AuthCompute::unauthorized(),
    }
}

/// Token typed into the login page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInInput {
    pub token: String,
}

impl_state!(SignInInput, snapshot);

/// Resolves the initial session from `BusinessConfig::session_token`.
#[derive(Debug, Default)]
pub struct RestoreSessionCommand;

impl Command for RestoreSessionCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let config: BusinessConfig = snap.state();
        let session = resolve(config.session_token.as_deref());
        info!(
            "RestoreSessionCommand: session {}",
            if session.is_authorized() { "restored" } else { "absent" }
        );
        updater.set(session);
        Box::pin(async {})
    }
}

#[derive(Debug, Default)]
pub struct SignInCommand;

impl Command for SignInCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let input: SignInInput = snap.state();
        let session = resolve(Some(&input.token));
        info!(
            "SignInCommand: {}",
            if session.is_authorized() { "signed in" } else { "empty token rejected" }
        );
        updater.set(session);
        Box::pin(async {})
    }
}

#[derive(Debug, Default)]
pub struct SignOutCommand;

impl Command for SignOutCommand {
    fn run(
        &self,
        _snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        info!("SignOutCommand: session cleared");
        updater.set(AuthCompute::unauthorized());
        Box::pin(async {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown() {
        let auth = AuthCompute::default();
        assert_eq!(auth.status, AuthStatus::Unknown);
        assert!(!auth.is_resolved());
        assert_eq!(auth.token(), None);
    }

    #[test]
    fn resolve_trims_and_rejects_blank_tokens() {
        assert_eq!(resolve(Some(" tok ")), AuthCompute::authorized("tok"));
        assert_eq!(resolve(Some("   ")), AuthCompute::unauthorized());
        assert_eq!(resolve(None), AuthCompute::unauthorized());
    }

    #[test]
    fn authorized_exposes_token() {
        let auth = AuthCompute::authorized("tok");
        assert!(auth.is_authorized());
        assert!(auth.is_resolved());
        assert_eq!(auth.token(), Some("tok"));
    }
}
