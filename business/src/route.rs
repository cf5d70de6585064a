//! Which page the app shows.

use turbo_states::impl_state;

/// Every route except `Login` sits behind the auth gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    Login,
    #[default]
    Users,
    Dashboard,
}

impl_state!(Route, snapshot);

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Users => "Users",
            Self::Dashboard => "Dashboard",
        }
    }

    pub fn is_protected(self) -> bool {
        self != Self::Login
    }
}
