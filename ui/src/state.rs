use turbo_business::{BusinessConfig, build_state_ctx};
use turbo_states::StateCtx;

/// The main application state.
#[derive(Debug)]
pub struct State {
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            ctx: build_state_ctx(config),
        }
    }

    /// Signed-out state pointed at a mock server.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }

    /// State whose session restores from `token` on the first frame.
    pub fn test_signed_in(base_url: String, token: &str) -> Self {
        Self::new(BusinessConfig::new(base_url).with_session_token(token))
    }
}
