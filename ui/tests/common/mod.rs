#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use serde_json::{Value, json};
use turbo_business::{UserListCompute, UsersPageState};
use turbo_ui::TurboApp;
use turbo_ui::state::State;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "merchant-token";

/// Upper bound of frames `run_until` steps before giving up.
const MAX_FRAMES: usize = 200;
const FRAME_PAUSE: Duration = Duration::from_millis(10);

pub struct TestCtx<'a> {
    pub mock_server: MockServer,
    harness: Harness<'a, TurboApp>,
}

impl<'a> TestCtx<'a> {
    /// App whose session restores from [`TOKEN`].
    pub async fn signed_in() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let app = TurboApp::new(State::test_signed_in(mock_server.uri(), TOKEN));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    /// App without a configured session.
    pub async fn signed_out() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let app = TurboApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, TurboApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, TurboApp> {
        &self.harness
    }

    /// Steps frames, yielding to the runtime in between, until `done` holds.
    pub async fn run_until(&mut self, mut done: impl FnMut(&Harness<'a, TurboApp>) -> bool) {
        for _ in 0..MAX_FRAMES {
            self.harness.step();
            if done(&self.harness) {
                // one more frame so widgets reflect the state that satisfied `done`
                self.harness.step();
                return;
            }
            tokio::time::sleep(FRAME_PAUSE).await;
        }
        panic!("condition not reached within {MAX_FRAMES} frames");
    }

    /// Steps until the user list has been loaded.
    pub async fn wait_for_users(&mut self) {
        self.run_until(|harness| users_loaded(harness)).await;
    }

    pub async fn mock_user_list(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/merchant/v1/users"))
            .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }
}

pub fn users_loaded(harness: &Harness<'_, TurboApp>) -> bool {
    harness
        .state()
        .state()
        .ctx
        .compute::<UserListCompute>()
        .users()
        .is_some()
}

pub fn page_state<'h>(harness: &'h Harness<'_, TurboApp>) -> &'h UsersPageState {
    harness.state().state().ctx.state::<UsersPageState>()
}

pub fn users_body(users: &[(&str, &str, &str, bool)]) -> Value {
    let list: Vec<Value> = users
        .iter()
        .map(|(name, email, role, enabled)| {
            json!({
                "fullName": name,
                "email": email,
                "phoneNumber": "9876543210",
                "userRole": [role],
                "userStatus": enabled,
            })
        })
        .collect();
    json!({ "usersList": list })
}

pub fn sample_users() -> Value {
    users_body(&[
        ("Alice Admin", "alice@shop.in", "ADMIN", true),
        ("Bob Viewer", "bob@shop.in", "VIEWER", false),
    ])
}
