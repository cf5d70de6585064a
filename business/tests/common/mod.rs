//! Shared fixtures for business integration tests.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use turbo_business::{AuthCompute, BusinessConfig, build_state_ctx};
use turbo_states::StateCtx;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "merchant-token";

/// Mock server plus a context pointed at it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_request_timeout(Duration::from_secs(5)).await
    }

    /// Context whose requests give up after `timeout`.
    pub async fn with_request_timeout(timeout: Duration) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;
        let config = BusinessConfig::new(mock_server.uri()).with_request_timeout(timeout);
        let ctx = build_state_ctx(config);

        Self { mock_server, ctx }
    }

    pub fn set_authenticated(&mut self) {
        self.ctx.updater().set(AuthCompute::authorized(TOKEN));
        self.ctx.sync_computes();
    }

    /// Flushes queued commands and waits (bounded) for every task.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while self.ctx.task_count() > 0 {
            let joined =
                tokio::time::timeout_at(deadline, self.ctx.task_set_mut().join_next()).await;
            assert!(joined.is_ok(), "command tasks did not finish in time");
            self.ctx.sync_computes();
        }
        self.ctx.sync_computes();
    }

    pub async fn mock_user_list(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/merchant/v1/users"))
            .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    /// Waits until the mock server has seen `count` requests.
    pub async fn wait_for_requests(&self, count: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            let seen = self
                .mock_server
                .received_requests()
                .await
                .map_or(0, |requests| requests.len());
            if seen >= count {
                return;
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "expected {count} requests, saw {seen}"
            );
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
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
