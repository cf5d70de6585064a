//! `RefreshUsersCommand` against a mock merchant API.

mod common;

use std::time::Duration;

use common::{TOKEN, TestContext, sample_users, users_body};
use turbo_business::{
    ApiError, AuthCompute, BusinessConfig, RefreshUsersCommand, UserListCompute, UserListResult,
    UserStatus, build_state_ctx, flush_and_await,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn emails(ctx: &TestContext) -> Vec<String> {
    ctx.ctx
        .compute::<UserListCompute>()
        .users()
        .map(|users| users.iter().map(|u| u.email.clone()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn refresh_loads_users_with_bearer_token() {
    let mut ctx = TestContext::new().await;
    ctx.set_authenticated();
    ctx.mock_user_list(sample_users()).await;

    ctx.ctx.dispatch::<RefreshUsersCommand>();
    ctx.flush_and_wait().await;

    let list = ctx.ctx.compute::<UserListCompute>();
    let users = list.users().expect("users should be loaded");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].display_role(), "ADMIN");
    assert_eq!(users[1].status(), UserStatus::Disabled);
    assert!(list.fetched_at().is_some());
}

#[tokio::test]
async fn refresh_shows_loading_until_response_arrives() {
    let mut ctx = TestContext::new().await;
    ctx.set_authenticated();
    Mock::given(method("GET"))
        .and(path("/merchant/v1/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_users())
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&ctx.mock_server)
        .await;

    ctx.ctx.dispatch::<RefreshUsersCommand>();
    ctx.ctx.flush_commands();
    ctx.ctx.sync_computes();
    assert!(ctx.ctx.compute::<UserListCompute>().is_loading());

    ctx.flush_and_wait().await;
    assert_eq!(emails(&ctx), ["alice@shop.in", "bob@shop.in"]);
}

#[tokio::test]
async fn server_error_is_reported_with_status_text() {
    let mut ctx = TestContext::new().await;
    ctx.set_authenticated();
    Mock::given(method("GET"))
        .and(path("/merchant/v1/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&ctx.mock_server)
        .await;

    ctx.ctx.dispatch::<RefreshUsersCommand>();
    ctx.flush_and_wait().await;

    let err = ctx
        .ctx
        .compute::<UserListCompute>()
        .error()
        .cloned()
        .expect("refresh should fail");
    assert_eq!(
        err,
        ApiError::Status {
            status: 503,
            status_text: "Service Unavailable".to_owned()
        }
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mut ctx = TestContext::new().await;
    ctx.set_authenticated();
    Mock::given(method("GET"))
        .and(path("/merchant/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&ctx.mock_server)
        .await;

    ctx.ctx.dispatch::<RefreshUsersCommand>();
    ctx.flush_and_wait().await;

    // wiremock serves string bodies as text/plain
    assert!(matches!(
        ctx.ctx.compute::<UserListCompute>().error(),
        Some(ApiError::Decode(message)) if message.contains("text/plain")
    ));
}

#[tokio::test]
async fn refresh_without_session_sends_nothing() {
    let mut ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    ctx.ctx.dispatch::<RefreshUsersCommand>();
    ctx.flush_and_wait().await;

    assert_eq!(
        ctx.ctx.compute::<UserListCompute>().result,
        UserListResult::Error {
            error: ApiError::Unauthenticated,
            previous: None,
        }
    );
}

#[tokio::test]
async fn later_dispatch_wins_over_slow_earlier_fetch() {
    let mut ctx = TestContext::new().await;
    ctx.set_authenticated();

    // first request: slow, stale data
    Mock::given(method("GET"))
        .and(path("/merchant/v1/users"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users_body(&[("Old", "old@shop.in", "ADMIN", true)]))
                .set_delay(Duration::from_millis(500)),
        )
        .up_to_n_times(1)
        .mount(&ctx.mock_server)
        .await;
    // every later request: fresh data
    ctx.mock_user_list(users_body(&[("New", "new@shop.in", "ADMIN", true)]))
        .await;

    ctx.ctx.dispatch::<RefreshUsersCommand>();
    ctx.ctx.flush_commands();
    ctx.wait_for_requests(1).await;

    ctx.ctx.dispatch::<RefreshUsersCommand>();
    ctx.flush_and_wait().await;

    assert_eq!(emails(&ctx), ["new@shop.in"]);

    // nothing left in flight can overwrite it
    tokio::time::sleep(Duration::from_millis(600)).await;
    ctx.ctx.sync_computes();
    assert_eq!(emails(&ctx), ["new@shop.in"]);
}

#[tokio::test]
async fn timed_out_refresh_is_a_network_error_and_keeps_the_list() {
    let mut ctx = TestContext::with_request_timeout(Duration::from_millis(100)).await;
    ctx.set_authenticated();
    ctx.mock_user_list(sample_users()).await;
    ctx.ctx.dispatch::<RefreshUsersCommand>();
    ctx.flush_and_wait().await;
    assert_eq!(emails(&ctx), ["alice@shop.in", "bob@shop.in"]);

    ctx.mock_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/merchant/v1/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_users())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&ctx.mock_server)
        .await;

    ctx.ctx.dispatch::<RefreshUsersCommand>();
    ctx.flush_and_wait().await;

    let list = ctx.ctx.compute::<UserListCompute>();
    match list.error() {
        Some(ApiError::Network(message)) => assert!(message.contains("timed out"), "{message}"),
        other => panic!("expected a network error, got {other:?}"),
    }
    assert!(!list.is_loading());
    assert_eq!(emails(&ctx), ["alice@shop.in", "bob@shop.in"]);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let _ = env_logger::builder().is_test(true).try_init();
    // bind then release a port so nothing is listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .unwrap();

    let mut ctx = build_state_ctx(
        BusinessConfig::new(format!("http://127.0.0.1:{port}"))
            .with_request_timeout(Duration::from_secs(5)),
    );
    ctx.updater().set(AuthCompute::authorized(TOKEN));
    ctx.sync_computes();

    ctx.dispatch::<RefreshUsersCommand>();
    flush_and_await(&mut ctx).await;

    let list = ctx.compute::<UserListCompute>();
    assert!(
        matches!(list.error(), Some(ApiError::Network(_))),
        "expected a network error, got {:?}",
        list.result
    );
    assert!(list.users().is_none());
}
