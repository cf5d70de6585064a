//! Refreshing the user list from the users page.

mod common;

use std::time::Duration;

use common::{TOKEN, TestCtx, sample_users, users_body};
use kittest::Queryable;
use turbo_business::{RefreshUsersCommand, UserListCompute};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn list_emails(ctx: &TestCtx<'_>) -> Vec<String> {
    ctx.harness()
        .state()
        .state()
        .ctx
        .compute::<UserListCompute>()
        .users()
        .unwrap_or_default()
        .iter()
        .map(|user| user.email.clone())
        .collect()
}

#[tokio::test]
async fn first_frame_fetches_and_shows_loading() {
    let mut ctx = TestCtx::signed_in().await;
    Mock::given(method("GET"))
        .and(path("/merchant/v1/users"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_users())
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.run_until(|harness| harness.query_by_label("Loading users...").is_some())
        .await;
    ctx.wait_for_users().await;

    assert!(ctx.harness().query_by_label("Loading users...").is_none());
    assert!(ctx.harness().query_by_label("2 users").is_some());
}

#[tokio::test]
async fn refresh_button_refetches() {
    let mut ctx = TestCtx::signed_in().await;
    ctx.mock_user_list(sample_users()).await;
    ctx.wait_for_users().await;

    ctx.mock_server.reset().await;
    ctx.mock_user_list(users_body(&[("Dan New", "dan@shop.in", "ADMIN", true)]))
        .await;

    ctx.harness_mut().get_by_label("🔄 Refresh").click();
    ctx.run_until(|harness| harness.query_by_label("dan@shop.in").is_some())
        .await;

    assert!(ctx.harness().query_by_label("1 users").is_some());
}

#[tokio::test]
async fn later_refresh_wins_over_a_slow_earlier_one() {
    let mut ctx = TestCtx::signed_in().await;
    Mock::given(method("GET"))
        .and(path("/merchant/v1/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users_body(&[("Old", "old@shop.in", "ADMIN", true)]))
                .set_delay(Duration::from_millis(600)),
        )
        .up_to_n_times(1)
        .mount(&ctx.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/merchant/v1/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users_body(&[("New", "new@shop.in", "ADMIN", true)])),
        )
        .mount(&ctx.mock_server)
        .await;

    // The first frames start the slow fetch.
    ctx.run_until(|harness| {
        harness
            .state()
            .state()
            .ctx
            .compute::<UserListCompute>()
            .is_loading()
    })
    .await;
    for _ in 0..100 {
        let seen = ctx
            .mock_server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len());
        if seen >= 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    ctx.harness_mut()
        .state_mut()
        .state_mut()
        .ctx
        .dispatch::<RefreshUsersCommand>();
    ctx.run_until(|harness| harness.query_by_label("new@shop.in").is_some())
        .await;

    // Outlive the slow response and keep rendering.
    tokio::time::sleep(Duration::from_millis(700)).await;
    for _ in 0..5 {
        ctx.harness_mut().step();
    }

    assert_eq!(list_emails(&ctx), vec!["new@shop.in".to_owned()]);
    assert!(ctx.harness().query_by_label("old@shop.in").is_none());
}

#[tokio::test]
async fn table_stays_visible_while_refreshing() {
    let mut ctx = TestCtx::signed_in().await;
    ctx.mock_user_list(sample_users()).await;
    ctx.wait_for_users().await;

    ctx.mock_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/merchant/v1/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_users())
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&ctx.mock_server)
        .await;

    ctx.harness_mut().get_by_label("🔄 Refresh").click();
    ctx.run_until(|harness| harness.query_by_label("Loading users...").is_some())
        .await;

    assert!(ctx.harness().query_by_label("alice@shop.in").is_some());
    assert!(ctx.harness().query_by_label("2 users").is_some());
    assert_eq!(ctx.harness().query_all_by_label("Edit").count(), 2);

    ctx.run_until(|harness| harness.query_by_label("Loading users...").is_none())
        .await;
    assert!(ctx.harness().query_by_label("2 users").is_some());
}
