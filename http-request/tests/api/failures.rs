use http_request::{RequestConfig, RequestHelper};
use test_helpers::{spawn_app, unreachable_address};

use crate::{Applied, helper_for};

#[tokio::test]
async fn non_success_status_is_request_failed() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let helper = helper_for(&app);
    let applied = Applied::default();

    let missing = format!("/api/items/{}", uuid::Uuid::nil());
    helper
        .send_request(RequestConfig::get(missing), applied.callback())
        .await;

    assert_eq!(helper.error().as_deref(), Some("Request failed!"));
    assert!(!helper.is_loading());
    assert!(applied.take().is_empty());

    Ok(())
}

#[tokio::test]
async fn rejected_body_is_request_failed() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let helper = helper_for(&app);
    let applied = Applied::default();

    let config = RequestConfig::post_json(
        "/api/items",
        serde_json::json!({"name": ""}),
    );
    helper.send_request(config, applied.callback()).await;

    assert_eq!(helper.error().as_deref(), Some("Request failed!"));
    assert!(applied.take().is_empty());
    assert!(app.list_items().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn non_json_body_is_a_parse_failure() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let helper = helper_for(&app);
    let applied = Applied::default();

    // 200 with a plain text body
    helper
        .send_request(RequestConfig::get("/api/health_check"), applied.callback())
        .await;

    let error = helper.error().expect("parse failure recorded");
    assert_ne!(error, "Request failed!");
    assert!(!error.is_empty());
    assert!(!helper.is_loading());
    assert!(applied.take().is_empty());

    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    let helper = RequestHelper::new(reqwest::Client::new());
    let applied = Applied::default();

    let url = format!("{}/api/items", unreachable_address());
    helper
        .send_request(RequestConfig::get(url), applied.callback())
        .await;

    let error = helper.error().expect("transport failure recorded");
    assert_ne!(error, "Request failed!");
    assert_ne!(error, "Something went wrong!");
    assert!(!helper.is_loading());
    assert!(applied.take().is_empty());
}
