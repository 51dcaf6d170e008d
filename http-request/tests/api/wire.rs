//! What actually reaches the server for a given config.

use http_request::RequestConfig;
use payloads::responses::EchoedRequest;
use serde_json::json;
use test_helpers::spawn_app;

use crate::{Applied, helper_for};

async fn echo(config: RequestConfig) -> anyhow::Result<EchoedRequest> {
    let app = spawn_app().await;
    let helper = helper_for(&app);
    let applied = Applied::default();

    helper.send_request(config, applied.callback()).await;
    assert_eq!(helper.error(), None);
    Ok(serde_json::from_value(applied.take().remove(0))?)
}

#[tokio::test]
async fn get_sends_no_body_or_content_type() -> anyhow::Result<()> {
    let echoed = echo(RequestConfig::get("/api/echo")).await?;

    assert_eq!(echoed.method, "GET");
    assert_eq!(echoed.body, None);
    assert_eq!(echoed.header("content-type"), None);

    Ok(())
}

#[tokio::test]
async fn post_sends_json_text() -> anyhow::Result<()> {
    let config = RequestConfig::new("/api/echo")
        .method("POST")
        .body(json!({"name": "x"}));
    let echoed = echo(config).await?;

    assert_eq!(echoed.method, "POST");
    assert_eq!(echoed.body.as_deref(), Some(r#"{"name":"x"}"#));
    assert_eq!(echoed.header("content-type"), None);

    Ok(())
}

#[tokio::test]
async fn configured_headers_are_sent() -> anyhow::Result<()> {
    let config = RequestConfig::new("/api/echo")
        .method("put")
        .header("X-Trace", "abc");
    let echoed = echo(config).await?;

    assert_eq!(echoed.method, "PUT");
    assert_eq!(echoed.header("x-trace"), Some("abc"));

    Ok(())
}

#[tokio::test]
async fn empty_method_sends_get() -> anyhow::Result<()> {
    let echoed = echo(RequestConfig::new("/api/echo").method("")).await?;

    assert_eq!(echoed.method, "GET");
    assert_eq!(echoed.body, None);

    Ok(())
}

#[tokio::test]
async fn falsy_body_is_not_sent() -> anyhow::Result<()> {
    let config = RequestConfig::new("/api/echo")
        .method("POST")
        .body(json!(false));
    let echoed = echo(config).await?;

    assert_eq!(echoed.method, "POST");
    assert_eq!(echoed.body, None);

    Ok(())
}
