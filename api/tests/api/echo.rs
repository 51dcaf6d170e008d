use payloads::responses::EchoedRequest;
use test_helpers::spawn_app;

#[tokio::test]
async fn echo_describes_request() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let echoed: EchoedRequest = app
        .client
        .put(app.url("/api/echo"))
        .header("X-Trace", "abc")
        .body(r#"{"name":"x"}"#)
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(echoed.method, "PUT");
    assert_eq!(echoed.header("X-Trace"), Some("abc"));
    assert_eq!(echoed.body.as_deref(), Some(r#"{"name":"x"}"#));

    let echoed: EchoedRequest =
        app.client.get(app.url("/api/echo")).send().await?.json().await?;
    assert_eq!(echoed.method, "GET");
    assert_eq!(echoed.body, None);
    assert_eq!(echoed.header("content-type"), None);

    Ok(())
}
