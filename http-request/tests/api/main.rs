mod failures;
mod wire;

use std::cell::RefCell;
use std::rc::Rc;

use http_request::{RequestConfig, RequestHelper};
use payloads::Item;
use serde_json::Value;
use test_helpers::{TestApp, spawn_app};

fn helper_for(app: &TestApp) -> RequestHelper {
    RequestHelper::new(reqwest::Client::new()).with_base_url(app.base_url())
}

/// Collects every payload passed to `apply_data`.
#[derive(Clone, Default)]
struct Applied(Rc<RefCell<Vec<Value>>>);

impl Applied {
    fn callback(&self) -> impl FnOnce(Value) + use<> {
        let applied = self.0.clone();
        move |data| applied.borrow_mut().push(data)
    }

    fn take(&self) -> Vec<Value> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

#[tokio::test]
async fn get_applies_parsed_body() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let item = app.create_item("Buy groceries").await?;
    let helper = helper_for(&app);
    let applied = Applied::default();

    let request =
        helper.send_request(RequestConfig::get("/api/items"), applied.callback());
    assert!(helper.is_loading());
    request.await;

    assert!(!helper.is_loading());
    assert_eq!(helper.error(), None);
    let applied = applied.take();
    assert_eq!(applied.len(), 1);
    let items: Vec<Item> = serde_json::from_value(applied[0].clone())?;
    assert_eq!(items, vec![item]);

    Ok(())
}

#[tokio::test]
async fn post_creates_item() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let helper = helper_for(&app);
    let applied = Applied::default();

    let config = RequestConfig::post_json(
        "/api/items",
        serde_json::json!({"name": "Water the plants"}),
    );
    helper.send_request(config, applied.callback()).await;

    assert_eq!(helper.error(), None);
    let created: Item = serde_json::from_value(applied.take().remove(0))?;
    assert_eq!(created.name, "Water the plants");
    assert_eq!(app.list_items().await?, vec![created]);

    Ok(())
}

#[tokio::test]
async fn success_after_failure_clears_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let helper = helper_for(&app);
    let applied = Applied::default();

    helper
        .send_request(RequestConfig::get("/api/items/unknown"), applied.callback())
        .await;
    assert_eq!(helper.error().as_deref(), Some("Request failed!"));

    let request =
        helper.send_request(RequestConfig::get("/api/items"), applied.callback());
    assert_eq!(helper.error(), None);
    request.await;

    assert_eq!(helper.error(), None);
    assert_eq!(applied.take(), vec![serde_json::json!([])]);

    Ok(())
}
