use payloads::{Item, ItemId};
use reqwest::StatusCode;
use test_helpers::{mock::DevDataset, spawn_app};

#[tokio::test]
async fn create_and_list_items() -> anyhow::Result<()> {
    let app = spawn_app().await;
    assert!(app.list_items().await?.is_empty());

    let dataset = DevDataset::create(&app).await?;
    assert_eq!(app.list_items().await?, dataset.items);

    Ok(())
}

#[tokio::test]
async fn get_and_delete_item() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let item = app.create_item("Buy groceries").await?;
    let path = format!("/api/items/{}", item.id);

    let fetched: Item = app
        .client
        .get(app.url(&path))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(fetched, item);

    let response = app.client.delete(app.url(&path)).send().await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.client.get(app.url(&path)).send().await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await?, "Not found: Item not found");

    let response = app.client.delete(app.url(&path)).send().await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn unknown_item_ids_are_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let missing = ItemId(uuid::Uuid::nil());
    let response = app
        .client
        .get(app.url(&format!("/api/items/{missing}")))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.client.get(app.url("/api/items/not-a-uuid")).send().await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn invalid_names_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/items"))
        .json(&serde_json::json!({"name": "   "}))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await?,
        "Bad request: Item name must not be empty"
    );

    let response = app
        .client
        .post(app.url("/api/items"))
        .json(&serde_json::json!({"name": "x".repeat(256)}))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(app.list_items().await?.is_empty());
    Ok(())
}
