use actix_web::{HttpResponse, delete, get, post, web};
use jiff::Timestamp;
use payloads::{ItemId, requests};

use crate::store::ItemStore;

use super::APIError;

#[tracing::instrument(skip(store))]
#[get("/items")]
pub async fn list_items(
    store: web::Data<ItemStore>,
) -> Result<HttpResponse, APIError> {
    let items = store.list_items()?;
    Ok(HttpResponse::Ok().json(items))
}

#[tracing::instrument(skip(store), ret)]
#[post("/items")]
pub async fn create_item(
    details: web::Json<requests::CreateItem>,
    store: web::Data<ItemStore>,
) -> Result<HttpResponse, APIError> {
    let item = store.create_item(&details, Timestamp::now())?;
    Ok(HttpResponse::Ok().json(item))
}

#[tracing::instrument(skip(store))]
#[get("/items/{item_id}")]
pub async fn get_item(
    item_id: web::Path<ItemId>,
    store: web::Data<ItemStore>,
) -> Result<HttpResponse, APIError> {
    let item = store.get_item(&item_id)?;
    Ok(HttpResponse::Ok().json(item))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/items/{item_id}")]
pub async fn delete_item(
    item_id: web::Path<ItemId>,
    store: web::Data<ItemStore>,
) -> Result<HttpResponse, APIError> {
    store.delete_item(&item_id)?;
    Ok(HttpResponse::Ok().finish())
}
