//! In-memory item store.
//!
//! Items live only as long as the server process. Listing returns them in
//! creation order.

use std::sync::{Mutex, MutexGuard};

use jiff::Timestamp;
use payloads::requests::{self, ITEM_NAME_MAX_LEN};
use payloads::{Item, ItemId};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Item not found")]
    ItemNotFound,
    #[error("Item name must not be empty")]
    EmptyName,
    #[error("Item name must be at most {ITEM_NAME_MAX_LEN} characters")]
    NameTooLong,
    #[error("Item store is unavailable")]
    Poisoned,
}

#[derive(Debug, Default)]
pub struct ItemStore {
    items: Mutex<Vec<Item>>,
}

impl ItemStore {
    fn items(&self) -> Result<MutexGuard<'_, Vec<Item>>, StoreError> {
        self.items.lock().map_err(|_| StoreError::Poisoned)
    }

    pub fn create_item(
        &self,
        details: &requests::CreateItem,
        now: Timestamp,
    ) -> Result<Item, StoreError> {
        let name = details.name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if name.chars().count() > ITEM_NAME_MAX_LEN {
            return Err(StoreError::NameTooLong);
        }

        let item = Item {
            id: ItemId(Uuid::new_v4()),
            name: name.to_string(),
            created_at: now,
        };
        self.items()?.push(item.clone());
        Ok(item)
    }

    pub fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items()?.clone())
    }

    pub fn get_item(&self, item_id: &ItemId) -> Result<Item, StoreError> {
        self.items()?
            .iter()
            .find(|item| item.id == *item_id)
            .cloned()
            .ok_or(StoreError::ItemNotFound)
    }

    pub fn delete_item(&self, item_id: &ItemId) -> Result<(), StoreError> {
        let mut items = self.items()?;
        let index = items
            .iter()
            .position(|item| item.id == *item_id)
            .ok_or(StoreError::ItemNotFound)?;
        items.remove(index);
        Ok(())
    }
}
