//! Sample items for the development server and for tests that want a
//! populated store.

use crate::TestApp;
use anyhow::Result;
use payloads::Item;

pub const SAMPLE_ITEM_NAMES: [&str; 3] =
    ["Buy groceries", "Water the plants", "Call the plumber"];

pub struct DevDataset {
    pub items: Vec<Item>,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        let mut items = Vec::with_capacity(SAMPLE_ITEM_NAMES.len());
        for name in SAMPLE_ITEM_NAMES {
            items.push(app.create_item(name).await?);
        }
        Ok(Self { items })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 {} sample items:", self.items.len());
        for item in &self.items {
            tracing::info!("   {} {}", item.id, item.name);
        }
    }
}
