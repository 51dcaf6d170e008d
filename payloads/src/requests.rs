use serde::{Deserialize, Serialize};

/// Maximum length of an item name, in characters.
pub const ITEM_NAME_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItem {
    pub name: String,
}
