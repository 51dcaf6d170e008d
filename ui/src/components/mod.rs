pub mod item_list;
pub mod new_item_form;

pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
