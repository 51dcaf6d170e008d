mod items;

pub use items::ItemsPage;
