pub mod error;
pub mod item;
pub mod selection;
pub mod source;

pub use error::ItemsError;
pub use item::{same_items, Item, Items};
pub use selection::Selection;
pub use source::{parse_items, ItemSource};
