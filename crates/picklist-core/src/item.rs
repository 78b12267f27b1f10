use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One entry of the list. `text` is required; a record without it fails to
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    pub text: String,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Shared handle to an ordered item sequence. `None` means the sequence is
/// absent and renders as empty.
pub type Items = Option<Arc<[Item]>>;

/// Reference identity of two handles. Equal content in distinct allocations
/// is *not* the same sequence.
pub fn same_items(a: &Items, b: &Items) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}
