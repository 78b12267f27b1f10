use crate::item::{same_items, Item, Items};

/// Selection state of a list: the current items plus at most one selected
/// index into them.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    items: Items,
    selected: Option<usize>,
}

impl Selection {
    pub fn new(items: Items) -> Self {
        Self { items, selected: None }
    }

    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Replaces the item sequence. A different reference clears the
    /// selection even when its content is equal. Returns whether the
    /// selection was reset.
    pub fn set_items(&mut self, items: Items) -> bool {
        if same_items(&self.items, &items) {
            return false;
        }
        self.items = items;
        self.selected = None;
        true
    }

    /// Marks `index` as selected. Selecting the current row again keeps it
    /// selected.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|i| self.items().get(i))
    }
}
