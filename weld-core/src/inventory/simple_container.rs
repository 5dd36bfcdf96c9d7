//! A simple container implementation backed by a Vec.

use weld_registry::ItemStack;

use super::Container;

/// A container storing items in a fixed number of slots.
#[derive(Debug)]
pub struct SimpleContainer {
    items: Vec<ItemStack>,
    changed: bool,
}

impl SimpleContainer {
    /// A container with `size` empty slots.
    #[must_use]
    pub fn new(size: usize) -> Self {
        SimpleContainer {
            items: vec![ItemStack::empty(); size],
            changed: false,
        }
    }

    /// Whether the contents changed since the last [`Self::clear_changed`].
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Clears the changed flag.
    pub fn clear_changed(&mut self) {
        self.changed = false;
    }
}

impl Container for SimpleContainer {
    fn size(&self) -> usize {
        self.items.len()
    }

    fn get_item(&self, slot: usize) -> &ItemStack {
        &self.items[slot]
    }

    fn get_item_mut(&mut self, slot: usize) -> &mut ItemStack {
        &mut self.items[slot]
    }

    fn set_item(&mut self, slot: usize, item: ItemStack) {
        self.items[slot] = item;
        self.set_changed();
    }

    fn set_changed(&mut self) {
        self.changed = true;
    }

    fn clear(&mut self) {
        for item in &mut self.items {
            *item = ItemStack::empty();
        }
        self.set_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weld_registry::item_stack::items;

    #[test]
    fn test_starts_empty_and_tracks_changes() {
        let mut container = SimpleContainer::new(4);
        assert_eq!(container.size(), 4);
        assert!(container.is_empty());
        assert!(!container.has_changed());

        container.set_item(2, ItemStack::new(items::BUCKET, 1));
        assert!(!container.is_empty());
        assert!(container.has_changed());

        container.clear_changed();
        assert!(!container.has_changed());
    }

    #[test]
    fn test_remove_item_splits_the_slot() {
        let mut container = SimpleContainer::new(1);
        container.set_item(0, ItemStack::new(items::GLASS_BOTTLE, 3));
        container.clear_changed();

        let taken = container.remove_item(0, 2);
        assert_eq!(taken.count(), 2);
        assert_eq!(container.get_item(0).count(), 1);
        assert!(container.has_changed());

        // removing from an empty slot changes nothing
        container.clear();
        container.clear_changed();
        assert!(container.remove_item(0, 1).is_empty());
        assert!(!container.has_changed());
    }
}
