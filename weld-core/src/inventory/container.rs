//! Container trait for item storage.

use weld_registry::ItemStack;

/// Slot-indexed item storage: crafting grids, chests, whatever holds
/// stacks. The crafting helpers only ever read through this trait.
pub trait Container: Send + Sync {
    /// Number of slots in this container.
    fn size(&self) -> usize;

    /// Whether every slot is empty.
    fn is_empty(&self) -> bool {
        (0..self.size()).all(|slot| self.get_item(slot).is_empty())
    }

    /// The item in the given slot.
    fn get_item(&self, slot: usize) -> &ItemStack;

    /// Mutable access to the item in the given slot.
    fn get_item_mut(&mut self, slot: usize) -> &mut ItemStack;

    /// Removes up to `count` items from the given slot and returns them.
    fn remove_item(&mut self, slot: usize, count: i32) -> ItemStack {
        let item = self.get_item_mut(slot);
        if item.is_empty() || count <= 0 {
            return ItemStack::empty();
        }
        let result = item.split(count);
        if !result.is_empty() {
            self.set_changed();
        }
        result
    }

    /// Sets the item in the given slot.
    fn set_item(&mut self, slot: usize, item: ItemStack);

    /// Called when the container contents change.
    fn set_changed(&mut self);

    /// Clears all items from this container.
    fn clear(&mut self) {
        for slot in 0..self.size() {
            self.set_item(slot, ItemStack::empty());
        }
    }
}
