//! What a crafting operation leaves behind in the grid.

use weld_registry::ItemStack;
use weld_registry::item_stack::{items, potions};

/// The stacks left in each slot of `container` after its contents are
/// consumed by crafting, one output per input slot.
///
/// A stack with a declared crafting remainder leaves one of that item.
/// On top of the stock table, a water bottle leaves its glass bottle
/// behind; the stock table treats it as just another potion and loses
/// the bottle.
#[must_use]
pub fn remaining_items(container: &dyn super::Container) -> Vec<ItemStack> {
    let mut remaining = vec![ItemStack::empty(); container.size()];

    for slot in 0..remaining.len() {
        let stack = container.get_item(slot);
        if let Some(item) = stack.crafting_remainder() {
            remaining[slot] = ItemStack::new(item, 1);
        }
        if *stack.item() == items::POTION && stack.potion_contents() == Some(&potions::WATER) {
            remaining[slot] = ItemStack::new(items::GLASS_BOTTLE, 1);
        }
    }

    remaining
}
