//! Item stacks and the stock crafting-remainder table.

use weld_utils::ResourceLocation;

/// Item ids this crate refers to by name.
pub mod items {
    use weld_utils::ResourceLocation;

    /// The empty item.
    pub const AIR: ResourceLocation = ResourceLocation::vanilla_static("air");
    /// Bottled potion, contents carried separately.
    pub const POTION: ResourceLocation = ResourceLocation::vanilla_static("potion");
    /// Empty glass bottle.
    pub const GLASS_BOTTLE: ResourceLocation = ResourceLocation::vanilla_static("glass_bottle");
    /// Empty bucket.
    pub const BUCKET: ResourceLocation = ResourceLocation::vanilla_static("bucket");
    /// Water bucket.
    pub const WATER_BUCKET: ResourceLocation = ResourceLocation::vanilla_static("water_bucket");
    /// Lava bucket.
    pub const LAVA_BUCKET: ResourceLocation = ResourceLocation::vanilla_static("lava_bucket");
    /// Milk bucket.
    pub const MILK_BUCKET: ResourceLocation = ResourceLocation::vanilla_static("milk_bucket");
    /// Dragon's breath bottle.
    pub const DRAGON_BREATH: ResourceLocation = ResourceLocation::vanilla_static("dragon_breath");
    /// Honey bottle.
    pub const HONEY_BOTTLE: ResourceLocation = ResourceLocation::vanilla_static("honey_bottle");
}

/// Potion contents this crate refers to by name.
pub mod potions {
    use weld_utils::ResourceLocation;

    /// Plain water.
    pub const WATER: ResourceLocation = ResourceLocation::vanilla_static("water");
}

/// A stack of items in a container slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    item: ResourceLocation,
    count: i32,
    potion_contents: Option<ResourceLocation>,
}

impl ItemStack {
    /// The empty stack.
    #[must_use]
    pub const fn empty() -> Self {
        ItemStack {
            item: items::AIR,
            count: 0,
            potion_contents: None,
        }
    }

    /// A stack of `count` times `item`.
    #[must_use]
    pub const fn new(item: ResourceLocation, count: i32) -> Self {
        ItemStack {
            item,
            count,
            potion_contents: None,
        }
    }

    /// A single bottled potion with the given contents.
    #[must_use]
    pub const fn potion(contents: ResourceLocation) -> Self {
        ItemStack {
            item: items::POTION,
            count: 1,
            potion_contents: Some(contents),
        }
    }

    /// The item this stack holds.
    #[must_use]
    pub const fn item(&self) -> &ResourceLocation {
        &self.item
    }

    /// Number of items in the stack.
    #[must_use]
    pub const fn count(&self) -> i32 {
        self.count
    }

    /// The potion contents, for stacks of bottled potions.
    #[must_use]
    pub const fn potion_contents(&self) -> Option<&ResourceLocation> {
        self.potion_contents.as_ref()
    }

    /// Whether this stack holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count <= 0 || self.item == items::AIR
    }

    /// Splits off up to `count` items into a new stack.
    pub fn split(&mut self, count: i32) -> ItemStack {
        let taken = count.min(self.count);
        if taken <= 0 {
            return ItemStack::empty();
        }

        let result = ItemStack {
            item: self.item.clone(),
            count: taken,
            potion_contents: self.potion_contents.clone(),
        };
        self.count -= taken;
        if self.count == 0 {
            *self = ItemStack::empty();
        }
        result
    }

    /// The item this stack leaves behind in a crafting grid, per the
    /// stock remainder table. Potion contents are not consulted here.
    #[must_use]
    pub fn crafting_remainder(&self) -> Option<ResourceLocation> {
        if self.is_empty() {
            return None;
        }

        if self.item == items::WATER_BUCKET
            || self.item == items::LAVA_BUCKET
            || self.item == items::MILK_BUCKET
        {
            Some(items::BUCKET)
        } else if self.item == items::DRAGON_BREATH || self.item == items::HONEY_BOTTLE {
            Some(items::GLASS_BOTTLE)
        } else {
            None
        }
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        ItemStack::empty()
    }
}
