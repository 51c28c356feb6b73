//! Item quantities held by containers.

use super::ItemId;

/// A quantity of a single item kind, moved and counted as one unit.
///
/// Containers drop a stack as soon as its quantity reaches zero, so every
/// stack observed through the state has `quantity > 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackedItem {
    pub item_id: ItemId,
    pub quantity: u32,
}

impl StackedItem {
    pub fn new(item_id: impl Into<ItemId>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}
