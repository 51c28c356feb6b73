//! The player's cart.

use super::{ItemId, StackedItem};

/// Ordered list of stacks the player carries between stockroom and shelves.
///
/// Slots are addressed by position. Removing a slot shifts every later slot
/// down by one; two slots may hold the same item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cart {
    pub slots: Vec<StackedItem>,
    pub max_slots: usize,
    /// Quantity taken from the stockroom when no explicit amount is requested.
    pub initial_stack_size: u32,
}

impl Cart {
    pub fn new(max_slots: usize, initial_stack_size: u32) -> Self {
        Self {
            slots: Vec::with_capacity(max_slots),
            max_slots,
            initial_stack_size,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.max_slots
    }

    pub fn slot(&self, index: usize) -> Option<&StackedItem> {
        self.slots.get(index)
    }

    /// Appends a new slot. Never merges with an existing slot of the same item.
    pub(crate) fn push_slot(&mut self, item_id: ItemId, quantity: u32) {
        self.slots.push(StackedItem { item_id, quantity });
    }

    pub(crate) fn remove_slot(&mut self, index: usize) -> Option<StackedItem> {
        (index < self.slots.len()).then(|| self.slots.remove(index))
    }

    /// Takes one unit out of the slot, dropping the slot once it is empty.
    ///
    /// Returns the item id of the unit taken.
    pub(crate) fn take_one(&mut self, index: usize) -> Option<ItemId> {
        let slot = self.slots.get_mut(index)?;
        slot.quantity = slot.quantity.checked_sub(1)?;
        let item_id = slot.item_id.clone();
        if slot.is_empty() {
            self.slots.remove(index);
        }
        Some(item_id)
    }
}
