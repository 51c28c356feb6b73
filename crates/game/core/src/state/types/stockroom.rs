//! Backroom inventory.

use super::{ItemId, StackedItem};

/// Flat inventory with at most one entry per item id.
///
/// Entries are kept even when their quantity drops to zero, so an item that
/// has been fully moved out remains listed and can be refilled in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stockroom {
    pub inventory: Vec<StackedItem>,
}

impl Stockroom {
    pub fn new(inventory: Vec<StackedItem>) -> Self {
        Self { inventory }
    }

    pub fn entry(&self, item_id: &str) -> Option<&StackedItem> {
        self.inventory.iter().find(|entry| entry.item_id == item_id)
    }

    fn entry_mut(&mut self, item_id: &str) -> Option<&mut StackedItem> {
        self.inventory
            .iter_mut()
            .find(|entry| entry.item_id == item_id)
    }

    /// Quantity on hand for the item, zero when it is not stocked at all.
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.entry(item_id).map_or(0, |entry| entry.quantity)
    }

    /// Removes `quantity` units. Returns false without mutating when the
    /// entry is missing or holds fewer units.
    pub(crate) fn withdraw(&mut self, item_id: &str, quantity: u32) -> bool {
        match self.entry_mut(item_id) {
            Some(entry) if entry.quantity >= quantity => {
                entry.quantity -= quantity;
                true
            }
            _ => false,
        }
    }

    /// Returns units to the stockroom, creating an entry if none exists.
    pub(crate) fn deposit(&mut self, item_id: ItemId, quantity: u32) {
        match self.entry_mut(item_id.as_str()) {
            Some(entry) => entry.quantity += quantity,
            None => self.inventory.push(StackedItem { item_id, quantity }),
        }
    }
}
