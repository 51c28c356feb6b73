//! Sales floor layout: aisles, shelves and capacity-bounded positions.

use super::{AisleId, ItemId, StackedItem};

/// Capacity-bounded spot on a shelf.
///
/// A position can hold several different items at once (a mixed display),
/// but never two stacks of the same item and never more units in total than
/// `max_capacity`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShelfPosition {
    pub items: Vec<StackedItem>,
    pub max_capacity: u32,
}

impl ShelfPosition {
    pub fn new(max_capacity: u32) -> Self {
        Self {
            items: Vec::new(),
            max_capacity,
        }
    }

    /// Sum of the quantities of every stack on this position.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|stack| stack.quantity).sum()
    }

    pub fn has_room(&self) -> bool {
        self.total_quantity() < self.max_capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a single unit, merging into the existing stack of that item.
    pub(crate) fn push_one(&mut self, item_id: ItemId) {
        match self.items.iter_mut().find(|stack| stack.item_id == item_id) {
            Some(stack) => stack.quantity += 1,
            None => self.items.push(StackedItem {
                item_id,
                quantity: 1,
            }),
        }
    }

    /// Removes a single unit from the first stack, dropping it once empty.
    pub(crate) fn take_first(&mut self) -> Option<ItemId> {
        let first = self.items.first_mut()?;
        first.quantity = first.quantity.saturating_sub(1);
        let item_id = first.item_id.clone();
        if first.is_empty() {
            self.items.remove(0);
        }
        Some(item_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shelf {
    pub id: String,
    pub positions: Vec<ShelfPosition>,
}

impl Shelf {
    pub fn new(id: impl Into<String>, positions: Vec<ShelfPosition>) -> Self {
        Self {
            id: id.into(),
            positions,
        }
    }

    /// Builds a shelf whose positions all share the same capacity.
    pub fn uniform(id: impl Into<String>, positions: usize, max_capacity: u32) -> Self {
        Self::new(id, vec![ShelfPosition::new(max_capacity); positions])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aisle {
    pub id: AisleId,
    pub name: String,
    pub shelves: Vec<Shelf>,
}

impl Aisle {
    pub fn new(id: impl Into<AisleId>, name: impl Into<String>, shelves: Vec<Shelf>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shelves,
        }
    }
}

/// Every aisle in the store plus the one currently in view.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SalesFloor {
    pub aisles: Vec<Aisle>,
    pub current_aisle_id: AisleId,
}

impl SalesFloor {
    pub fn aisle(&self, id: &str) -> Option<&Aisle> {
        self.aisles.iter().find(|aisle| aisle.id == id)
    }

    pub fn current_aisle(&self) -> Option<&Aisle> {
        self.aisle(self.current_aisle_id.as_str())
    }

    pub fn contains_aisle(&self, id: &str) -> bool {
        self.aisle(id).is_some()
    }

    pub fn position(
        &self,
        aisle_id: &str,
        shelf_index: usize,
        position_index: usize,
    ) -> Option<&ShelfPosition> {
        self.aisle(aisle_id)?
            .shelves
            .get(shelf_index)?
            .positions
            .get(position_index)
    }

    pub(crate) fn position_mut(
        &mut self,
        aisle_id: &str,
        shelf_index: usize,
        position_index: usize,
    ) -> Option<&mut ShelfPosition> {
        self.aisles
            .iter_mut()
            .find(|aisle| aisle.id == aisle_id)?
            .shelves
            .get_mut(shelf_index)?
            .positions
            .get_mut(position_index)
    }

    pub fn positions(&self) -> impl Iterator<Item = &ShelfPosition> {
        self.aisles
            .iter()
            .flat_map(|aisle| aisle.shelves.iter())
            .flat_map(|shelf| shelf.positions.iter())
    }
}
