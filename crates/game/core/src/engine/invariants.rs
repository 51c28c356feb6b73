//! Structural invariants checked after every transition.

use std::collections::HashSet;

use crate::error::{ErrorSeverity, GameError};
use crate::state::{AisleId, GameState, ItemId};

/// A structural invariant of [`GameState`] that did not hold after a mutation.
///
/// These indicate bugs in an action, never a rejected player request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantError {
    #[error("cart holds {len} slots but allows {max_slots}")]
    CartOverflow { len: usize, max_slots: usize },

    #[error("cart slot {0} has zero quantity")]
    EmptyCartSlot(usize),

    #[error("stockroom lists {0} more than once")]
    DuplicateStockroomEntry(ItemId),

    #[error("{aisle_id}/{shelf_index}/{position_index} holds {total} units, capacity {capacity}")]
    PositionOverCapacity {
        aisle_id: AisleId,
        shelf_index: usize,
        position_index: usize,
        total: u32,
        capacity: u32,
    },

    #[error("{aisle_id}/{shelf_index}/{position_index} has a malformed stack of {item_id}")]
    MalformedShelfStack {
        aisle_id: AisleId,
        shelf_index: usize,
        position_index: usize,
        item_id: ItemId,
    },

    #[error("current aisle {0} does not exist")]
    MissingCurrentAisle(AisleId),
}

impl GameError for InvariantError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            InvariantError::CartOverflow { .. } => "INVARIANT_CART_OVERFLOW",
            InvariantError::EmptyCartSlot(_) => "INVARIANT_EMPTY_CART_SLOT",
            InvariantError::DuplicateStockroomEntry(_) => "INVARIANT_DUPLICATE_STOCKROOM_ENTRY",
            InvariantError::PositionOverCapacity { .. } => "INVARIANT_POSITION_OVER_CAPACITY",
            InvariantError::MalformedShelfStack { .. } => "INVARIANT_MALFORMED_SHELF_STACK",
            InvariantError::MissingCurrentAisle(_) => "INVARIANT_MISSING_CURRENT_AISLE",
        }
    }
}

pub(super) fn check(state: &GameState) -> Result<(), InvariantError> {
    let cart = &state.cart;
    if cart.len() > cart.max_slots {
        return Err(InvariantError::CartOverflow {
            len: cart.len(),
            max_slots: cart.max_slots,
        });
    }
    if let Some(index) = cart.slots.iter().position(|slot| slot.is_empty()) {
        return Err(InvariantError::EmptyCartSlot(index));
    }

    let mut stocked = HashSet::new();
    for entry in &state.stockroom.inventory {
        if !stocked.insert(&entry.item_id) {
            return Err(InvariantError::DuplicateStockroomEntry(entry.item_id.clone()));
        }
    }

    for aisle in &state.sales_floor.aisles {
        for (shelf_index, shelf) in aisle.shelves.iter().enumerate() {
            for (position_index, position) in shelf.positions.iter().enumerate() {
                let total = position.total_quantity();
                if total > position.max_capacity {
                    return Err(InvariantError::PositionOverCapacity {
                        aisle_id: aisle.id.clone(),
                        shelf_index,
                        position_index,
                        total,
                        capacity: position.max_capacity,
                    });
                }

                let mut seen = HashSet::new();
                for stack in &position.items {
                    if stack.is_empty() || !seen.insert(&stack.item_id) {
                        return Err(InvariantError::MalformedShelfStack {
                            aisle_id: aisle.id.clone(),
                            shelf_index,
                            position_index,
                            item_id: stack.item_id.clone(),
                        });
                    }
                }
            }
        }
    }

    if state.sales_floor.current_aisle().is_none() {
        return Err(InvariantError::MissingCurrentAisle(
            state.sales_floor.current_aisle_id.clone(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StackedItem;

    #[test]
    fn default_state_is_consistent() {
        assert_eq!(check(&GameState::default()), Ok(()));
    }

    #[test]
    fn detects_overfilled_position() {
        let mut state = GameState::default();
        state.sales_floor.aisles[0].shelves[1].positions[0].items =
            vec![StackedItem::new("mango", 2), StackedItem::new("pear", 2)];

        let err = check(&state).unwrap_err();

        assert!(matches!(
            err,
            InvariantError::PositionOverCapacity {
                total: 4,
                capacity: 3,
                ..
            }
        ));
        assert_eq!(err.severity(), ErrorSeverity::Internal);
    }

    #[test]
    fn detects_duplicate_stacks_and_stockroom_entries() {
        let mut state = GameState::default();
        state
            .stockroom
            .inventory
            .push(StackedItem::new("red-apple", 1));
        assert_eq!(
            check(&state),
            Err(InvariantError::DuplicateStockroomEntry("red-apple".into()))
        );

        let mut state = GameState::default();
        state.sales_floor.aisles[0].shelves[0].positions[0].items =
            vec![StackedItem::new("mango", 1), StackedItem::new("mango", 1)];
        assert!(matches!(
            check(&state),
            Err(InvariantError::MalformedShelfStack { .. })
        ));
    }

    #[test]
    fn detects_empty_cart_slot() {
        let mut state = GameState::default();
        state.cart.slots.push(StackedItem::new("milk", 0));

        assert_eq!(check(&state), Err(InvariantError::EmptyCartSlot(0)));
    }
}
