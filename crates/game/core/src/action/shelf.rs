use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AisleId, GameState, ItemId, SalesFloor, ShelfPosition};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShelfError {
    #[error("cart slot {index} is out of bounds (cart holds {len} slots)")]
    CartSlotOutOfBounds { index: usize, len: usize },

    #[error("aisle {0} does not exist")]
    UnknownAisle(AisleId),

    #[error("shelf {index} is out of bounds in aisle {aisle_id} ({len} shelves)")]
    ShelfOutOfBounds {
        aisle_id: AisleId,
        index: usize,
        len: usize,
    },

    #[error("position {index} is out of bounds on shelf {shelf_index} ({len} positions)")]
    PositionOutOfBounds {
        shelf_index: usize,
        index: usize,
        len: usize,
    },

    #[error("position {0} is at capacity ({1} units)")]
    PositionFull(ShelfAddress, u32),

    #[error("position {0} is empty")]
    PositionEmpty(ShelfAddress),
}

impl GameError for ShelfError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ShelfError::CartSlotOutOfBounds { .. } => "SHELF_CART_SLOT_OUT_OF_BOUNDS",
            ShelfError::UnknownAisle(_) => "SHELF_UNKNOWN_AISLE",
            ShelfError::ShelfOutOfBounds { .. } => "SHELF_OUT_OF_BOUNDS",
            ShelfError::PositionOutOfBounds { .. } => "SHELF_POSITION_OUT_OF_BOUNDS",
            ShelfError::PositionFull(..) => "SHELF_POSITION_FULL",
            ShelfError::PositionEmpty(_) => "SHELF_POSITION_EMPTY",
        }
    }
}

/// Path to a single shelf position: aisle id, then shelf and position indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShelfAddress {
    pub aisle_id: AisleId,
    pub shelf_index: usize,
    pub position_index: usize,
}

impl ShelfAddress {
    pub fn new(aisle_id: impl Into<AisleId>, shelf_index: usize, position_index: usize) -> Self {
        Self {
            aisle_id: aisle_id.into(),
            shelf_index,
            position_index,
        }
    }

    /// Resolves the address, reporting the first segment that does not exist.
    pub fn resolve<'a>(&self, floor: &'a SalesFloor) -> Result<&'a ShelfPosition, ShelfError> {
        let aisle = floor
            .aisle(self.aisle_id.as_str())
            .ok_or_else(|| ShelfError::UnknownAisle(self.aisle_id.clone()))?;

        let shelf = aisle
            .shelves
            .get(self.shelf_index)
            .ok_or_else(|| ShelfError::ShelfOutOfBounds {
                aisle_id: self.aisle_id.clone(),
                index: self.shelf_index,
                len: aisle.shelves.len(),
            })?;

        shelf
            .positions
            .get(self.position_index)
            .ok_or(ShelfError::PositionOutOfBounds {
                shelf_index: self.shelf_index,
                index: self.position_index,
                len: shelf.positions.len(),
            })
    }

    fn resolve_mut<'a>(&self, state: &'a mut GameState) -> Result<&'a mut ShelfPosition, ShelfError> {
        // Resolve immutably first so the error names the missing segment.
        self.resolve(&state.sales_floor)?;
        state
            .sales_floor
            .position_mut(
                self.aisle_id.as_str(),
                self.shelf_index,
                self.position_index,
            )
            .ok_or_else(|| ShelfError::UnknownAisle(self.aisle_id.clone()))
    }
}

impl core::fmt::Display for ShelfAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.aisle_id, self.shelf_index, self.position_index
        )
    }
}

/// Moves exactly one unit from a cart slot onto a shelf position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceOnShelfAction {
    pub cart_slot_index: usize,
    pub target: ShelfAddress,
}

impl PlaceOnShelfAction {
    pub fn new(cart_slot_index: usize, target: ShelfAddress) -> Self {
        Self {
            cart_slot_index,
            target,
        }
    }

    fn cart_slot_error(&self, state: &GameState) -> ShelfError {
        ShelfError::CartSlotOutOfBounds {
            index: self.cart_slot_index,
            len: state.cart.len(),
        }
    }
}

impl ActionTransition for PlaceOnShelfAction {
    type Error = ShelfError;
    /// Item that was placed.
    type Result = ItemId;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if state.cart.slot(self.cart_slot_index).is_none() {
            return Err(self.cart_slot_error(state));
        }

        let position = self.target.resolve(&state.sales_floor)?;
        if !position.has_room() {
            return Err(ShelfError::PositionFull(
                self.target.clone(),
                position.max_capacity,
            ));
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let item_id = state
            .cart
            .slot(self.cart_slot_index)
            .map(|slot| slot.item_id.clone())
            .ok_or_else(|| self.cart_slot_error(state))?;

        self.target.resolve_mut(state)?.push_one(item_id);

        state
            .cart
            .take_one(self.cart_slot_index)
            .ok_or_else(|| self.cart_slot_error(state))
    }
}

/// Takes one unit off a shelf position, always from its first stack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeFromShelfAction {
    pub target: ShelfAddress,
}

impl TakeFromShelfAction {
    pub fn new(target: ShelfAddress) -> Self {
        Self { target }
    }
}

impl ActionTransition for TakeFromShelfAction {
    type Error = ShelfError;
    /// Item that was taken.
    type Result = ItemId;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if self.target.resolve(&state.sales_floor)?.is_empty() {
            return Err(ShelfError::PositionEmpty(self.target.clone()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        self.target
            .resolve_mut(state)?
            .take_first()
            .ok_or_else(|| ShelfError::PositionEmpty(self.target.clone()))
    }
}
