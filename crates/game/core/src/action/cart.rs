use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, ItemId, StackedItem};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CartError {
    #[error("cart is full ({max_slots} slots)")]
    CartFull { max_slots: usize },

    #[error("item {0} is not stocked in the stockroom")]
    NotInStockroom(ItemId),

    #[error("stockroom holds {available} of {item_id}, {requested} requested")]
    InsufficientStock {
        item_id: ItemId,
        requested: u32,
        available: u32,
    },

    #[error("cannot move an empty stack of {0} into the cart")]
    ZeroQuantity(ItemId),

    #[error("cart slot {index} is out of bounds (cart holds {len} slots)")]
    SlotOutOfBounds { index: usize, len: usize },
}

impl GameError for CartError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CartError::CartFull { .. } => "CART_FULL",
            CartError::NotInStockroom(_) => "CART_NOT_IN_STOCKROOM",
            CartError::InsufficientStock { .. } => "CART_INSUFFICIENT_STOCK",
            CartError::ZeroQuantity(_) => "CART_ZERO_QUANTITY",
            CartError::SlotOutOfBounds { .. } => "CART_SLOT_OUT_OF_BOUNDS",
        }
    }
}

/// Moves a stack from the stockroom into a new cart slot.
///
/// When `quantity` is `None` the cart's `initial_stack_size` is used.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddToCartAction {
    pub item_id: ItemId,
    pub quantity: Option<u32>,
}

impl AddToCartAction {
    pub fn new(item_id: impl Into<ItemId>, quantity: Option<u32>) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }

    fn requested(&self, state: &GameState) -> u32 {
        self.quantity.unwrap_or(state.cart.initial_stack_size)
    }
}

impl ActionTransition for AddToCartAction {
    type Error = CartError;
    /// Index of the newly appended slot.
    type Result = usize;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if state.cart.is_full() {
            return Err(CartError::CartFull {
                max_slots: state.cart.max_slots,
            });
        }

        let requested = self.requested(state);
        let entry = state
            .stockroom
            .entry(self.item_id.as_str())
            .ok_or_else(|| CartError::NotInStockroom(self.item_id.clone()))?;
        if entry.quantity < requested {
            return Err(CartError::InsufficientStock {
                item_id: self.item_id.clone(),
                requested,
                available: entry.quantity,
            });
        }

        if requested == 0 {
            return Err(CartError::ZeroQuantity(self.item_id.clone()));
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let requested = self.requested(state);
        if !state.stockroom.withdraw(self.item_id.as_str(), requested) {
            return Err(CartError::InsufficientStock {
                item_id: self.item_id.clone(),
                requested,
                available: state.stockroom.quantity_of(self.item_id.as_str()),
            });
        }

        state.cart.push_slot(self.item_id.clone(), requested);
        Ok(state.cart.len() - 1)
    }
}

/// Empties a cart slot back into the stockroom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveFromCartAction {
    pub slot_index: usize,
}

impl RemoveFromCartAction {
    pub fn new(slot_index: usize) -> Self {
        Self { slot_index }
    }

    fn out_of_bounds(&self, state: &GameState) -> CartError {
        CartError::SlotOutOfBounds {
            index: self.slot_index,
            len: state.cart.len(),
        }
    }
}

impl ActionTransition for RemoveFromCartAction {
    type Error = CartError;
    /// The stack that went back to the stockroom.
    type Result = StackedItem;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        match state.cart.slot(self.slot_index) {
            Some(_) => Ok(()),
            None => Err(self.out_of_bounds(state)),
        }
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let slot = state
            .cart
            .remove_slot(self.slot_index)
            .ok_or_else(|| self.out_of_bounds(state))?;

        state.stockroom.deposit(slot.item_id.clone(), slot.quantity);
        Ok(slot)
    }
}
