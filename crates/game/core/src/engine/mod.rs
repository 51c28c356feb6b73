//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It runs
//! each action through its transition phases, verifies the state invariants
//! and rolls the state back when anything fails, so callers never observe a
//! partially applied action.

mod errors;
mod invariants;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use invariants::InvariantError;

use crate::action::{
    Action, AddCurrencyAction, AddToCartAction, PlaceOnShelfAction, RemoveFromCartAction,
    ShelfAddress, SwitchAisleAction, TakeFromShelfAction,
};
use crate::state::{AisleId, GameState, ItemId, StackedItem, StateDelta};

/// Action-specific result of a successful execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// A new cart slot was appended at `slot`.
    AddedToCart { slot: usize },
    /// A cart slot was emptied back into the stockroom.
    ReturnedToStockroom(StackedItem),
    /// One unit of the item was placed on a shelf.
    Placed(ItemId),
    /// One unit of the item was taken off a shelf.
    Taken(ItemId),
    /// Currency total after the change.
    Currency { total: i64 },
    /// The aisle now in view.
    AisleSwitched(AisleId),
}

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Regions of the state the action changed.
    pub delta: StateDelta,

    /// Action-specific execution result.
    pub result: ActionResult,
}

/// Game engine that applies actions to a borrowed [`GameState`].
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate, followed by an invariant check.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Read access to the state the engine is working on.
    pub fn state(&self) -> &GameState {
        &*self.state
    }

    /// Executes an action by routing it through the transition pipeline.
    ///
    /// On error the state is restored to its value before the call.
    pub fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        match transition::execute_transition(action, self.state) {
            Ok(result) => {
                let delta = StateDelta::from_states(action.clone(), &before, self.state);
                Ok(ExecutionOutcome { delta, result })
            }
            Err(error) => {
                *self.state = before;
                Err(error)
            }
        }
    }

    /// Moves `quantity` units (or the cart's initial stack size) from the
    /// stockroom into a new cart slot.
    pub fn add_item_to_cart(
        &mut self,
        item_id: impl Into<ItemId>,
        quantity: Option<u32>,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&AddToCartAction::new(item_id, quantity).into())
    }

    /// Returns the whole cart slot at `slot_index` to the stockroom.
    pub fn remove_item_from_cart(
        &mut self,
        slot_index: usize,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&RemoveFromCartAction::new(slot_index).into())
    }

    /// Places one unit from a cart slot onto a shelf position.
    pub fn place_item_on_shelf(
        &mut self,
        cart_slot_index: usize,
        aisle_id: impl Into<AisleId>,
        shelf_index: usize,
        position_index: usize,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let target = ShelfAddress::new(aisle_id, shelf_index, position_index);
        self.execute(&PlaceOnShelfAction::new(cart_slot_index, target).into())
    }

    /// Removes one unit from the first stack of a shelf position.
    pub fn remove_item_from_shelf(
        &mut self,
        aisle_id: impl Into<AisleId>,
        shelf_index: usize,
        position_index: usize,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let target = ShelfAddress::new(aisle_id, shelf_index, position_index);
        self.execute(&TakeFromShelfAction::new(target).into())
    }

    /// Adds `amount` (possibly negative) to the currency total.
    ///
    /// Rejected only when the new total would leave the `i64` range.
    pub fn add_currency(&mut self, amount: i64) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&AddCurrencyAction::new(amount).into())
    }

    /// Brings the aisle with `aisle_id` into view.
    pub fn switch_aisle(
        &mut self,
        aisle_id: impl Into<AisleId>,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&SwitchAisleAction::new(aisle_id).into())
    }
}
