//! Action domain - every way the player can change the store.
//!
//! # Module Structure
//!
//! - `cart`: Stockroom ↔ cart transfers (`AddToCartAction`, `RemoveFromCartAction`)
//! - `shelf`: Cart → shelf placement and shelf removal (`PlaceOnShelfAction`, `TakeFromShelfAction`)
//! - `aisle`: Selecting the aisle in view (`SwitchAisleAction`)
//! - `currency`: Earning money (`AddCurrencyAction`)
//!
//! Each action implements [`ActionTransition`]; the [`GameEngine`](crate::engine::GameEngine)
//! drives the phases and guarantees a failed action leaves the state untouched.

mod aisle;
mod cart;
mod currency;
mod shelf;

pub use aisle::{AisleError, SwitchAisleAction};
pub use cart::{AddToCartAction, CartError, RemoveFromCartAction};
pub use currency::{AddCurrencyAction, CurrencyError};
pub use shelf::{PlaceOnShelfAction, ShelfAddress, ShelfError, TakeFromShelfAction};

pub use crate::engine::InvariantError;

use crate::state::GameState;

/// Defines how a concrete action variant mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. Hooks receive
/// read-only access to the state and must stay side-effect free.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    ///
    /// Checks run in the documented order and the first failure is returned.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum routed through the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    AddToCart(AddToCartAction),
    RemoveFromCart(RemoveFromCartAction),
    PlaceOnShelf(PlaceOnShelfAction),
    TakeFromShelf(TakeFromShelfAction),
    AddCurrency(AddCurrencyAction),
    SwitchAisle(SwitchAisleAction),
}

impl Action {
    /// Returns a stable snake_case name for logs and metrics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::AddToCart(_) => "add_to_cart",
            Action::RemoveFromCart(_) => "remove_from_cart",
            Action::PlaceOnShelf(_) => "place_on_shelf",
            Action::TakeFromShelf(_) => "take_from_shelf",
            Action::AddCurrency(_) => "add_currency",
            Action::SwitchAisle(_) => "switch_aisle",
        }
    }
}

impl From<AddToCartAction> for Action {
    fn from(action: AddToCartAction) -> Self {
        Action::AddToCart(action)
    }
}

impl From<RemoveFromCartAction> for Action {
    fn from(action: RemoveFromCartAction) -> Self {
        Action::RemoveFromCart(action)
    }
}

impl From<PlaceOnShelfAction> for Action {
    fn from(action: PlaceOnShelfAction) -> Self {
        Action::PlaceOnShelf(action)
    }
}

impl From<TakeFromShelfAction> for Action {
    fn from(action: TakeFromShelfAction) -> Self {
        Action::TakeFromShelf(action)
    }
}

impl From<AddCurrencyAction> for Action {
    fn from(action: AddCurrencyAction) -> Self {
        Action::AddCurrency(action)
    }
}

impl From<SwitchAisleAction> for Action {
    fn from(action: SwitchAisleAction) -> Self {
        Action::SwitchAisle(action)
    }
}
