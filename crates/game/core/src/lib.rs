//! Deterministic supermarket model shared by every client.
//!
//! `market-core` defines the canonical game state (sales floor, stockroom,
//! cart, currency), the actions that move stock between them, and the
//! [`engine::GameEngine`] that applies those actions atomically. Supporting
//! crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionTransition, AddCurrencyAction, AddToCartAction, AisleError, CartError,
    CurrencyError, InvariantError, PlaceOnShelfAction, RemoveFromCartAction, ShelfAddress,
    ShelfError, SwitchAisleAction, TakeFromShelfAction,
};
pub use config::GameConfig;
pub use engine::{ActionResult, ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase};
pub use env::{DisplayDimensions, ItemCategory, ItemDefinition, ItemOracle};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Aisle, AisleId, Cart, GameCurrency, GameState, ItemId, SalesFloor, Shelf, ShelfPosition,
    StackedItem, StateDelta, StateFields, Stockroom,
};
