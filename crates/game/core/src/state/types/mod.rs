//! Component types that make up [`GameState`](crate::state::GameState).
mod cart;
mod currency;
mod floor;
mod ids;
mod item;
mod stockroom;

pub use cart::Cart;
pub use currency::GameCurrency;
pub use floor::{Aisle, SalesFloor, Shelf, ShelfPosition};
pub use ids::{AisleId, ItemId};
pub use item::StackedItem;
pub use stockroom::Stockroom;
