//! Read-only facts supplied to the game from outside the state.
//!
//! Item definitions are content, not state: the state stores item ids and
//! clients resolve names, assets and sizes through an [`ItemOracle`].
mod items;

pub use items::{DisplayDimensions, ItemCategory, ItemDefinition, ItemOracle};
