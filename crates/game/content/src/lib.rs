//! Data-driven content definitions and loaders.
//!
//! This crate houses the static item catalog and the game configuration:
//! - Item catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed through [`ItemCatalog`] and never appears in game state;
//! the state refers to items by id only. Bundled defaults are compiled in so
//! a client can start without a data directory.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{AssetMode, CatalogError, ItemCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, LoadResult};
