//! Content factory for loading everything a session needs from one place.

use std::path::{Path, PathBuf};

use market_core::GameConfig;

use crate::catalog::ItemCatalog;
use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads game content from an optional data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── items.ron
/// ```
///
/// Files missing from the directory fall back to the bundled defaults, so a
/// directory may override only the catalog or only the config.
#[derive(Clone, Debug, Default)]
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a factory that only uses bundled content.
    pub fn bundled() -> Self {
        Self { data_dir: None }
    }

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn override_path(&self, file_name: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(file_name))
            .filter(|path| path.is_file())
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.override_path("config.toml") {
            Some(path) => ConfigLoader::load(&path),
            None => ConfigLoader::bundled(),
        }
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_catalog(&self) -> LoadResult<ItemCatalog> {
        match self.override_path("items.ron") {
            Some(path) => Ok(ItemCatalog::from_definitions(ItemLoader::load(&path)?)?),
            None => ItemCatalog::builtin(),
        }
    }
}
