//! Item catalog loader.

use std::path::Path;

use market_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Bundled default item catalog.
pub(crate) const BUNDLED_ITEMS: &str = include_str!("../../data/items.ron");

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item definitions from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an `ItemCatalogFile`
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let items = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), count = items.len(), "loaded item catalog");
        Ok(items)
    }

    /// Parse item definitions from a RON string.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}
