//! Game configuration loader.

use std::path::Path;

use market_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Bundled default configuration.
const BUNDLED_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded game config");
        Ok(config)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.cart_max_slots == 0 {
            anyhow::bail!("cart_max_slots must be greater than zero");
        }

        Ok(config)
    }

    /// The configuration compiled into this crate.
    pub fn bundled() -> LoadResult<GameConfig> {
        Self::parse(BUNDLED_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(ConfigLoader::bundled().unwrap(), GameConfig::default());
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("initial_stack_size = 5").unwrap();

        assert_eq!(config.initial_stack_size, 5);
        assert_eq!(config.cart_max_slots, GameConfig::DEFAULT_CART_MAX_SLOTS);
    }

    #[test]
    fn rejects_zero_slot_cart() {
        let err = ConfigLoader::parse("cart_max_slots = 0").unwrap_err();
        assert!(err.to_string().contains("cart_max_slots"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ConfigLoader::parse("cart_max_slots = \"six\"").is_err());
    }
}
