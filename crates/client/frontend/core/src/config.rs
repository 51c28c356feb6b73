//! Frontend configuration structures and loaders.
//!
//! UI settings shared across frontend implementations (headless, GUI).

use std::env;

use market_content::AssetMode;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    /// How item assets are resolved for display.
    pub asset_mode: AssetMode,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(asset_mode: AssetMode, messages: MessageConfig) -> Self {
        Self {
            asset_mode,
            messages,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MARKET_ASSET_MODE` - `emoji` or `png` (default: emoji)
    /// - `MARKET_MESSAGE_CAPACITY` - Message log capacity (default: 32)
    /// - `MARKET_SHOW_SUCCESS_MESSAGES` - Log successful actions too (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(mode) = read_env::<AssetMode>("MARKET_ASSET_MODE") {
            config.asset_mode = mode;
        }

        if let Some(capacity) = read_env::<usize>("MARKET_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(show) = read_env_bool("MARKET_SHOW_SUCCESS_MESSAGES") {
            config.messages.show_success = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Whether successful actions produce an info entry. Rejections are
    /// always recorded.
    pub show_success: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 32,
            show_success: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FrontendConfig::default();

        assert_eq!(config.asset_mode, AssetMode::Emoji);
        assert_eq!(config.messages.capacity, 32);
        assert!(config.messages.show_success);
    }

    #[test]
    fn parses_boolean_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
