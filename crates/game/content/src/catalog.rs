//! In-memory item catalog with asset-mode aware lookups.

use std::collections::HashMap;

use market_core::{DisplayDimensions, ItemCategory, ItemDefinition, ItemOracle};

/// How item assets are handed to the renderer.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AssetMode {
    /// The catalog's `asset` field as-is (an emoji).
    #[default]
    Emoji,
    /// A texture key derived from the item id (`item_<id>`).
    Png,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("item catalog is empty")]
    Empty,

    #[error("item {0} is defined more than once")]
    DuplicateItem(String),
}

/// Read-only catalog of item definitions, keyed by item id.
///
/// Definitions never change after construction. The only mutable bit is the
/// [`AssetMode`], which affects what [`ItemCatalog::asset`] returns.
#[derive(Clone, Debug)]
pub struct ItemCatalog {
    items: HashMap<String, ItemDefinition>,
    asset_mode: AssetMode,
}

impl ItemCatalog {
    /// Prefix of texture keys in [`AssetMode::Png`].
    pub const TEXTURE_KEY_PREFIX: &'static str = "item_";

    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut items = HashMap::new();
        for definition in definitions {
            if items.contains_key(&definition.id) {
                return Err(CatalogError::DuplicateItem(definition.id));
            }
            items.insert(definition.id.clone(), definition);
        }

        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self {
            items,
            asset_mode: AssetMode::default(),
        })
    }

    /// The catalog bundled with this crate.
    #[cfg(feature = "loaders")]
    pub fn builtin() -> crate::loaders::LoadResult<Self> {
        let definitions = crate::loaders::ItemLoader::parse(crate::loaders::item::BUNDLED_ITEMS)?;
        Ok(Self::from_definitions(definitions)?)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    pub fn all_items(&self) -> Vec<&ItemDefinition> {
        self.items.values().collect()
    }

    pub fn items_by_category(&self, category: ItemCategory) -> Vec<&ItemDefinition> {
        self.items
            .values()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Distinct categories present in the catalog, sorted by name.
    pub fn categories(&self) -> Vec<ItemCategory> {
        let mut categories: Vec<ItemCategory> = Vec::new();
        for item in self.items.values() {
            if !categories.contains(&item.category) {
                categories.push(item.category);
            }
        }
        categories.sort_by_key(|category| category.as_str());
        categories
    }

    /// Asset to render for the item, or `None` for an unknown id.
    pub fn asset(&self, id: &str) -> Option<String> {
        let item = self.item(id)?;
        Some(match self.asset_mode {
            AssetMode::Emoji => item.asset.clone(),
            AssetMode::Png => format!("{}{}", Self::TEXTURE_KEY_PREFIX, item.id),
        })
    }

    pub fn display_dimensions(&self, id: &str) -> Option<DisplayDimensions> {
        self.item(id).map(ItemDefinition::dimensions)
    }

    pub fn asset_mode(&self) -> AssetMode {
        self.asset_mode
    }

    pub fn set_asset_mode(&mut self, mode: AssetMode) {
        self.asset_mode = mode;
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, id: &str) -> Option<&ItemDefinition> {
        self.item(id)
    }

    fn all_definitions(&self) -> Vec<&ItemDefinition> {
        self.all_items()
    }
}

#[cfg(all(test, feature = "loaders"))]
mod tests {
    use super::*;

    fn catalog() -> ItemCatalog {
        ItemCatalog::builtin().expect("bundled catalog should parse")
    }

    #[test]
    fn bundled_catalog_has_ten_items() {
        let catalog = catalog();

        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.all_items().len(), 10);
    }

    #[test]
    fn looks_up_items_by_id() {
        let catalog = catalog();

        let apple = catalog.item("red-apple").unwrap();
        assert_eq!(apple.name, "Red Apple");
        assert_eq!(apple.category, ItemCategory::Fruit);
        assert!(catalog.item("non-existent").is_none());
    }

    #[test]
    fn filters_by_category() {
        let catalog = catalog();

        let fruits = catalog.items_by_category(ItemCategory::Fruit);
        assert_eq!(fruits.len(), 5);
        assert!(fruits.iter().all(|item| item.category == ItemCategory::Fruit));
        assert!(catalog.items_by_category(ItemCategory::Drink).is_empty());
    }

    #[test]
    fn categories_are_sorted_by_name() {
        let categories = catalog().categories();

        assert_eq!(
            categories,
            vec![
                ItemCategory::Bakery,
                ItemCategory::Dairy,
                ItemCategory::Fruit,
                ItemCategory::Vegetable,
            ]
        );
        let names: Vec<&str> = categories.iter().map(ItemCategory::as_str).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn asset_follows_mode() {
        let mut catalog = catalog();
        assert_eq!(catalog.asset_mode(), AssetMode::Emoji);
        assert_eq!(catalog.asset("red-apple").as_deref(), Some("🍎"));

        catalog.set_asset_mode(AssetMode::Png);
        assert_eq!(catalog.asset_mode(), AssetMode::Png);
        assert_eq!(catalog.asset("red-apple").as_deref(), Some("item_red-apple"));

        catalog.set_asset_mode(AssetMode::Emoji);
        assert_eq!(catalog.asset("red-apple").as_deref(), Some("🍎"));
        assert_eq!(catalog.asset("non-existent"), None);
    }

    #[test]
    fn display_dimensions_for_known_items_only() {
        let catalog = catalog();

        assert_eq!(
            catalog.display_dimensions("red-apple"),
            Some(DisplayDimensions {
                width: 32,
                height: 32
            })
        );
        assert_eq!(catalog.display_dimensions("non-existent"), None);
    }

    #[test]
    fn rejects_duplicates_and_empty_input() {
        let apple = ItemDefinition::new("red-apple", "Red Apple", "🍎", ItemCategory::Fruit);

        assert_eq!(
            ItemCatalog::from_definitions(vec![apple.clone(), apple]).unwrap_err(),
            CatalogError::DuplicateItem("red-apple".to_owned())
        );
        assert_eq!(
            ItemCatalog::from_definitions(Vec::new()).unwrap_err(),
            CatalogError::Empty
        );
    }

    #[test]
    fn parses_asset_mode_names() {
        assert_eq!("png".parse::<AssetMode>(), Ok(AssetMode::Png));
        assert_eq!("Emoji".parse::<AssetMode>(), Ok(AssetMode::Emoji));
        assert_eq!(AssetMode::Png.to_string(), "png");
    }
}
