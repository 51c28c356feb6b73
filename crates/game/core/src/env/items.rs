/// Read-only access to item definitions.
///
/// Implemented by the content catalog; the game state only ever stores item
/// ids and resolves presentation data through this trait.
pub trait ItemOracle {
    fn definition(&self, id: &str) -> Option<&ItemDefinition>;

    /// Returns every item definition known to this oracle.
    fn all_definitions(&self) -> Vec<&ItemDefinition>;
}

/// Catalog entry describing one kind of item.
///
/// # Display data
///
/// `asset` is either an emoji or a render key, depending on how the catalog
/// was authored. `display_width`/`display_height` are the on-screen size in
/// pixels and carry no gameplay meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub asset: String,
    pub category: ItemCategory,
    pub display_width: u32,
    pub display_height: u32,
}

impl ItemDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        asset: impl Into<String>,
        category: ItemCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            asset: asset.into(),
            category,
            display_width: DisplayDimensions::DEFAULT.width,
            display_height: DisplayDimensions::DEFAULT.height,
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.display_width = width;
        self.display_height = height;
        self
    }

    pub fn dimensions(&self) -> DisplayDimensions {
        DisplayDimensions {
            width: self.display_width,
            height: self.display_height,
        }
    }
}

/// Fixed set of item categories.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ItemCategory {
    Fruit,
    Vegetable,
    Drink,
    Dairy,
    Bakery,
    Other,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Fruit => "fruit",
            ItemCategory::Vegetable => "vegetable",
            ItemCategory::Drink => "drink",
            ItemCategory::Dairy => "dairy",
            ItemCategory::Bakery => "bakery",
            ItemCategory::Other => "other",
        }
    }
}

/// On-screen size of an item sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayDimensions {
    pub width: u32,
    pub height: u32,
}

impl DisplayDimensions {
    pub const DEFAULT: DisplayDimensions = DisplayDimensions {
        width: 32,
        height: 32,
    };
}
