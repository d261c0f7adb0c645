use crate::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Nightlife,
    Water,
    Dining,
    Adventure,
    Cultural,
}

impl Category {
    /// Human readable label shown next to the category filter
    pub fn label(&self) -> &'static str {
        match self {
            Category::Nightlife => "Nightlife",
            Category::Water => "Water Activities",
            Category::Dining => "Dining",
            Category::Adventure => "Adventure",
            Category::Cultural => "Cultural",
        }
    }
}

/// Category selection of a query. `All` bypasses the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(Category),
}

impl CategoryFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Named(category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Named(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s)
            .map(CategoryFilter::Named)
            .map_err(|_| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum SortKey {
    #[default]
    #[strum(to_string = "relevance", serialize = "default")]
    Relevance,
    #[strum(to_string = "price-low", serialize = "price-asc")]
    PriceLow,
    #[strum(to_string = "price-high", serialize = "price-desc")]
    PriceHigh,
    #[strum(to_string = "rating")]
    Rating,
    #[strum(to_string = "popular")]
    Popular,
    #[strum(to_string = "newest")]
    Newest,
}

impl SortKey {
    /// Lenient parse used for query state coming from the outside.
    /// Unknown ids fall back to relevance ordering.
    pub fn from_param(value: &str) -> Self {
        match SortKey::from_str(value.trim()) {
            Ok(key) => key,
            Err(_) => {
                log::warn!("Unknown sort key '{}', using relevance ordering", value);
                SortKey::Relevance
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Most Relevant",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Popular => "Most Popular",
            SortKey::Newest => "Newest First",
        }
    }
}
