use crate::enums::{Category, CategoryFilter, SortKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single bookable experience from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_new_experience: bool,
    #[serde(default)]
    pub related_experiences: Vec<String>,
    // Descriptive payload (duration, groupSize, location, itinerary, reviews, ...).
    // Carried through untouched for rendering.
    #[serde(flatten)]
    pub details: IndexMap<String, JsonValue>,
}

impl CatalogItem {
    pub fn new(id: &str, title: &str, category: Category, price: f64, rating: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category,
            price,
            rating,
            review_count: 0,
            features: Vec::new(),
            is_popular: false,
            is_new_experience: false,
            related_experiences: Vec::new(),
            details: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_review_count(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }

    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_popular(mut self, is_popular: bool) -> Self {
        self.is_popular = is_popular;
        self
    }

    pub fn with_new_experience(mut self, is_new_experience: bool) -> Self {
        self.is_new_experience = is_new_experience;
        self
    }

    /// Look up an opaque descriptive field, e.g. "duration" or "location"
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(|v| v.as_str())
    }
}

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min == f64::NEG_INFINITY && self.max == f64::INFINITY
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Filter and sort parameters for one catalog lookup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort_key: SortKey,
    pub price_range: PriceRange,
    /// 0 or below disables the rating filter
    pub min_rating: f64,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: &str) -> Self {
        self.search_term = term.to_string();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Number of filter dimensions that currently narrow the result set.
    /// Sorting is not a filter and never counts.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search_term.is_empty(),
            !self.category.is_all(),
            !self.price_range.is_unbounded(),
            self.min_rating > 0.0,
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Reset every filter dimension, keeping the chosen sort order
    pub fn clear_filters(&mut self) {
        *self = Self {
            sort_key: self.sort_key,
            ..Self::default()
        };
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
