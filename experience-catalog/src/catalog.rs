use crate::engine;
use crate::enums::Category;
use crate::errors::CatalogError;
use crate::types::{CatalogItem, Query};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use serde_yaml_ng::Value as YamlValue;
use std::collections::HashSet;
use std::sync::OnceLock;
use strum::IntoEnumIterator;

const BUILTIN_CATALOG_YAML: &str = include_str!("../data/experiences.yaml");

static BUILTIN_CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn from_path(path: &str) -> Result<Self, CatalogError> {
        let lower = path.to_lowercase();
        if lower.ends_with(".json") {
            Ok(CatalogFormat::Json)
        } else if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Ok(CatalogFormat::Yaml)
        } else {
            Err(CatalogError::UnsupportedFormat(path.to_string()))
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    experiences: Vec<CatalogItem>,
}

/// Read-only collection of experiences, loaded once and queried many times
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from already constructed items, validating them
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            validate_item(item)?;
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn new_from_file(path: &str) -> Result<Self, CatalogError> {
        let format = CatalogFormat::from_path(path)?;
        let input = fs_err::read_to_string(path)?;
        let catalog = Self::new_from_str(&input, format)?;
        log::info!("Loaded {} experiences from {}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn new_from_str(input: &str, format: CatalogFormat) -> Result<Self, CatalogError> {
        let doc: JsonValue = match format {
            CatalogFormat::Yaml => {
                let yaml_value: YamlValue = serde_yaml_ng::from_str(input)?;
                serde_json::to_value(yaml_value)?
            }
            CatalogFormat::Json => serde_json::from_str(input)?,
        };
        if doc.get("experiences").is_none() {
            return Err(CatalogError::ParseError(
                "Missing 'experiences' field.".to_string(),
            ));
        }
        let document: CatalogDocument = serde_json::from_value(doc)?;
        Self::from_items(document.experiences)
    }

    /// The experiences bundled with the crate, parsed on first use
    pub fn builtin() -> &'static Catalog {
        BUILTIN_CATALOG.get_or_init(|| {
            Self::new_from_str(BUILTIN_CATALOG_YAML, CatalogFormat::Yaml)
                .expect("bundled experiences.yaml must be a valid catalog")
        })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Related experiences of `id`, in catalog order. The item itself is never
    /// included and each related item appears once. Unknown ids are skipped.
    pub fn related(&self, id: &str) -> Vec<&CatalogItem> {
        let Some(item) = self.find(id) else {
            return Vec::new();
        };
        for related_id in &item.related_experiences {
            if self.find(related_id).is_none() {
                log::debug!("{} lists unknown related experience {}", id, related_id);
            }
        }
        self.items
            .iter()
            .filter(|other| other.id != id && item.related_experiences.contains(&other.id))
            .collect()
    }

    /// Number of experiences per category, for every category in declaration order
    pub fn category_counts(&self) -> IndexMap<Category, usize> {
        let mut counts: IndexMap<Category, usize> = Category::iter().map(|c| (c, 0)).collect();
        for item in &self.items {
            *counts.entry(item.category).or_default() += 1;
        }
        counts
    }

    pub fn query(&self, query: &Query) -> Vec<&CatalogItem> {
        engine::query(&self.items, query)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, CatalogError> {
        let document = CatalogDocument {
            experiences: self.items.clone(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

fn validate_item(item: &CatalogItem) -> Result<(), CatalogError> {
    let invalid = |reason: String| -> Result<(), CatalogError> {
        Err(CatalogError::InvalidItem(item.id.clone(), reason))
    };
    if item.id.trim().is_empty() {
        return invalid("id must not be empty".to_string());
    }
    if !item.price.is_finite() || item.price < 0.0 {
        return invalid(format!("price must be a non-negative number, got {}", item.price));
    }
    if !(0.0..=5.0).contains(&item.rating) {
        return invalid(format!("rating must be within [0, 5], got {}", item.rating));
    }
    Ok(())
}
