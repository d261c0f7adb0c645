pub mod catalog;
pub mod engine;
pub mod enums;
pub mod errors;
pub mod query_params;
pub mod search;
pub mod types;

pub use catalog::{Catalog, CatalogFormat};
pub use enums::{Category, CategoryFilter, SortKey};
pub use errors::CatalogError;
pub use types::{CatalogItem, PriceRange, Query};
