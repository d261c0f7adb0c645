//! Catalog query engine: pure filtering and ordering over a borrowed catalog.
//!
//! Every function here is side-effect free. Results borrow from the input
//! slice; the source catalog is never reordered or modified.

use crate::enums::{CategoryFilter, SortKey};
use crate::types::{CatalogItem, Query};
use std::cmp::Ordering;

/// Case-insensitive substring match against title, description and features.
/// An empty term matches every item.
pub fn matches_search_term(item: &CatalogItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    item.title.to_lowercase().contains(&term)
        || item.description.to_lowercase().contains(&term)
        || item
            .features
            .iter()
            .any(|feature| feature.to_lowercase().contains(&term))
}

pub fn matches_category(item: &CatalogItem, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Named(named) => item.category == *named,
    }
}

/// Inclusive on both ends. An inverted range (`min > max`) matches nothing.
pub fn matches_price_range(item: &CatalogItem, min: f64, max: f64) -> bool {
    min <= item.price && item.price <= max
}

pub fn matches_min_rating(item: &CatalogItem, min_rating: f64) -> bool {
    min_rating <= 0.0 || item.rating >= min_rating
}

fn matches_query(item: &CatalogItem, query: &Query) -> bool {
    matches_search_term(item, &query.search_term)
        && matches_category(item, &query.category)
        && matches_price_range(item, query.price_range.min, query.price_range.max)
        && matches_min_rating(item, query.min_rating)
}

/// Items satisfying every predicate of the query, in catalog order
pub fn filter<'a>(catalog: &'a [CatalogItem], query: &Query) -> Vec<&'a CatalogItem> {
    catalog
        .iter()
        .filter(|item| matches_query(item, query))
        .collect()
}

fn compare(a: &CatalogItem, b: &CatalogItem, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::Relevance => Ordering::Equal,
        SortKey::PriceLow => a.price.total_cmp(&b.price),
        SortKey::PriceHigh => b.price.total_cmp(&a.price),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Popular => b.review_count.cmp(&a.review_count),
        // No creation timestamp exists; new experiences simply go first.
        SortKey::Newest => b.is_new_experience.cmp(&a.is_new_experience),
    }
}

/// Returns a newly ordered sequence. The sort is stable for every key, so
/// items that compare equal keep their input order.
pub fn sort<'a>(items: &[&'a CatalogItem], sort_key: SortKey) -> Vec<&'a CatalogItem> {
    let mut sorted = items.to_vec();
    if sort_key != SortKey::Relevance {
        sorted.sort_by(|a, b| compare(a, b, sort_key));
    }
    sorted
}

/// `sort(filter(catalog, query), query.sort_key)`
pub fn query<'a>(catalog: &'a [CatalogItem], query: &Query) -> Vec<&'a CatalogItem> {
    let filtered = filter(catalog, query);
    let results = sort(&filtered, query.sort_key);
    log::debug!(
        "query term={:?} category={} sort={} active_filters={} -> {}/{} items",
        query.search_term,
        query.category,
        query.sort_key,
        query.active_filter_count(),
        results.len(),
        catalog.len()
    );
    results
}

#[cfg(test)]
mod tests;
