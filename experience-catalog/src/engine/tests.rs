use super::*;
use crate::enums::Category;
use crate::types::PriceRange;
use strum::IntoEnumIterator;

fn nightclub() -> CatalogItem {
    CatalogItem::new(
        "a",
        "VIP Nightclub Package",
        Category::Nightlife,
        299.0,
        4.9,
    )
    .with_description("Skip the lines and enjoy bottle service at Bangkok's hottest nightclubs.")
    .with_review_count(124)
    .with_features(&["Bottle Service at Each Venue", "Skip-the-Line Access"])
    .with_popular(true)
}

fn boxing() -> CatalogItem {
    CatalogItem::new(
        "b",
        "Thai Boxing Experience",
        Category::Adventure,
        129.0,
        4.7,
    )
    .with_description("Learn Muay Thai basics from professional fighters.")
    .with_review_count(156)
    .with_features(&["Professional Muay Thai Training", "Certificate of Completion"])
}

fn two_items() -> Vec<CatalogItem> {
    vec![nightclub(), boxing()]
}

/// Items with many ties under every sort key
fn tie_heavy_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("t1", "One", Category::Water, 100.0, 4.5).with_review_count(10),
        CatalogItem::new("t2", "Two", Category::Water, 50.0, 4.5)
            .with_review_count(20)
            .with_new_experience(true),
        CatalogItem::new("t3", "Three", Category::Dining, 100.0, 4.8).with_review_count(10),
        CatalogItem::new("t4", "Four", Category::Dining, 50.0, 4.5)
            .with_review_count(20)
            .with_new_experience(true),
        CatalogItem::new("t5", "Five", Category::Cultural, 100.0, 4.8).with_review_count(10),
    ]
}

fn ids(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

#[test]
fn test_category_filter_returns_matching_items() {
    let catalog = two_items();
    let query = Query::new().with_category(Category::Nightlife);
    assert_eq!(ids(&super::query(&catalog, &query)), vec!["a"]);
}

#[test]
fn test_sort_price_low() {
    let catalog = two_items();
    let query = Query::new().with_sort_key(SortKey::PriceLow);
    assert_eq!(ids(&super::query(&catalog, &query)), vec!["b", "a"]);
}

#[test]
fn test_sort_popular() {
    let catalog = two_items();
    let query = Query::new().with_sort_key(SortKey::Popular);
    assert_eq!(ids(&super::query(&catalog, &query)), vec!["b", "a"]);
}

#[test]
fn test_search_term_matches_title() {
    let catalog = two_items();
    let query = Query::new().with_search_term("boxing");
    assert_eq!(ids(&super::query(&catalog, &query)), vec!["b"]);
}

#[test]
fn test_min_rating_filter() {
    let catalog = two_items();
    let query = Query::new().with_min_rating(4.8);
    assert_eq!(ids(&super::query(&catalog, &query)), vec!["a"]);
}

#[test]
fn test_empty_catalog_returns_empty() {
    let catalog: Vec<CatalogItem> = Vec::new();
    for sort_key in SortKey::iter() {
        let query = Query::new()
            .with_search_term("anything")
            .with_category(Category::Water)
            .with_sort_key(sort_key);
        assert!(super::query(&catalog, &query).is_empty());
    }
    assert!(super::query(&catalog, &Query::new()).is_empty());
}

#[test]
fn test_search_term_case_insensitive() {
    let item = boxing();
    assert_eq!(
        matches_search_term(&item, "BOXING"),
        matches_search_term(&item, "boxing")
    );
    assert!(matches_search_term(&item, "BoXiNg"));
}

#[test]
fn test_search_term_matches_description_and_features() {
    let item = nightclub();
    assert!(matches_search_term(&item, "bottle service at bangkok"));
    assert!(matches_search_term(&item, "skip-the-line"));
    assert!(!matches_search_term(&item, "muay thai"));
}

#[test]
fn test_search_term_is_substring_not_word_match() {
    let item = nightclub();
    assert!(matches_search_term(&item, "club pack"));
    assert!(matches_search_term(&item, "ghtcl"));
}

#[test]
fn test_empty_term_matches_everything() {
    let item = CatalogItem::new("x", "", Category::Dining, 0.0, 0.0);
    assert!(matches_search_term(&item, ""));
}

#[test]
fn test_missing_text_fields_do_not_match() {
    let item = CatalogItem::new("x", "Title", Category::Dining, 10.0, 4.0);
    assert!(item.description.is_empty());
    assert!(item.features.is_empty());
    assert!(!matches_search_term(&item, "boat"));
}

#[test]
fn test_matches_category() {
    let item = boxing();
    assert!(matches_category(&item, &CategoryFilter::All));
    assert!(matches_category(
        &item,
        &CategoryFilter::Named(Category::Adventure)
    ));
    assert!(!matches_category(
        &item,
        &CategoryFilter::Named(Category::Nightlife)
    ));
}

#[test]
fn test_matches_price_range_inclusive_bounds() {
    let item = boxing();
    assert!(matches_price_range(&item, 129.0, 129.0));
    assert!(matches_price_range(&item, 0.0, 129.0));
    assert!(!matches_price_range(&item, 0.0, 128.99));
    assert!(!matches_price_range(&item, 129.01, 500.0));
}

#[test]
fn test_matches_min_rating() {
    let item = boxing();
    assert!(matches_min_rating(&item, 0.0));
    assert!(matches_min_rating(&item, -1.0));
    assert!(matches_min_rating(&item, 4.7));
    assert!(!matches_min_rating(&item, 4.71));
}

#[test]
fn test_inverted_price_range_yields_empty_result() {
    let catalog = two_items();
    let query = Query::new().with_price_range(500.0, 100.0);
    assert!(filter(&catalog, &query).is_empty());
    assert!(super::query(&catalog, &query).is_empty());
}

#[test]
fn test_filter_is_conjunctive() {
    let expensive = CatalogItem::new("x", "Boat Cruise", Category::Water, 500.0, 5.0);
    let catalog = vec![expensive];
    let query = Query::new()
        .with_search_term("boat")
        .with_category(Category::Water)
        .with_price_range(0.0, 100.0);
    assert!(filter(&catalog, &query).is_empty());

    let query = query.with_price_range(0.0, 500.0);
    assert_eq!(filter(&catalog, &query).len(), 1);
}

#[test]
fn test_empty_query_returns_whole_catalog_unchanged() {
    let catalog = tie_heavy_catalog();
    let result = filter(&catalog, &Query::new());
    assert_eq!(result.len(), catalog.len());
    for (returned, original) in result.iter().zip(catalog.iter()) {
        assert!(std::ptr::eq(*returned, original));
    }
}

#[test]
fn test_filter_preserves_catalog_order() {
    let catalog = tie_heavy_catalog();
    let query = Query::new().with_price_range(100.0, 100.0);
    assert_eq!(ids(&filter(&catalog, &query)), vec!["t1", "t3", "t5"]);
}

#[test]
fn test_relevance_keeps_input_order() {
    let catalog = tie_heavy_catalog();
    let all: Vec<&CatalogItem> = catalog.iter().collect();
    assert_eq!(ids(&sort(&all, SortKey::Relevance)), ids(&all));
}

#[test]
fn test_sort_is_stable_for_every_key() {
    let catalog = tie_heavy_catalog();
    let all: Vec<&CatalogItem> = catalog.iter().collect();

    assert_eq!(
        ids(&sort(&all, SortKey::PriceLow)),
        vec!["t2", "t4", "t1", "t3", "t5"]
    );
    assert_eq!(
        ids(&sort(&all, SortKey::PriceHigh)),
        vec!["t1", "t3", "t5", "t2", "t4"]
    );
    assert_eq!(
        ids(&sort(&all, SortKey::Rating)),
        vec!["t3", "t5", "t1", "t2", "t4"]
    );
    assert_eq!(
        ids(&sort(&all, SortKey::Popular)),
        vec!["t2", "t4", "t1", "t3", "t5"]
    );
    assert_eq!(
        ids(&sort(&all, SortKey::Newest)),
        vec!["t2", "t4", "t1", "t3", "t5"]
    );
}

#[test]
fn test_sort_is_idempotent() {
    let catalog = tie_heavy_catalog();
    let all: Vec<&CatalogItem> = catalog.iter().collect();
    for sort_key in SortKey::iter() {
        let once = sort(&all, sort_key);
        let twice = sort(&once, sort_key);
        assert_eq!(ids(&once), ids(&twice), "sort key {}", sort_key);
    }
}

#[test]
fn test_sort_does_not_mutate_input() {
    let catalog = tie_heavy_catalog();
    let all: Vec<&CatalogItem> = catalog.iter().collect();
    let before = ids(&all);
    let _ = sort(&all, SortKey::PriceHigh);
    assert_eq!(ids(&all), before);
    assert_eq!(catalog, tie_heavy_catalog());
}

#[test]
fn test_query_returns_references_into_catalog() {
    let catalog = two_items();
    let results = super::query(&catalog, &Query::new().with_sort_key(SortKey::PriceLow));
    assert!(std::ptr::eq(results[0], &catalog[1]));
    assert!(std::ptr::eq(results[1], &catalog[0]));
}

#[test]
fn test_query_composes_filter_then_sort() {
    let catalog = tie_heavy_catalog();
    let query = Query::new()
        .with_min_rating(4.6)
        .with_sort_key(SortKey::PriceHigh);
    assert_eq!(ids(&super::query(&catalog, &query)), vec!["t3", "t5"]);
}

// Malformed values are the data source's problem. The engine neither panics
// nor repairs them: a NaN price never satisfies a price bound.
#[test]
fn test_nan_price_is_not_repaired() {
    let broken = CatalogItem::new("nan", "Broken", Category::Water, f64::NAN, 4.0);
    let catalog = vec![broken, boxing()];

    let bounded = Query::new().with_price_range(0.0, 1000.0);
    assert_eq!(ids(&filter(&catalog, &bounded)), vec!["b"]);

    let unbounded = Query::new();
    assert!(PriceRange::default().is_unbounded());
    assert_eq!(filter(&catalog, &unbounded).len(), 1);

    let all: Vec<&CatalogItem> = catalog.iter().collect();
    assert_eq!(sort(&all, SortKey::PriceLow).len(), 2);
}

#[test]
fn test_out_of_range_rating_is_not_clamped() {
    let odd = CatalogItem::new("odd", "Odd", Category::Dining, 10.0, 7.5);
    assert!(matches_min_rating(&odd, 5.0));
    let negative = CatalogItem::new("neg", "Neg", Category::Dining, 10.0, -1.0);
    assert!(matches_min_rating(&negative, 0.0));
    assert!(!matches_min_rating(&negative, 0.5));
}
