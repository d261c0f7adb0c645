#![allow(dead_code)]

use experience_catalog::{CatalogItem, Category};

pub fn nightclub_item() -> CatalogItem {
    CatalogItem::new("a", "VIP Nightclub Package", Category::Nightlife, 299.0, 4.9)
        .with_review_count(124)
}

pub fn boxing_item() -> CatalogItem {
    CatalogItem::new("b", "Thai Boxing Experience", Category::Adventure, 129.0, 4.7)
        .with_review_count(156)
}

pub fn scenario_catalog() -> Vec<CatalogItem> {
    vec![nightclub_item(), boxing_item()]
}

pub fn ids(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

pub fn is_subsequence(needle: &[&CatalogItem], haystack: &[CatalogItem]) -> bool {
    let mut remaining = haystack.iter();
    needle
        .iter()
        .all(|wanted| remaining.any(|candidate| std::ptr::eq(*wanted, candidate)))
}

pub const SAMPLE_JSON: &str = r#"{
  "experiences": [
    {
      "id": "private-boat-party",
      "title": "Private Boat Party",
      "description": "Cruise along the Chao Phraya River with drinks, music, and stunning views.",
      "price": 349,
      "rating": 4.8,
      "reviewCount": 89,
      "category": "water",
      "isPopular": true,
      "features": ["Open Bar Package", "Sunset Cruise Experience"],
      "groupSize": "6-20 people"
    },
    {
      "id": "street-food-tour",
      "title": "Street Food Tour",
      "price": 89,
      "rating": 4.8,
      "reviewCount": 167,
      "category": "dining",
      "isNewExperience": true
    }
  ]
}"#;
