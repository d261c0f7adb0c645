//! URL query-string form of a [`Query`], e.g. `?category=nightlife&q=boat`.

use crate::enums::{CategoryFilter, SortKey};
use crate::errors::CatalogError;
use crate::types::Query;
use std::str::FromStr;

pub const PARAM_SEARCH: &str = "q";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_MIN_PRICE: &str = "min_price";
pub const PARAM_MAX_PRICE: &str = "max_price";
pub const PARAM_RATING: &str = "rating";

fn decode_component(raw: &str) -> Result<String, CatalogError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| CatalogError::InvalidQuery(format!("Invalid encoding in '{}': {}", raw, e)))
}

fn parse_number(name: &str, value: &str) -> Result<f64, CatalogError> {
    let number: f64 = value.trim().parse().map_err(|_| {
        CatalogError::InvalidQuery(format!("Parameter '{}' is not a number: {}", name, value))
    })?;
    if number.is_nan() {
        return Err(CatalogError::InvalidQuery(format!(
            "Parameter '{}' is not a number: {}",
            name, value
        )));
    }
    Ok(number)
}

impl Query {
    /// Decode query state from a URL query string. A leading `?` is optional.
    /// Unknown parameters are ignored, unknown sort ids fall back to relevance.
    pub fn from_query_string(input: &str) -> Result<Self, CatalogError> {
        let mut query = Query::default();
        let input = input.trim().trim_start_matches('?');

        for pair in input.split('&').filter(|p| !p.is_empty()) {
            let (raw_name, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let name = decode_component(raw_name)?;
            let value = decode_component(raw_value)?;

            match name.as_str() {
                PARAM_SEARCH => query.search_term = value,
                PARAM_CATEGORY => {
                    query.category = if value.is_empty() {
                        CategoryFilter::All
                    } else {
                        CategoryFilter::from_str(&value)?
                    }
                }
                PARAM_SORT => query.sort_key = SortKey::from_param(&value),
                PARAM_MIN_PRICE => query.price_range.min = parse_number(&name, &value)?,
                PARAM_MAX_PRICE => query.price_range.max = parse_number(&name, &value)?,
                PARAM_RATING => query.min_rating = parse_number(&name, &value)?,
                _ => log::debug!("Ignoring unknown query parameter '{}'", name),
            }
        }

        Ok(query)
    }

    /// Encode the non-default parts of the query, in a fixed parameter order.
    /// The default query encodes to an empty string.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if !self.search_term.is_empty() {
            pairs.push((PARAM_SEARCH, self.search_term.clone()));
        }
        if let CategoryFilter::Named(category) = self.category {
            pairs.push((PARAM_CATEGORY, category.to_string()));
        }
        if self.sort_key != SortKey::Relevance {
            pairs.push((PARAM_SORT, self.sort_key.to_string()));
        }
        if self.price_range.min != f64::NEG_INFINITY {
            pairs.push((PARAM_MIN_PRICE, self.price_range.min.to_string()));
        }
        if self.price_range.max != f64::INFINITY {
            pairs.push((PARAM_MAX_PRICE, self.price_range.max.to_string()));
        }
        if self.min_rating > 0.0 {
            pairs.push((PARAM_RATING, self.min_rating.to_string()));
        }

        pairs
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
