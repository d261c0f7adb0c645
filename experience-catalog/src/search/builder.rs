use super::types::{Condition, Field, Filter, Term};
use crate::enums::{CategoryFilter, SortKey};
use crate::errors::CatalogError;
use crate::types::Query;
use std::str::FromStr;

fn invalid(msg: String) -> CatalogError {
    CatalogError::InvalidQuery(msg)
}

fn numeric(field: Field, value: &str) -> Result<f64, CatalogError> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(invalid(format!(
            "Field '{}' expects a finite number, got '{}'",
            field.name(),
            value
        ))),
    }
}

/// Apply parsed terms on top of `base`. Later terms override earlier ones
/// for the same field; free text is appended to the search term.
pub fn apply_terms(terms: &[Term], base: Query) -> Result<Query, CatalogError> {
    let mut query = base;
    let mut text_parts: Vec<String> = Vec::new();
    if !query.search_term.is_empty() {
        text_parts.push(query.search_term.clone());
    }

    for term in terms {
        match term {
            Term::Text(text) => text_parts.push(text.clone()),
            Term::Filter(Filter {
                field: Field::Text,
                condition: Condition::Eq(text),
            }) => text_parts.push(text.clone()),
            Term::Filter(filter) => apply_filter(&mut query, filter)?,
        }
    }

    query.search_term = text_parts.join(" ");
    Ok(query)
}

fn apply_filter(query: &mut Query, filter: &Filter) -> Result<(), CatalogError> {
    match (filter.field, &filter.condition) {
        (Field::Category, Condition::Eq(value)) => {
            query.category = CategoryFilter::from_str(value)?;
        }
        (Field::Sort, Condition::Eq(value)) => {
            query.sort_key = SortKey::from_param(value);
        }
        (Field::Price, Condition::Eq(value)) => {
            let price = numeric(Field::Price, value)?;
            query.price_range.min = price;
            query.price_range.max = price;
        }
        (Field::Price, Condition::Gte(value)) => {
            query.price_range.min = numeric(Field::Price, value)?;
        }
        (Field::Price, Condition::Lte(value)) => {
            query.price_range.max = numeric(Field::Price, value)?;
        }
        (Field::Price, Condition::Range(min, max)) => {
            query.price_range.min = numeric(Field::Price, min)?;
            query.price_range.max = numeric(Field::Price, max)?;
        }
        (Field::Rating, Condition::Eq(value) | Condition::Gte(value)) => {
            query.min_rating = numeric(Field::Rating, value)?;
        }
        (field, _) => {
            return Err(invalid(format!(
                "Invalid comparison for field: {}",
                field.name()
            )));
        }
    }
    Ok(())
}
