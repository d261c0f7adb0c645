//! Compact filter expressions, e.g. `category:nightlife price:[0 TO 300] rating:>=4.5 rooftop`.

mod builder;
mod parser;
mod types;

pub use builder::apply_terms;
pub use parser::parse_dsl;
pub use types::{Condition, Field, Filter, Term};

use crate::errors::CatalogError;
use crate::types::Query;

/// Parse `input` and apply it on top of `base`
pub fn parse_query(input: &str, base: Query) -> Result<Query, CatalogError> {
    let terms = parse_dsl(input).map_err(CatalogError::InvalidQuery)?;
    apply_terms(&terms, base)
}
