use crate::argparse::SearchArgs;
use crate::commands::render;
use crate::CliError;
use experience_catalog::{search, Catalog, Query};

/// Layer the query sources: URL query string, then filter expression,
/// then explicit flags, then positional search terms.
pub fn build_query(args: &SearchArgs) -> Result<Query, CliError> {
    let mut query = match &args.url {
        Some(url) => Query::from_query_string(url).map_err(CliError::InvalidQuery)?,
        None => Query::new(),
    };

    if let Some(expr) = &args.filter {
        query = search::parse_query(expr, query).map_err(CliError::InvalidQuery)?;
    }

    if let Some(category) = args.category {
        query.category = category;
    }
    if let Some(sort_key) = args.sort {
        query.sort_key = sort_key;
    }
    if let Some(min_price) = args.min_price {
        query.price_range.min = min_price;
    }
    if let Some(max_price) = args.max_price {
        query.price_range.max = max_price;
    }
    if let Some(min_rating) = args.min_rating {
        query.min_rating = min_rating;
    }

    if !args.terms.is_empty() {
        let mut parts = Vec::new();
        if !query.search_term.is_empty() {
            parts.push(query.search_term.clone());
        }
        parts.extend(args.terms.iter().cloned());
        query.search_term = parts.join(" ");
    }

    if query.price_range.min > query.price_range.max {
        log::warn!(
            "Price range [{}, {}] is inverted, no experience can match",
            query.price_range.min,
            query.price_range.max
        );
    }

    Ok(query)
}

pub fn handle_search_command(args: SearchArgs, catalog: &Catalog) -> Result<(), CliError> {
    let query = build_query(&args)?;
    let results = catalog.query(&query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render::render_results(&results, &query));
    }
    if args.print_url {
        println!("?{}", query.to_query_string());
    }

    Ok(())
}
