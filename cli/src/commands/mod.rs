pub mod render;
mod search;

use crate::argparse::{Commands, ListArgs, ShowArgs};
use crate::CliError;
use experience_catalog::{Catalog, Category, Query};
pub use search::{build_query, handle_search_command};

/// Catalog from `path`, or the bundled one when no path is given
pub fn load_catalog(path: Option<&str>) -> Result<Catalog, CliError> {
    match path {
        Some(path) => {
            Catalog::new_from_file(path).map_err(|e| CliError::CatalogLoad(path.to_string(), e))
        }
        None => Ok(Catalog::builtin().clone()),
    }
}

pub fn handle_command(command: Commands, catalog: &Catalog) -> Result<(), CliError> {
    match command {
        Commands::List(args) => handle_list_command(args, catalog),
        Commands::Search(args) => handle_search_command(args, catalog),
        Commands::Show(args) => handle_show_command(args, catalog),
        Commands::Categories => handle_categories_command(catalog),
    }
}

pub fn handle_list_command(args: ListArgs, catalog: &Catalog) -> Result<(), CliError> {
    let items = catalog.query(&Query::new());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", render::render_results(&items, &Query::new()));
    }
    Ok(())
}

pub fn handle_show_command(args: ShowArgs, catalog: &Catalog) -> Result<(), CliError> {
    let item = catalog
        .find(&args.id)
        .ok_or_else(|| CliError::ExperienceNotFound(args.id.clone()))?;
    let related = catalog.related(&item.id);

    if args.json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        print!("{}", render::render_detail(item, &related));
    }
    Ok(())
}

pub fn handle_categories_command(catalog: &Catalog) -> Result<(), CliError> {
    let counts: Vec<(Category, usize)> = catalog.category_counts().into_iter().collect();
    print!("{}", render::render_categories(&counts, catalog.len()));
    Ok(())
}
