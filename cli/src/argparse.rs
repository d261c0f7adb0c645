use clap::{Args, Parser, Subcommand};
use experience_catalog::{CategoryFilter, SortKey};

#[derive(Parser, Debug)]
#[command(
    name = "xp",
    about = "Browse and search the experience catalog",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Catalog file (.yaml, .yml or .json); defaults to the bundled catalog
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every experience in catalog order
    List(ListArgs),
    /// Filter and sort experiences
    Search(SearchArgs),
    /// Show one experience and its related experiences
    Show(ShowArgs),
    /// Number of experiences per category
    Categories,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Free text matched against title, description and features
    pub terms: Vec<String>,

    /// Category id, or "all"
    #[arg(long)]
    pub category: Option<CategoryFilter>,

    /// relevance, price-low, price-high, rating, popular or newest
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Lowest price to include
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest price to include
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum rating, 0 disables the filter
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Start from a URL query string, e.g. "?category=nightlife&q=boat"
    #[arg(long)]
    pub url: Option<String>,

    /// Filter expression, e.g. "category:water price:[0 TO 300] rating:>=4.5"
    #[arg(long)]
    pub filter: Option<String>,

    /// Print the equivalent URL query string after the results
    #[arg(long)]
    pub print_url: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Experience id, e.g. vip-nightclub-package
    pub id: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
