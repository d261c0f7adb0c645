use clap::Parser;
use experience_cli::argparse::Cli;
use experience_cli::{commands, utils};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    utils::init_logger(cli.verbose);

    let catalog = commands::load_catalog(cli.catalog.as_deref())?;
    log::debug!("Catalog holds {} experiences", catalog.len());

    commands::handle_command(cli.command, &catalog)?;

    Ok(())
}
