/// Log to stderr. `RUST_LOG` wins over the `--verbose` default when set.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    if let Err(e) = pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .try_init()
    {
        eprintln!("Logger already initialized: {}", e);
    }
}
