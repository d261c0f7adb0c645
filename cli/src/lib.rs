pub mod argparse;
pub mod commands;
pub mod utils;

use experience_catalog::CatalogError;

/// Error type for CLI failures, with hints on how to recover
#[derive(Debug)]
pub enum CliError {
    CatalogLoad(String, CatalogError),
    InvalidQuery(CatalogError),
    ExperienceNotFound(String),
    Output(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::CatalogLoad(path, e) => {
                write!(
                    f,
                    "Failed to load catalog from {path}: {e}\n\nPossible fixes:\n  - Check that the file exists and is readable\n  - Use a .yaml, .yml or .json file with a top-level 'experiences' list\n  - Omit --catalog to use the bundled catalog"
                )
            }
            CliError::InvalidQuery(e) => {
                write!(
                    f,
                    "{e}\n\nValid categories are: all, nightlife, water, dining, adventure, cultural\nValid sort keys are: relevance, price-low, price-high, rating, popular, newest"
                )
            }
            CliError::ExperienceNotFound(id) => {
                write!(
                    f,
                    "Experience not found: '{}'\n\nRun 'xp list' to see the available ids.",
                    id
                )
            }
            CliError::Output(e) => write!(f, "Failed to render output: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::CatalogLoad(_, e) => Some(e),
            CliError::InvalidQuery(e) => Some(e),
            CliError::ExperienceNotFound(_) => None,
            CliError::Output(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err)
    }
}
