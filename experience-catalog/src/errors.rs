/// Error types for catalog loading and query-state decoding
#[derive(Debug)]
pub enum CatalogError {
    ParseError(String),
    IoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    SerdeYamlError(serde_yaml_ng::Error),
    UnsupportedFormat(String),
    DuplicateId(String),
    InvalidItem(String, String),
    UnknownCategory(String),
    InvalidQuery(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::IoError(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::SerdeJsonError(err)
    }
}

impl From<serde_yaml_ng::Error> for CatalogError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        CatalogError::SerdeYamlError(err)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CatalogError::IoError(err) => write!(f, "IO error: {}", err),
            CatalogError::SerdeJsonError(err) => write!(f, "Serde JSON error: {}", err),
            CatalogError::SerdeYamlError(err) => write!(f, "Serde YAML error: {}", err),
            CatalogError::UnsupportedFormat(path) => {
                write!(
                    f,
                    "Unsupported catalog format: {} (use '.json', '.yaml' or '.yml')",
                    path
                )
            }
            CatalogError::DuplicateId(id) => write!(f, "Duplicate experience id: {}", id),
            CatalogError::InvalidItem(id, reason) => {
                write!(f, "Invalid experience '{}': {}", id, reason)
            }
            CatalogError::UnknownCategory(category) => {
                write!(f, "Unknown category: {}", category)
            }
            CatalogError::InvalidQuery(msg) => write!(f, "Invalid query: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::IoError(err) => Some(err),
            CatalogError::SerdeJsonError(err) => Some(err),
            CatalogError::SerdeYamlError(err) => Some(err),
            _ => None,
        }
    }
}
