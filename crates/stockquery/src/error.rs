use crate::alias::AliasCategory;

#[derive(Debug, thiserror::Error)]
pub enum StockQueryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration load error: {0}")]
    ConfigurationLoad(String),

    #[error("Duplicate {category} alias {alias:?}: mapped to both {first:?} and {second:?}")]
    DuplicateAlias {
        category: AliasCategory,
        alias: String,
        first: String,
        second: String,
    },

    #[error("Unknown {category} canonical value: {canonical:?}")]
    UnknownCanonical {
        category: AliasCategory,
        canonical: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, StockQueryError>;
