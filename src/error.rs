//! Error types for recipe database extraction

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("recipe database is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("recipe database has no \"recipe\" table")]
    MissingRecipeTable,

    #[error("malformed recipe '{id}'")]
    Recipe {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("recipe '{id}' has neither \"result\" nor \"results\"")]
    MissingResult { id: String },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
