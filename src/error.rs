//! Errors raised at the request boundary.
//!
//! The analyzer, recommender and pipeline never fail; only resolving a
//! request (validation, file lookup, file reads) and loading configuration
//! can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("File not found.")]
    NotFound { file_id: i64 },

    #[error("Could not read file text: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
