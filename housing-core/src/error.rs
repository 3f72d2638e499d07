//! Error types for the housing-core library

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for site operations
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing static assets: {}", display_paths(.0))]
    MissingAssets(Vec<PathBuf>),

    #[error("Timeline error: {0}")]
    Timeline(String),
}

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
