//! Error handling for the CV generator

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvTailorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file not found: {0}")]
    MissingInput(PathBuf),

    #[error("invalid JSON in {path}: {source}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("rendering error: {0}")]
    Rendering(String),

    #[error("scoring error: {0}")]
    Scoring(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CvTailorError>;
