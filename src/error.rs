use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Input file not found or unreadable: {path}: {source}")]
    InputNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input file is not a valid JSON array of cards: {path}: {source}")]
    InputParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Malformed card record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Failed to write output file: {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CleanerError>;
