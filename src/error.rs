use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyEvalError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corpus on path {0:?} is not found")]
    CorpusNotFound(PathBuf),

    #[error("Unknown layout '{0}' (not a file and not a known layout name)")]
    UnknownLayout(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type KeResult<T> = Result<T, KeyEvalError>;
