use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Saved park not found: {0}")]
    SavedNotFound(String),

    #[error("Invalid borough: {0} (expected all, M, B, Q, X or R)")]
    InvalidBorough(String),

    #[error("Invalid sort: {0} (expected relevance or name)")]
    InvalidSort(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Search failed: {0}")]
    Search(#[from] nyc_finder_common::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
