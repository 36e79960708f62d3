use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid recipe id: {0}")]
    InvalidId(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Recipe not found: {0}")]
    NotFound(i64),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected API response: HTTP {status}: {body}")]
    Api { status: u16, body: String },
}
