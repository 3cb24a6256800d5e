use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no id available for this match")]
    MissingIdentifier,
}
