use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Marker `{marker}` not found in document")]
    MarkerNotFound { marker: String },
    #[error("End marker `{end}` appears before start marker `{start}`")]
    MarkersOutOfOrder { start: String, end: String },
    #[error("{service} API returned {status}: {message}")]
    Api {
        service: &'static str,
        status: u16,
        message: String,
    },
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BoxError>;
