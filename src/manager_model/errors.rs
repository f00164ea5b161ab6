use thiserror::Error;

/// Errors raised while loading the model artifact at startup
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("ModelError::NotFound: {0}")]
    NotFound(String),
    #[error("ModelError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("ModelError::Document: {0}")]
    Document(#[from] serde_json::Error),
    #[error("ModelError::Inconsistent: {0}")]
    Inconsistent(String),
}

/// Errors raised by a model when asked for a prediction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("model expects {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("model produced a non-finite result: {0}")]
    NonFinite(f64),
}
