use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Resource already exists")]
    AlreadyExists,

    #[error("Internal server error")]
    InternalServerError,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Detection service unavailable: {0}")]
    DetectorUnavailable(String),
}
