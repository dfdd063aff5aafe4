use thiserror::Error;

/// Request-level failure taxonomy. Every variant is recovered at the HTTP
/// boundary and rendered as a `success: false` envelope; messages are the
/// user-facing text shown to the caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("The lookup period has ended.")]
    Expired,
    #[error("{0}")]
    Storage(String),
    #[error("{0}")]
    Unexpected(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}
