// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by the blog domain and by the repository ports.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input that can never be stored, such as a malformed id or a blank email.
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// The document store failed or rejected the operation.
    #[error("store error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn post_not_found() -> Self {
        Self::NotFound("post not found".into())
    }
}
