// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain and repository failures, passed through untouched.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request payloads that never reach the domain, e.g. unparsable JSON.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wiring problems with an outside service (bad SMTP settings and the like).
    #[error("infrastructure failure: {0}")]
    Infrastructure(String),

    /// Rendering or delivering a new-post announcement failed.
    #[error("notification failure: {0}")]
    Notification(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn notification(msg: impl Into<String>) -> Self {
        Self::Notification(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::NotFound(_)))
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Domain(DomainError::Validation(_))
        )
    }
}
