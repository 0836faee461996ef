use thiserror::Error;

/// Error taxonomy for the discipline core.
///
/// Every failure a service operation can produce is one of these kinds so the
/// presentation layer can pick a status/message without string matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Duplicate signature: {0}")]
    DuplicateSignature(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Recover a typed domain error from the boxed error a repository returns.
    ///
    /// Store implementations surface invariant violations (duplicate
    /// signature, guarded status update) as `DomainError` inside the box;
    /// anything else is reported as a database failure.
    pub fn from_store(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match err.downcast::<DomainError>() {
            Ok(domain) => *domain,
            Err(other) => DomainError::Database(other.to_string()),
        }
    }
}
