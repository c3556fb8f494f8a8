//! Domain-level error types.

use thiserror::Error;

/// Domain errors - local rule violations rejected before any network call.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not signed in")]
    NotSignedIn,
}

/// Document-store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store request failed: {0}")]
    Query(String),

    #[error("Document not found")]
    NotFound,

    #[error("Write rejected: {0}")]
    Rejected(String),
}

/// Identity-provider errors. Provider messages are carried verbatim so the
/// presentation layer can surface them unchanged.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Provider(String),

    #[error("Provider unreachable: {0}")]
    Connection(String),

    #[error("Not signed in")]
    NotSignedIn,
}

/// Device-local settings store errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings read failed: {0}")]
    Read(String),

    #[error("Settings write failed: {0}")]
    Write(String),
}
