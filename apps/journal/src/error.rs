//! Application-level error type and user-facing message mapping.

use thiserror::Error;

use unspoken_core::error::{DomainError, SessionError, SettingsError, StoreError};
use unspoken_shared::backup::BackupError;

/// One error type for every action. No failure is fatal - each one renders
/// as a status line and the prompt comes back.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("{0}")]
    Backup(#[from] BackupError),

    #[error("File error: {0}")]
    File(String),
}

impl AppError {
    /// The line shown to the user. Provider and validation messages pass
    /// through verbatim; store failures are logged and collapse to a generic
    /// transient message.
    pub fn status_line(&self) -> String {
        match self {
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store call failed");
                "Could not reach the journal store. Try again.".to_string()
            }
            AppError::Settings(err) => {
                tracing::error!(error = %err, "Settings write failed");
                "Could not save device settings.".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for actions.
pub type AppResult<T> = Result<T, AppError>;
