//! Actions - the orchestration layer between commands and the ports.
//! Each function validates locally, calls the platform, and maps errors;
//! nothing here touches presentation.

pub mod auth;
pub mod backup;
pub mod entries;
pub mod share;

use unspoken_core::DomainError;
use unspoken_core::ports::AuthUser;

use crate::error::AppResult;
use crate::state::AppState;

/// Most actions require a signed-in user.
pub async fn require_user(state: &AppState) -> AppResult<AuthUser> {
    state
        .session
        .current_user()
        .await
        .ok_or_else(|| DomainError::NotSignedIn.into())
}
