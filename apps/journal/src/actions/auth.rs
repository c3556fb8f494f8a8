//! Sign-in, sign-up, and sign-out.
//!
//! These are pass-throughs to the identity provider. Provider errors come
//! back verbatim and there is no retry - the user just sees the message.

use unspoken_core::ports::AuthUser;

use crate::error::AppResult;
use crate::state::AppState;

pub async fn sign_in(state: &AppState, email: &str, password: &str) -> AppResult<AuthUser> {
    let user = state.session.sign_in(email, password).await?;
    tracing::info!(user_id = %user.id, "Signed in");
    Ok(user)
}

pub async fn sign_up(state: &AppState, email: &str, password: &str) -> AppResult<AuthUser> {
    let user = state.session.sign_up(email, password).await?;
    tracing::info!(user_id = %user.id, "Account created");
    Ok(user)
}

pub async fn sign_in_with_token(state: &AppState, id_token: &str) -> AppResult<AuthUser> {
    let user = state.session.sign_in_with_token(id_token).await?;
    tracing::info!(user_id = %user.id, "Federated sign-in");
    Ok(user)
}

pub async fn sign_out(state: &AppState) -> AppResult<()> {
    state.session.sign_out().await?;
    tracing::info!("Signed out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_provider_error_surfaces_verbatim() {
        let state = AppState::for_tests();
        let err = sign_in(&state, "nobody@example.com", "whatever")
            .await
            .unwrap_err();
        assert_eq!(err.status_line(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_sign_up_signs_the_user_in() {
        let state = AppState::for_tests();
        let user = sign_up(&state, "me@example.com", "secret1").await.unwrap();
        assert_eq!(state.session.current_user().await, Some(user));
    }
}
