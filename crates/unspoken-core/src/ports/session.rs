//! Identity-provider port.
//!
//! Sessions are owned entirely by the hosted provider; this side never sees
//! credentials beyond passing them through, and implements no retry policy -
//! provider errors surface to the user as-is.

use async_trait::async_trait;

use crate::domain::OwnerId;
use crate::error::SessionError;

use super::store::SubscriptionId;

/// The signed-in user as the provider reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: OwnerId,
    pub email: Option<String>,
}

/// Handler for sign-in-state changes. Fired with the current user, or `None`
/// after sign-out.
pub type AuthStateHandler = Box<dyn Fn(Option<AuthUser>) + Send + Sync>;

#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, SessionError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, SessionError>;

    /// Federated sign-in with a token minted by an external provider
    /// out-of-band.
    async fn sign_in_with_token(&self, id_token: &str) -> Result<AuthUser, SessionError>;

    async fn sign_out(&self) -> Result<(), SessionError>;

    async fn current_user(&self) -> Option<AuthUser>;

    /// Watch sign-in-state changes. The handler fires immediately with the
    /// current state, then on every change until `unwatch`.
    async fn watch(&self, handler: AuthStateHandler) -> SubscriptionId;

    async fn unwatch(&self, id: SubscriptionId);
}
