//! In-memory identity provider.
//!
//! Single-process stand-in used when no hosted backend is configured.
//! It mimics the provider-side checks (well-formed email, minimum password
//! length, duplicate accounts) so the surfaced messages look the same.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use unspoken_core::domain::OwnerId;
use unspoken_core::error::SessionError;
use unspoken_core::ports::{AuthStateHandler, AuthUser, SessionProvider, SubscriptionId};

struct Account {
    password: String,
    user: AuthUser,
}

/// In-memory session provider.
#[derive(Default)]
pub struct MemorySessionProvider {
    accounts: RwLock<HashMap<String, Account>>,
    current: RwLock<Option<AuthUser>>,
    watchers: RwLock<HashMap<SubscriptionId, Arc<dyn Fn(Option<AuthUser>) + Send + Sync>>>,
}

impl MemorySessionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_credentials(email: &str, password: &str) -> Result<(), SessionError> {
        if email.is_empty() || !email.contains('@') {
            return Err(SessionError::Provider("Invalid email address".to_string()));
        }
        if password.len() < 6 {
            return Err(SessionError::Provider(
                "Password must be at least 6 characters".to_string(),
            ));
        }
        Ok(())
    }

    async fn set_current(&self, user: Option<AuthUser>) {
        *self.current.write().await = user.clone();

        let handlers: Vec<Arc<dyn Fn(Option<AuthUser>) + Send + Sync>> = {
            let watchers = self.watchers.read().await;
            watchers.values().cloned().collect()
        };
        for handler in handlers {
            handler(user.clone());
        }
    }
}

#[async_trait]
impl SessionProvider for MemorySessionProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, SessionError> {
        let user = {
            let accounts = self.accounts.read().await;
            let account = accounts
                .get(email)
                .filter(|a| a.password == password)
                .ok_or_else(|| SessionError::Provider("Invalid credentials".to_string()))?;
            account.user.clone()
        };

        self.set_current(Some(user.clone())).await;
        tracing::debug!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, SessionError> {
        Self::check_credentials(email, password)?;

        let user = {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(email) {
                return Err(SessionError::Provider(
                    "Email already registered".to_string(),
                ));
            }

            let user = AuthUser {
                id: OwnerId(Uuid::new_v4().to_string()),
                email: Some(email.to_string()),
            };
            accounts.insert(
                email.to_string(),
                Account {
                    password: password.to_string(),
                    user: user.clone(),
                },
            );
            user
        };

        self.set_current(Some(user.clone())).await;
        tracing::debug!(user_id = %user.id, "Account created");
        Ok(user)
    }

    async fn sign_in_with_token(&self, id_token: &str) -> Result<AuthUser, SessionError> {
        if id_token.trim().is_empty() {
            return Err(SessionError::Provider("Invalid token".to_string()));
        }

        // Any non-empty token maps to a federated user.
        let user = AuthUser {
            id: OwnerId(format!("federated-{}", Uuid::new_v4())),
            email: None,
        };
        self.set_current(Some(user.clone())).await;
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        self.set_current(None).await;
        tracing::debug!("Signed out");
        Ok(())
    }

    async fn current_user(&self) -> Option<AuthUser> {
        self.current.read().await.clone()
    }

    async fn watch(&self, handler: AuthStateHandler) -> SubscriptionId {
        let id = Uuid::new_v4();
        let handler: Arc<dyn Fn(Option<AuthUser>) + Send + Sync> = Arc::from(handler);

        self.watchers.write().await.insert(id, handler.clone());
        handler(self.current.read().await.clone());
        id
    }

    async fn unwatch(&self, id: SubscriptionId) {
        self.watchers.write().await.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let provider = MemorySessionProvider::new();

        let created = provider
            .sign_up("me@example.com", "secret1")
            .await
            .unwrap();
        provider.sign_out().await.unwrap();

        let signed_in = provider
            .sign_in("me@example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(signed_in.id, created.id);
        assert_eq!(provider.current_user().await, Some(signed_in));
    }

    #[tokio::test]
    async fn test_wrong_password_surfaces_provider_message() {
        let provider = MemorySessionProvider::new();
        provider
            .sign_up("me@example.com", "secret1")
            .await
            .unwrap();

        let err = provider
            .sign_in("me@example.com", "wrong-pass")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_duplicate_sign_up_rejected() {
        let provider = MemorySessionProvider::new();
        provider
            .sign_up("me@example.com", "secret1")
            .await
            .unwrap();

        let err = provider
            .sign_up("me@example.com", "other-pass")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[tokio::test]
    async fn test_watch_fires_immediately_and_on_changes() {
        let provider = MemorySessionProvider::new();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        provider
            .watch(Box::new(move |user| sink.lock().unwrap().push(user)))
            .await;

        provider
            .sign_up("me@example.com", "secret1")
            .await
            .unwrap();
        provider.sign_out().await.unwrap();

        let states = seen.lock().unwrap();
        assert_eq!(states.len(), 3);
        assert!(states[0].is_none());
        assert!(states[1].is_some());
        assert!(states[2].is_none());
    }
}
