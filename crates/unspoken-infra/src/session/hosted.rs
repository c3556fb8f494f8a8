//! Hosted identity-provider adapter.
//!
//! Credentials pass straight through to the provider; its error messages are
//! carried back verbatim. No retry policy - a failed call is surfaced once.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::RwLock;
use uuid::Uuid;

use unspoken_core::domain::OwnerId;
use unspoken_core::error::SessionError;
use unspoken_core::ports::{AuthStateHandler, AuthUser, SessionProvider, SubscriptionId};
use unspoken_shared::ApiResponse;
use unspoken_shared::dto::{CredentialsRequest, SessionResponse, TokenSignInRequest};

use crate::hosted::{self, HostedConfig};

fn transport_error(err: reqwest::Error) -> SessionError {
    SessionError::Connection(err.to_string())
}

/// Session provider backed by the hosted identity API.
pub struct HostedSessionProvider {
    config: HostedConfig,
    client: Client,
    current: RwLock<Option<AuthUser>>,
    watchers: RwLock<HashMap<SubscriptionId, Arc<dyn Fn(Option<AuthUser>) + Send + Sync>>>,
}

impl HostedSessionProvider {
    pub fn new(config: HostedConfig) -> Self {
        Self {
            config,
            client: hosted::client(),
            current: RwLock::new(None),
            watchers: RwLock::new(HashMap::new()),
        }
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

    async fn call_session_endpoint<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<AuthUser, SessionError> {
        let request = self
            .config
            .apply_key(self.client.post(self.config.endpoint(path)))
            .json(body);

        let response = request.send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            // The provider's own message, verbatim.
            return Err(SessionError::Provider(
                hosted::failure_message(response).await,
            ));
        }

        let envelope: ApiResponse<SessionResponse> =
            response.json().await.map_err(transport_error)?;
        let session = envelope
            .into_data()
            .ok_or_else(|| SessionError::Provider("Empty session response".to_string()))?;

        let user = AuthUser {
            id: OwnerId(session.uid),
            email: session.email,
        };
        self.set_current(Some(user.clone())).await;
        Ok(user)
    }
}

#[async_trait]
impl SessionProvider for HostedSessionProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, SessionError> {
        self.call_session_endpoint(
            "/v1/auth/login",
            &CredentialsRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, SessionError> {
        self.call_session_endpoint(
            "/v1/auth/register",
            &CredentialsRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    async fn sign_in_with_token(&self, id_token: &str) -> Result<AuthUser, SessionError> {
        self.call_session_endpoint(
            "/v1/auth/token",
            &TokenSignInRequest {
                id_token: id_token.to_string(),
            },
        )
        .await
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        let request = self
            .config
            .apply_key(self.client.post(self.config.endpoint("/v1/auth/logout")));

        // Best effort on the wire; local state is cleared regardless so the
        // UI always returns to the signed-out screen.
        if let Err(err) = request.send().await {
            tracing::warn!(error = %err, "Sign-out call failed");
        }
        self.set_current(None).await;
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
