//! Hosted document-store adapters.
//!
//! CRUD goes over plain JSON requests; the live queries are long-lived
//! NDJSON streams where every line is a full replacement snapshot. A dropped
//! stream halts updates until the platform end reconnects - per the error
//! model there is no client-side retry.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

use unspoken_core::domain::{
    Entry, EntryId, EntryPatch, NewEntry, NewPublicPost, OwnerId, PostId, PublicPost,
};
use unspoken_core::error::StoreError;
use unspoken_core::ports::{
    EntryStore, FeedHandler, PublicFeed, SnapshotHandler, SubscriptionId,
};
use unspoken_shared::ApiResponse;
use unspoken_shared::dto::{
    CreateEntryRequest, EntryDoc, PublicPostDoc, PublishRequest, SnapshotFrame,
    UpdateEntryRequest,
};

use crate::hosted::{self, HostedConfig};

fn transport_error(err: reqwest::Error) -> StoreError {
    if err.is_connect() || err.is_timeout() {
        StoreError::Connection(err.to_string())
    } else {
        StoreError::Query(err.to_string())
    }
}

/// Entry store backed by the hosted document API.
pub struct HostedEntryStore {
    config: HostedConfig,
    client: Client,
    streams: RwLock<HashMap<SubscriptionId, JoinHandle<()>>>,
}

impl HostedEntryStore {
    pub fn new(config: HostedConfig) -> Self {
        Self {
            config,
            client: hosted::client(),
            streams: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl EntryStore for HostedEntryStore {
    async fn create(&self, owner: &OwnerId, draft: NewEntry) -> Result<EntryId, StoreError> {
        let request = self
            .config
            .apply_key(self.client.post(self.config.endpoint("/v1/entries")))
            .json(&CreateEntryRequest::new(owner, &draft));

        let response = request.send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(StoreError::Rejected(hosted::failure_message(response).await));
        }

        let envelope: ApiResponse<EntryDoc> =
            response.json().await.map_err(transport_error)?;
        let doc = envelope
            .into_data()
            .ok_or_else(|| StoreError::Query("Empty create response".to_string()))?;

        tracing::debug!(entry_id = %doc.id, "Entry created");
        Ok(EntryId(doc.id))
    }

    async fn update(&self, id: &EntryId, patch: EntryPatch) -> Result<(), StoreError> {
        let request = self
            .config
            .apply_key(
                self.client
                    .patch(self.config.endpoint(&format!("/v1/entries/{id}"))),
            )
            .json(&UpdateEntryRequest::from(&patch));

        let response = request.send().await.map_err(transport_error)?;
        match response.status().as_u16() {
            404 => Err(StoreError::NotFound),
            code if (200..300).contains(&code) => Ok(()),
            _ => Err(StoreError::Rejected(hosted::failure_message(response).await)),
        }
    }

    async fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        let request = self.config.apply_key(
            self.client
                .delete(self.config.endpoint(&format!("/v1/entries/{id}"))),
        );

        let response = request.send().await.map_err(transport_error)?;
        match response.status().as_u16() {
            404 => Err(StoreError::NotFound),
            code if (200..300).contains(&code) => {
                tracing::debug!(entry_id = %id, "Entry deleted");
                Ok(())
            }
            _ => Err(StoreError::Rejected(hosted::failure_message(response).await)),
        }
    }

    async fn subscribe(
        &self,
        owner: &OwnerId,
        handler: SnapshotHandler,
    ) -> Result<SubscriptionId, StoreError> {
        let id = Uuid::new_v4();
        let url = self
            .config
            .endpoint(&format!("/v1/entries/stream?uid={owner}"));
        let request = self.config.apply_key(self.client.get(url));

        let response = request.send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(StoreError::Rejected(hosted::failure_message(response).await));
        }

        let task = tokio::spawn(async move {
            tracing::info!(subscription = %id, "Entry stream opened");

            let mut stream = response.bytes_stream();
            let mut buffer = Vec::new();
            while let Some(chunk) = stream.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(err) => {
                        tracing::warn!(subscription = %id, error = %err, "Entry stream dropped");
                        break;
                    }
                };
                buffer.extend_from_slice(&chunk);

                while let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
                    let line: Vec<u8> = buffer.drain(..=pos).collect();
                    if line.iter().all(u8::is_ascii_whitespace) {
                        continue;
                    }
                    match serde_json::from_slice::<SnapshotFrame<EntryDoc>>(&line) {
                        Ok(frame) => {
                            let entries: Vec<Entry> =
                                frame.docs.into_iter().map(Entry::from).collect();
                            handler(entries);
                        }
                        Err(err) => {
                            tracing::warn!(subscription = %id, error = %err, "Bad snapshot frame")
                        }
                    }
                }
            }

            tracing::info!(subscription = %id, "Entry stream ended");
        });

        self.streams.write().await.insert(id, task);
        Ok(id)
    }

    async fn unsubscribe(&self, id: SubscriptionId) {
        if let Some(task) = self.streams.write().await.remove(&id) {
            task.abort();
            tracing::debug!(subscription = %id, "Entry stream closed");
        }
    }
}

/// Public feed backed by the hosted document API.
pub struct HostedPublicFeed {
    config: HostedConfig,
    client: Client,
    streams: RwLock<HashMap<SubscriptionId, JoinHandle<()>>>,
}

impl HostedPublicFeed {
    pub fn new(config: HostedConfig) -> Self {
        Self {
            config,
            client: hosted::client(),
            streams: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl PublicFeed for HostedPublicFeed {
    async fn publish(&self, draft: NewPublicPost) -> Result<PostId, StoreError> {
        let request = self
            .config
            .apply_key(self.client.post(self.config.endpoint("/v1/public")))
            .json(&PublishRequest::new(&draft));

        let response = request.send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(StoreError::Rejected(hosted::failure_message(response).await));
        }

        let envelope: ApiResponse<PublicPostDoc> =
            response.json().await.map_err(transport_error)?;
        let doc = envelope
            .into_data()
            .ok_or_else(|| StoreError::Query("Empty publish response".to_string()))?;
        Ok(PostId(doc.id))
    }

    async fn report(&self, id: &PostId) -> Result<(), StoreError> {
        let request = self.config.apply_key(
            self.client
                .post(self.config.endpoint(&format!("/v1/public/{id}/report"))),
        );

        let response = request.send().await.map_err(transport_error)?;
        match response.status().as_u16() {
            404 => Err(StoreError::NotFound),
            code if (200..300).contains(&code) => Ok(()),
            _ => Err(StoreError::Rejected(hosted::failure_message(response).await)),
        }
    }

    async fn retract(&self, id: &PostId, owner: &OwnerId) -> Result<(), StoreError> {
        let request = self.config.apply_key(
            self.client
                .delete(self.config.endpoint(&format!("/v1/public/{id}")))
                .query(&[("uid", owner.as_str())]),
        );

        let response = request.send().await.map_err(transport_error)?;
        match response.status().as_u16() {
            404 => Err(StoreError::NotFound),
            code if (200..300).contains(&code) => Ok(()),
            _ => Err(StoreError::Rejected(hosted::failure_message(response).await)),
        }
    }

    async fn subscribe(&self, handler: FeedHandler) -> Result<SubscriptionId, StoreError> {
        let id = Uuid::new_v4();
        let request = self
            .config
            .apply_key(self.client.get(self.config.endpoint("/v1/public/stream")));

        let response = request.send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(StoreError::Rejected(hosted::failure_message(response).await));
        }

        let task = tokio::spawn(async move {
            tracing::info!(subscription = %id, "Public stream opened");

            let mut stream = response.bytes_stream();
            let mut buffer = Vec::new();
            while let Some(chunk) = stream.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(err) => {
                        tracing::warn!(subscription = %id, error = %err, "Public stream dropped");
                        break;
                    }
                };
                buffer.extend_from_slice(&chunk);

                while let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
                    let line: Vec<u8> = buffer.drain(..=pos).collect();
                    if line.iter().all(u8::is_ascii_whitespace) {
                        continue;
                    }
                    match serde_json::from_slice::<SnapshotFrame<PublicPostDoc>>(&line) {
                        Ok(frame) => {
                            let posts: Vec<PublicPost> =
                                frame.docs.into_iter().map(PublicPost::from).collect();
                            handler(posts);
                        }
                        Err(err) => {
                            tracing::warn!(subscription = %id, error = %err, "Bad snapshot frame")
                        }
                    }
                }
            }

            tracing::info!(subscription = %id, "Public stream ended");
        });

        self.streams.write().await.insert(id, task);
        Ok(id)
    }

    async fn unsubscribe(&self, id: SubscriptionId) {
        if let Some(task) = self.streams.write().await.remove(&id) {
            task.abort();
        }
    }
}
