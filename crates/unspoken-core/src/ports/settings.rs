//! Device-local settings port - a plain string key-value store with no
//! schema versioning, scoped to one device.

use async_trait::async_trait;

use crate::error::SettingsError;

#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;

    async fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;

    async fn remove(&self, key: &str) -> Result<(), SettingsError>;
}
