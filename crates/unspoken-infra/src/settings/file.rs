//! On-disk settings store: one JSON object per device.
//!
//! The file is read once when the store opens; every set rewrites it in
//! full. There is no schema or versioning - unknown keys pass through
//! untouched, matching the port contract.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use unspoken_core::error::SettingsError;
use unspoken_core::ports::SettingsStore;

pub struct FileSettingsStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileSettingsStore {
    /// Open the store, loading whatever the file currently holds. A missing
    /// file is an empty store; an unreadable one is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();

        let values = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| SettingsError::Read(format!("{}: {e}", path.display())))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(SettingsError::Read(format!("{}: {err}", path.display())));
            }
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    async fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), SettingsError> {
        let raw = serde_json::to_string_pretty(values)
            .map_err(|e| SettingsError::Write(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SettingsError::Write(format!("{}: {e}", parent.display())))?;
        }
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| SettingsError::Write(format!("{}: {e}", self.path.display())))
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        self.flush(&values).await
    }

    async fn remove(&self, key: &str) -> Result<(), SettingsError> {
        let mut values = self.values.write().await;
        if values.remove(key).is_some() {
            self.flush(&values).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("unspoken-settings-{}.json", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let path = scratch_path();

        {
            let store = FileSettingsStore::open(&path).await.unwrap();
            store.set("streak", "7").await.unwrap();
            store.set("theme", "light").await.unwrap();
        }

        let reopened = FileSettingsStore::open(&path).await.unwrap();
        assert_eq!(reopened.get("streak").await, Some("7".to_string()));
        assert_eq!(reopened.get("theme").await, Some("light".to_string()));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let path = scratch_path();
        let store = FileSettingsStore::open(&path).await.unwrap();
        assert_eq!(store.get("anything").await, None);
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let path = scratch_path();

        let store = FileSettingsStore::open(&path).await.unwrap();
        store.set("pin", "1234").await.unwrap();
        store.remove("pin").await.unwrap();

        let reopened = FileSettingsStore::open(&path).await.unwrap();
        assert_eq!(reopened.get("pin").await, None);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
