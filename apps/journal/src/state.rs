//! Application state - the port implementations everything else talks to.

use std::sync::Arc;

use unspoken_core::ports::{Connectivity, EntryStore, PublicFeed, SessionProvider, SettingsStore};
use unspoken_infra::{
    AlwaysOnline, FileSettingsStore, MemoryEntryStore, MemoryPublicFeed, MemorySessionProvider,
    MemorySettingsStore,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<dyn SessionProvider>,
    pub entries: Arc<dyn EntryStore>,
    pub feed: Arc<dyn PublicFeed>,
    pub settings: Arc<dyn SettingsStore>,
    pub connectivity: Arc<dyn Connectivity>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let settings: Arc<dyn SettingsStore> =
            match FileSettingsStore::open(&config.settings_path).await {
                Ok(store) => Arc::new(store),
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        "Failed to open settings file. Using in-memory settings for this session."
                    );
                    Arc::new(MemorySettingsStore::new())
                }
            };

        #[cfg(feature = "hosted")]
        if let Some(hosted) = config.hosted.clone() {
            use unspoken_infra::{
                HostedConnectivity, HostedEntryStore, HostedPublicFeed, HostedSessionProvider,
            };

            tracing::info!(backend = %hosted.base_url, "Using hosted platform");
            return Self {
                session: Arc::new(HostedSessionProvider::new(hosted.clone())),
                entries: Arc::new(HostedEntryStore::new(hosted.clone())),
                feed: Arc::new(HostedPublicFeed::new(hosted.clone())),
                settings,
                connectivity: Arc::new(HostedConnectivity::new(hosted)),
            };
        }

        tracing::warn!(
            "UNSPOKEN_BACKEND_URL not set. Running without a backend (in-memory mode)."
        );
        Self::in_memory(settings)
    }

    fn in_memory(settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            session: Arc::new(MemorySessionProvider::new()),
            entries: Arc::new(MemoryEntryStore::new()),
            feed: Arc::new(MemoryPublicFeed::new()),
            settings,
            connectivity: Arc::new(AlwaysOnline),
        }
    }

    /// Fully in-memory state, used by tests.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::in_memory(Arc::new(MemorySettingsStore::new()))
    }
}
