//! Reachability adapters behind the online/offline indicator.

use async_trait::async_trait;

use unspoken_core::ports::Connectivity;

/// Connectivity stub for in-memory mode - there is nothing to reach.
pub struct AlwaysOnline;

#[async_trait]
impl Connectivity for AlwaysOnline {
    async fn probe(&self) -> bool {
        true
    }
}

#[cfg(feature = "hosted")]
pub use hosted_probe::HostedConnectivity;

#[cfg(feature = "hosted")]
mod hosted_probe {
    use super::*;
    use crate::hosted::{self, HostedConfig};

    /// Health-checks the hosted platform.
    pub struct HostedConnectivity {
        config: HostedConfig,
        client: reqwest::Client,
    }

    impl HostedConnectivity {
        pub fn new(config: HostedConfig) -> Self {
            Self {
                config,
                client: hosted::client(),
            }
        }
    }

    #[async_trait]
    impl Connectivity for HostedConnectivity {
        async fn probe(&self) -> bool {
            let request = self
                .config
                .apply_key(self.client.get(self.config.endpoint("/health")));

            match request.send().await {
                Ok(response) => response.status().is_success(),
                Err(err) => {
                    tracing::debug!(error = %err, "Health probe failed");
                    false
                }
            }
        }
    }
}
