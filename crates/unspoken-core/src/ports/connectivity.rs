//! Reachability probe backing the online/offline indicator.

use async_trait::async_trait;

#[async_trait]
pub trait Connectivity: Send + Sync {
    /// Whether the backing platform currently answers.
    async fn probe(&self) -> bool;
}
