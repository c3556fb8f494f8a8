//! # Unspoken Infrastructure
//!
//! Concrete implementations of the ports defined in `unspoken-core`.
//! Every port has an in-memory adapter that works within a single process,
//! plus an adapter speaking to the hosted platform over HTTP.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All adapters
//! - `minimal` - In-memory and on-disk adapters only
//! - `hosted` - HTTP adapters for the hosted document store and identity
//!   provider

pub mod connectivity;
pub mod session;
pub mod settings;
pub mod store;

#[cfg(feature = "hosted")]
pub mod hosted;

// Re-exports - In-Memory / On-Disk
pub use connectivity::AlwaysOnline;
pub use session::MemorySessionProvider;
pub use settings::{FileSettingsStore, MemorySettingsStore};
pub use store::{MemoryEntryStore, MemoryPublicFeed};

// Re-exports - Hosted
#[cfg(feature = "hosted")]
pub use connectivity::HostedConnectivity;
#[cfg(feature = "hosted")]
pub use hosted::HostedConfig;
#[cfg(feature = "hosted")]
pub use session::HostedSessionProvider;
#[cfg(feature = "hosted")]
pub use store::{HostedEntryStore, HostedPublicFeed};
