//! Document-store adapters.

mod memory;

#[cfg(feature = "hosted")]
mod hosted;

pub use memory::{MemoryEntryStore, MemoryPublicFeed};

#[cfg(feature = "hosted")]
pub use hosted::{HostedEntryStore, HostedPublicFeed};
