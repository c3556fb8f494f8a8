//! Ports - trait definitions for the external platform boundaries.
//! These are the "interfaces" that infrastructure must implement.

mod connectivity;
mod session;
mod settings;
mod store;

pub use connectivity::Connectivity;
pub use session::{AuthStateHandler, AuthUser, SessionProvider};
pub use settings::SettingsStore;
pub use store::{
    EntryStore, FeedHandler, PUBLIC_FEED_LIMIT, PublicFeed, SnapshotHandler, SubscriptionId,
};
