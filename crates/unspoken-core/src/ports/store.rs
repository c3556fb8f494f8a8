//! Document-store ports - the hosted platform's query/write surface.
//!
//! The store owns durability, indexing, and conflict resolution. This side
//! only issues CRUD calls and listens to live snapshots: each snapshot is the
//! full result set for the query and wholesale-replaces local state. No
//! optimistic local mutation happens before the store acknowledges a write.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    Entry, EntryId, EntryPatch, NewEntry, NewPublicPost, OwnerId, PostId, PublicPost,
};
use crate::error::StoreError;

/// Token returned by `subscribe`, used to stop the feed again.
pub type SubscriptionId = Uuid;

/// Handler for entry snapshots. Invoked synchronously with the full
/// owner-scoped entry set, newest first.
pub type SnapshotHandler = Box<dyn Fn(Vec<Entry>) + Send + Sync>;

/// Handler for public-feed snapshots, newest first.
pub type FeedHandler = Box<dyn Fn(Vec<PublicPost>) + Send + Sync>;

/// The public feed shows at most this many recent posts; trimming is done
/// client-side on each snapshot.
pub const PUBLIC_FEED_LIMIT: usize = 30;

/// Live CRUD access to the signed-in owner's journal entries.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Create a document; the store assigns id and created-at.
    async fn create(&self, owner: &OwnerId, draft: NewEntry) -> Result<EntryId, StoreError>;

    /// Partial field merge.
    async fn update(&self, id: &EntryId, patch: EntryPatch) -> Result<(), StoreError>;

    /// Hard delete. Irreversible - distinct from setting the trashed flag.
    async fn delete(&self, id: &EntryId) -> Result<(), StoreError>;

    /// Open a live query scoped to the owner, ordered by creation time
    /// descending. The handler fires once with the current state and again on
    /// every change until `unsubscribe`.
    async fn subscribe(
        &self,
        owner: &OwnerId,
        handler: SnapshotHandler,
    ) -> Result<SubscriptionId, StoreError>;

    async fn unsubscribe(&self, id: SubscriptionId);
}

/// The unscoped, anonymous public feed.
#[async_trait]
pub trait PublicFeed: Send + Sync {
    async fn publish(&self, draft: NewPublicPost) -> Result<PostId, StoreError>;

    /// Monotonically bump the post's report counter.
    async fn report(&self, id: &PostId) -> Result<(), StoreError>;

    /// Delete one of the caller's own posts.
    async fn retract(&self, id: &PostId, owner: &OwnerId) -> Result<(), StoreError>;

    async fn subscribe(&self, handler: FeedHandler) -> Result<SubscriptionId, StoreError>;

    async fn unsubscribe(&self, id: SubscriptionId);
}
