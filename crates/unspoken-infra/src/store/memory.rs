//! In-memory document store.
//!
//! This is the fallback when no hosted backend is configured.
//! Works within a single process only; documents are lost on exit.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use unspoken_core::domain::{
    Entry, EntryId, EntryPatch, NewEntry, NewPublicPost, OwnerId, PostId, PublicPost,
};
use unspoken_core::error::StoreError;
use unspoken_core::ports::{
    EntryStore, FeedHandler, PublicFeed, SnapshotHandler, SubscriptionId,
};

struct EntrySubscriber {
    owner: OwnerId,
    handler: Arc<dyn Fn(Vec<Entry>) + Send + Sync>,
}

/// In-memory entry store with live snapshot fan-out.
#[derive(Default)]
pub struct MemoryEntryStore {
    entries: RwLock<Vec<Entry>>,
    subscribers: RwLock<HashMap<SubscriptionId, EntrySubscriber>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner-scoped snapshot, newest first, the way the live query delivers.
    async fn snapshot(&self, owner: &OwnerId) -> Vec<Entry> {
        let entries = self.entries.read().await;
        let mut list: Vec<Entry> = entries
            .iter()
            .filter(|e| &e.owner == owner)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list
    }

    async fn notify(&self) {
        // Collect handlers first so none run under the lock.
        let targets: Vec<(OwnerId, Arc<dyn Fn(Vec<Entry>) + Send + Sync>)> = {
            let subscribers = self.subscribers.read().await;
            subscribers
                .values()
                .map(|s| (s.owner.clone(), s.handler.clone()))
                .collect()
        };

        for (owner, handler) in targets {
            handler(self.snapshot(&owner).await);
        }
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn create(&self, owner: &OwnerId, draft: NewEntry) -> Result<EntryId, StoreError> {
        let id = EntryId(Uuid::new_v4().to_string());
        let entry = Entry {
            id: id.clone(),
            owner: owner.clone(),
            body: draft.body,
            mood: draft.mood,
            created_at: Some(Utc::now()),
            archived: draft.archived,
            pinned: draft.pinned,
            trashed: draft.trashed,
            trashed_at: None,
        };

        self.entries.write().await.push(entry);
        tracing::debug!(entry_id = %id, "Entry created");

        self.notify().await;
        Ok(id)
    }

    async fn update(&self, id: &EntryId, patch: EntryPatch) -> Result<(), StoreError> {
        {
            let mut entries = self.entries.write().await;
            let entry = entries
                .iter_mut()
                .find(|e| &e.id == id)
                .ok_or(StoreError::NotFound)?;

            if let Some(archived) = patch.archived {
                entry.archived = archived;
            }
            if let Some(pinned) = patch.pinned {
                entry.pinned = pinned;
            }
            if let Some(trashed) = patch.trashed {
                if trashed && !entry.trashed {
                    entry.trashed_at = Some(Utc::now());
                } else if !trashed {
                    entry.trashed_at = None;
                }
                entry.trashed = trashed;
            }
        }

        self.notify().await;
        Ok(())
    }

    async fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        {
            let mut entries = self.entries.write().await;
            let before = entries.len();
            entries.retain(|e| &e.id != id);
            if entries.len() == before {
                return Err(StoreError::NotFound);
            }
        }

        tracing::debug!(entry_id = %id, "Entry deleted");
        self.notify().await;
        Ok(())
    }

    async fn subscribe(
        &self,
        owner: &OwnerId,
        handler: SnapshotHandler,
    ) -> Result<SubscriptionId, StoreError> {
        let id = Uuid::new_v4();
        let handler: Arc<dyn Fn(Vec<Entry>) + Send + Sync> = Arc::from(handler);

        self.subscribers.write().await.insert(
            id,
            EntrySubscriber {
                owner: owner.clone(),
                handler: handler.clone(),
            },
        );
        tracing::debug!(subscription = %id, owner = %owner, "Entry feed opened");

        // Fire immediately with the current state.
        handler(self.snapshot(owner).await);
        Ok(id)
    }

    async fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.write().await.remove(&id);
        tracing::debug!(subscription = %id, "Entry feed closed");
    }
}

/// In-memory public feed.
#[derive(Default)]
pub struct MemoryPublicFeed {
    posts: RwLock<Vec<PublicPost>>,
    subscribers: RwLock<HashMap<SubscriptionId, Arc<dyn Fn(Vec<PublicPost>) + Send + Sync>>>,
}

impl MemoryPublicFeed {
    pub fn new() -> Self {
        Self::default()
    }

    async fn snapshot(&self) -> Vec<PublicPost> {
        let posts = self.posts.read().await;
        let mut list = posts.clone();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list
    }

    async fn notify(&self) {
        let handlers: Vec<Arc<dyn Fn(Vec<PublicPost>) + Send + Sync>> = {
            let subscribers = self.subscribers.read().await;
            subscribers.values().cloned().collect()
        };

        let snapshot = self.snapshot().await;
        for handler in handlers {
            handler(snapshot.clone());
        }
    }
}

#[async_trait]
impl PublicFeed for MemoryPublicFeed {
    async fn publish(&self, draft: NewPublicPost) -> Result<PostId, StoreError> {
        let id = PostId(Uuid::new_v4().to_string());
        let post = PublicPost {
            id: id.clone(),
            body: draft.body,
            mood: draft.mood,
            created_at: Some(Utc::now()),
            owner: draft.owner,
            alias: draft.alias,
            report_count: 0,
        };

        self.posts.write().await.push(post);
        self.notify().await;
        Ok(id)
    }

    async fn report(&self, id: &PostId) -> Result<(), StoreError> {
        {
            let mut posts = self.posts.write().await;
            let post = posts
                .iter_mut()
                .find(|p| &p.id == id)
                .ok_or(StoreError::NotFound)?;
            post.report_count += 1;
        }

        self.notify().await;
        Ok(())
    }

    async fn retract(&self, id: &PostId, owner: &OwnerId) -> Result<(), StoreError> {
        {
            let mut posts = self.posts.write().await;
            let post = posts
                .iter()
                .find(|p| &p.id == id)
                .ok_or(StoreError::NotFound)?;
            if &post.owner != owner {
                return Err(StoreError::Rejected("Not the post's owner".to_string()));
            }
            posts.retain(|p| &p.id != id);
        }

        self.notify().await;
        Ok(())
    }

    async fn subscribe(&self, handler: FeedHandler) -> Result<SubscriptionId, StoreError> {
        let id = Uuid::new_v4();
        let handler: Arc<dyn Fn(Vec<PublicPost>) + Send + Sync> = Arc::from(handler);

        self.subscribers.write().await.insert(id, handler.clone());
        handler(self.snapshot().await);
        Ok(id)
    }

    async fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.write().await.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use unspoken_core::domain::Mood;

    fn collector<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, Box<dyn Fn(T) + Send + Sync>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (
            seen,
            Box::new(move |snapshot| sink.lock().unwrap().push(snapshot)),
        )
    }

    #[tokio::test]
    async fn test_create_pushes_snapshot_to_owner() {
        let store = MemoryEntryStore::new();
        let owner = OwnerId("u1".into());

        let (seen, handler) = collector();
        store.subscribe(&owner, handler).await.unwrap();

        store
            .create(&owner, NewEntry::new("first", Some(Mood::Calm)))
            .await
            .unwrap();

        let snapshots = seen.lock().unwrap();
        // Initial empty snapshot, then one with the created entry.
        assert_eq!(snapshots.len(), 2);
        assert!(snapshots[0].is_empty());
        assert_eq!(snapshots[1].len(), 1);
        assert_eq!(snapshots[1][0].body, "first");
        assert!(snapshots[1][0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_snapshots_are_owner_scoped_and_newest_first() {
        let store = MemoryEntryStore::new();
        let alice = OwnerId("alice".into());
        let bob = OwnerId("bob".into());

        store
            .create(&alice, NewEntry::new("a1", None))
            .await
            .unwrap();
        store.create(&bob, NewEntry::new("b1", None)).await.unwrap();
        store
            .create(&alice, NewEntry::new("a2", None))
            .await
            .unwrap();

        let (seen, handler) = collector();
        store.subscribe(&alice, handler).await.unwrap();

        let snapshots = seen.lock().unwrap();
        let bodies: Vec<&str> = snapshots[0].iter().map(|e| e.body.as_str()).collect();
        assert_eq!(bodies, ["a2", "a1"]);
    }

    #[tokio::test]
    async fn test_trash_patch_stamps_and_restore_clears() {
        let store = MemoryEntryStore::new();
        let owner = OwnerId("u1".into());
        let id = store
            .create(&owner, NewEntry::new("doomed", None))
            .await
            .unwrap();

        store.update(&id, EntryPatch::trash()).await.unwrap();
        let trashed = store.snapshot(&owner).await;
        assert!(trashed[0].trashed);
        assert!(trashed[0].trashed_at.is_some());

        store.update(&id, EntryPatch::restore()).await.unwrap();
        let restored = store.snapshot(&owner).await;
        assert!(!restored[0].trashed);
        assert!(restored[0].trashed_at.is_none());
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_snapshots() {
        let store = MemoryEntryStore::new();
        let owner = OwnerId("u1".into());

        let (seen, handler) = collector();
        let sub = store.subscribe(&owner, handler).await.unwrap();
        store.unsubscribe(sub).await;

        store
            .create(&owner, NewEntry::new("unseen", None))
            .await
            .unwrap();

        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_entry_is_not_found() {
        let store = MemoryEntryStore::new();
        let result = store.delete(&EntryId("ghost".into())).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_feed_report_is_monotonic_and_retract_checks_owner() {
        let feed = MemoryPublicFeed::new();
        let owner = OwnerId("u1".into());
        let id = feed
            .publish(NewPublicPost {
                body: "shared".into(),
                mood: Some(Mood::Happy),
                owner: owner.clone(),
                alias: "NightSky".into(),
            })
            .await
            .unwrap();

        feed.report(&id).await.unwrap();
        feed.report(&id).await.unwrap();
        assert_eq!(feed.snapshot().await[0].report_count, 2);

        let stranger = OwnerId("someone-else".into());
        assert!(matches!(
            feed.retract(&id, &stranger).await,
            Err(StoreError::Rejected(_))
        ));

        feed.retract(&id, &owner).await.unwrap();
        assert!(feed.snapshot().await.is_empty());
    }
}
