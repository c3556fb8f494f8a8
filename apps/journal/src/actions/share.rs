//! Public-feed actions: share, report, retract.

use unspoken_core::domain::{DeviceSettings, Entry, NewPublicPost, PostId};

use crate::error::AppResult;
use crate::state::AppState;

use super::require_user;

/// Share a copy of an entry anonymously under the device's alias.
pub async fn share_entry(
    state: &AppState,
    settings: &DeviceSettings,
    entry: &Entry,
) -> AppResult<PostId> {
    require_user(state).await?;

    let draft = NewPublicPost::from_entry(entry, &settings.alias);
    let id = state.feed.publish(draft).await?;
    tracing::info!(post_id = %id, "Shared to public feed");
    Ok(id)
}

/// Report a post. The counter only ever goes up.
pub async fn report_post(state: &AppState, id: &PostId) -> AppResult<()> {
    state.feed.report(id).await?;
    Ok(())
}

/// Delete one of the signed-in user's own shared posts.
pub async fn retract_post(state: &AppState, id: &PostId) -> AppResult<()> {
    let user = require_user(state).await?;
    state.feed.retract(id, &user.id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unspoken_core::domain::{EntryId, Mood, OwnerId};

    fn entry_for(owner: &OwnerId) -> Entry {
        Entry {
            id: EntryId("e1".into()),
            owner: owner.clone(),
            body: "a shared thought".into(),
            mood: Some(Mood::Calm),
            created_at: None,
            archived: false,
            pinned: false,
            trashed: false,
            trashed_at: None,
        }
    }

    #[tokio::test]
    async fn test_share_uses_device_alias() {
        let state = AppState::for_tests();
        let user = state
            .session
            .sign_up("me@example.com", "secret1")
            .await
            .unwrap();

        let settings = DeviceSettings {
            alias: "NightSky".into(),
            ..DeviceSettings::default()
        };

        share_entry(&state, &settings, &entry_for(&user.id))
            .await
            .unwrap();

        let (tx, mut rx) = tokio::sync::mpsc::channel(4);
        state
            .feed
            .subscribe(Box::new(move |posts| {
                let _ = tx.try_send(posts);
            }))
            .await
            .unwrap();

        let posts = rx.recv().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].alias, "NightSky");
        assert_eq!(posts[0].body, "a shared thought");
        assert_eq!(posts[0].report_count, 0);
    }

    #[tokio::test]
    async fn test_share_requires_sign_in() {
        let state = AppState::for_tests();
        let settings = DeviceSettings::default();
        let entry = entry_for(&OwnerId("nobody".into()));

        let err = share_entry(&state, &settings, &entry).await.unwrap_err();
        assert_eq!(err.status_line(), "Not signed in");
    }
}
