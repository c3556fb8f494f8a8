//! Entry lifecycle actions: save, archive, pin, trash, restore, purge,
//! release.

use chrono::NaiveDate;

use unspoken_core::DomainError;
use unspoken_core::domain::{
    DeviceSettings, Entry, EntryId, EntryPatch, MAX_BODY_CHARS, Mood, NewEntry,
};
use unspoken_core::view::{StreakUpdate, record_write, reflection};

use crate::error::AppResult;
use crate::state::AppState;

use super::require_user;

/// What a successful save produced, for the status line.
pub struct SaveOutcome {
    pub id: EntryId,
    pub streak: StreakUpdate,
    pub reflection: &'static str,
}

/// Validate and save a new entry, then advance the streak ratchet.
///
/// An empty body is rejected before any network call. The body is trimmed
/// and capped at the composer limit, the way the input field caps typing.
pub async fn save_entry(
    state: &AppState,
    settings: &mut DeviceSettings,
    body: &str,
    mood: Mood,
    today: NaiveDate,
) -> AppResult<SaveOutcome> {
    let user = require_user(state).await?;

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("Write something first".to_string()).into());
    }
    let capped: String = trimmed.chars().take(MAX_BODY_CHARS).collect();

    let draft = NewEntry::new(capped, Some(mood));
    let id = state.entries.create(&user.id, draft).await?;

    // The streak reacts to the act of saving "now", never to entry
    // timestamps.
    let streak = record_write(settings, today);
    if streak.changed {
        if let Err(err) = settings.store_streak(&*state.settings).await {
            tracing::error!(error = %err, "Failed to persist streak");
        }
    }

    Ok(SaveOutcome {
        id,
        streak,
        reflection: reflection(mood, today),
    })
}

/// Flip the archived flag. Returns the new value.
pub async fn toggle_archived(state: &AppState, entry: &Entry) -> AppResult<bool> {
    let next = !entry.archived;
    state
        .entries
        .update(&entry.id, EntryPatch::archived(next))
        .await?;
    Ok(next)
}

/// Flip the pinned flag. Returns the new value.
pub async fn toggle_pinned(state: &AppState, entry: &Entry) -> AppResult<bool> {
    let next = !entry.pinned;
    state
        .entries
        .update(&entry.id, EntryPatch::pinned(next))
        .await?;
    Ok(next)
}

/// Soft delete: the entry stays queryable and shows up in the trash view.
pub async fn move_to_trash(state: &AppState, id: &EntryId) -> AppResult<()> {
    state.entries.update(id, EntryPatch::trash()).await?;
    Ok(())
}

pub async fn restore_from_trash(state: &AppState, id: &EntryId) -> AppResult<()> {
    state.entries.update(id, EntryPatch::restore()).await?;
    Ok(())
}

/// Hard delete from the trash view. Cannot be undone.
pub async fn delete_forever(state: &AppState, id: &EntryId) -> AppResult<()> {
    state.entries.delete(id).await?;
    Ok(())
}

/// Release: permanently let an entry go, straight from the normal view.
/// Same irreversible delete underneath, different ritual on top.
pub async fn release(state: &AppState, entry: &Entry) -> AppResult<String> {
    state.entries.delete(&entry.id).await?;
    tracing::info!(entry_id = %entry.id, "Entry released");
    Ok(entry.body.clone())
}

/// Clipboard-style rendering of one entry.
pub fn copy_text(entry: &Entry) -> String {
    let mood = entry.mood.map(|m| m.name()).unwrap_or_default();
    let time = entry
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    format!("{}\n\nMood: {}\nTime: {}", entry.body, mood, time)
}
