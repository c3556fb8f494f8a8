//! Backup actions: export the entry set to a file, import a JSON backup.

use std::path::Path;

use unspoken_core::domain::Entry;
use unspoken_shared::backup;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::require_user;

/// Write the entry set to `path` as a JSON array. Returns the record count.
pub async fn export_json(entries: &[Entry], path: &Path) -> AppResult<usize> {
    let rendered = backup::export_json(entries);
    tokio::fs::write(path, rendered)
        .await
        .map_err(|e| AppError::File(format!("{}: {e}", path.display())))?;

    tracing::info!(count = entries.len(), path = %path.display(), "JSON backup written");
    Ok(entries.len())
}

/// Write the entry set to `path` as plain text, oldest entry first.
pub async fn export_text(entries: &[Entry], path: &Path) -> AppResult<usize> {
    let rendered = backup::export_text(entries);
    tokio::fs::write(path, rendered)
        .await
        .map_err(|e| AppError::File(format!("{}: {e}", path.display())))?;

    tracing::info!(count = entries.len(), path = %path.display(), "Text export written");
    Ok(entries.len())
}

/// Import a JSON backup: one new document per accepted record, fresh ids and
/// timestamps. Returns how many records were created; skipped records are
/// not reported individually.
pub async fn import_json(state: &AppState, path: &Path) -> AppResult<usize> {
    let user = require_user(state).await?;

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::File(format!("{}: {e}", path.display())))?;
    let drafts = backup::parse_import(&raw)?;

    let mut created = 0;
    for draft in drafts {
        state.entries.create(&user.id, draft).await?;
        created += 1;
    }

    tracing::info!(count = created, "Import finished");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use unspoken_core::domain::Mood;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("unspoken-{name}-{}.json", std::process::id()))
    }

    async fn latest_snapshot(state: &AppState) -> Vec<Entry> {
        let user = state.session.current_user().await.unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        state
            .entries
            .subscribe(
                &user.id,
                Box::new(move |snapshot| {
                    *sink.lock().unwrap() = snapshot;
                }),
            )
            .await
            .unwrap();
        let snapshot = seen.lock().unwrap().clone();
        snapshot
    }

    #[tokio::test]
    async fn test_import_creates_documents_with_coerced_moods() {
        let state = AppState::for_tests();
        state
            .session
            .sign_up("me@example.com", "secret1")
            .await
            .unwrap();

        let path = scratch_path("import");
        tokio::fs::write(&path, r#"[{"text":"ok","mood":"Bogus"}]"#)
            .await
            .unwrap();

        let count = import_json(&state, &path).await.unwrap();
        assert_eq!(count, 1);

        let entries = latest_snapshot(&state).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, Some(Mood::Calm));
        // Fresh server-assigned metadata, not whatever the file carried.
        assert!(entries[0].created_at.is_some());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_import_requires_sign_in() {
        let state = AppState::for_tests();
        let err = import_json(&state, Path::new("/nonexistent.json"))
            .await
            .unwrap_err();
        assert_eq!(err.status_line(), "Not signed in");
    }

    #[tokio::test]
    async fn test_import_rejects_non_array_file() {
        let state = AppState::for_tests();
        state
            .session
            .sign_up("me@example.com", "secret1")
            .await
            .unwrap();

        let path = scratch_path("notarray");
        tokio::fs::write(&path, r#"{"text":"ok"}"#).await.unwrap();

        let err = import_json(&state, &path).await.unwrap_err();
        assert_eq!(err.status_line(), "Invalid file (expected an array)");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_export_then_import_round_trip() {
        let state = AppState::for_tests();
        let user = state
            .session
            .sign_up("me@example.com", "secret1")
            .await
            .unwrap();

        state
            .entries
            .create(
                &user.id,
                unspoken_core::domain::NewEntry::new("kept thought", Some(Mood::Happy)),
            )
            .await
            .unwrap();

        let entries = latest_snapshot(&state).await;
        let path = scratch_path("roundtrip");
        export_json(&entries, &path).await.unwrap();

        let imported = import_json(&state, &path).await.unwrap();
        assert_eq!(imported, 1);
        assert_eq!(latest_snapshot(&state).await.len(), 2);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
