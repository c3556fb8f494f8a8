//! Local backup: export the entry set to JSON or plain text, and import a
//! previously exported JSON array.
//!
//! Import deliberately does not restore identifiers or timestamps - every
//! accepted record becomes a fresh document and the store assigns both.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use unspoken_core::domain::{Entry, MAX_BODY_CHARS, Mood, NewEntry};

/// At most this many records are read from an import file.
pub const IMPORT_MAX_RECORDS: usize = 200;

/// Mood written when an imported record carries an unrecognized one.
pub const IMPORT_FALLBACK_MOOD: Mood = Mood::Calm;

/// One exported entry. Field names match what the original backups used, so
/// old files keep importing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub trashed: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub uid: String,
}

impl From<&Entry> for BackupRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.0.clone(),
            text: entry.body.clone(),
            mood: entry.mood.map(|m| m.name().to_string()).unwrap_or_default(),
            archived: entry.archived,
            pinned: entry.pinned,
            trashed: entry.trashed,
            created_at: entry
                .created_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            uid: entry.owner.0.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Invalid file (expected an array)")]
    NotAnArray,

    #[error("Import failed (bad JSON?): {0}")]
    Malformed(String),
}

/// Render the entry set as a pretty JSON array.
pub fn export_json(entries: &[Entry]) -> String {
    let records: Vec<BackupRecord> = entries.iter().map(BackupRecord::from).collect();
    // A vec of plain records cannot fail to serialize.
    serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
}

/// Render the entry set as a line-oriented text file, oldest first.
pub fn export_text(entries: &[Entry]) -> String {
    let mut blocks: Vec<String> = entries
        .iter()
        .rev()
        .map(|entry| {
            let time = entry
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            let mood = entry
                .mood
                .map(|m| format!("{} {}", m.glyph(), m.name()))
                .unwrap_or_default();
            format!("— {time}\n{mood}\n{}\n", entry.body)
        })
        .collect();
    blocks.push(String::new());
    blocks.join("\n")
}

/// Parse an import file into creation drafts.
///
/// Accepts at most the first [`IMPORT_MAX_RECORDS`] elements. Individual
/// malformed elements and blank bodies are skipped silently; unrecognized
/// moods fall back to [`IMPORT_FALLBACK_MOOD`]; bodies are truncated to
/// [`MAX_BODY_CHARS`] characters. Flags survive, ids and timestamps do not.
pub fn parse_import(json: &str) -> Result<Vec<NewEntry>, BackupError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| BackupError::Malformed(e.to_string()))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => return Err(BackupError::NotAnArray),
    };

    let drafts = items
        .into_iter()
        .take(IMPORT_MAX_RECORDS)
        .filter_map(|item| serde_json::from_value::<BackupRecord>(item).ok())
        .filter_map(|record| {
            let body = record.text.trim();
            if body.is_empty() {
                return None;
            }
            let mood = Mood::from_name(&record.mood).unwrap_or(IMPORT_FALLBACK_MOOD);
            Some(NewEntry {
                body: body.chars().take(MAX_BODY_CHARS).collect(),
                mood: Some(mood),
                archived: record.archived,
                pinned: record.pinned,
                trashed: record.trashed,
            })
        })
        .collect();

    Ok(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use unspoken_core::domain::{EntryId, OwnerId};

    fn entry(id: &str, body: &str, mood: Option<Mood>) -> Entry {
        Entry {
            id: EntryId(id.into()),
            owner: OwnerId("u1".into()),
            body: body.into(),
            mood,
            created_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()),
            archived: false,
            pinned: false,
            trashed: false,
            trashed_at: None,
        }
    }

    #[test]
    fn test_import_coerces_unrecognized_mood() {
        let drafts = parse_import(r#"[{"text":"ok","mood":"Bogus"}]"#).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].mood, Some(Mood::Calm));
        assert_eq!(drafts[0].body, "ok");
    }

    #[test]
    fn test_import_caps_at_200_records() {
        let items: Vec<String> = (0..250)
            .map(|i| format!(r#"{{"text":"entry {i}","mood":"Happy"}}"#))
            .collect();
        let json = format!("[{}]", items.join(","));

        let drafts = parse_import(&json).unwrap();
        assert_eq!(drafts.len(), IMPORT_MAX_RECORDS);
    }

    #[test]
    fn test_import_skips_blank_and_malformed_records() {
        let json = r#"[{"text":"  "}, 42, {"text":"kept","pinned":true}, "nope"]"#;
        let drafts = parse_import(json).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].body, "kept");
        assert!(drafts[0].pinned);
    }

    #[test]
    fn test_import_truncates_long_bodies() {
        let long = "x".repeat(600);
        let json = format!(r#"[{{"text":"{long}"}}]"#);
        let drafts = parse_import(&json).unwrap();
        assert_eq!(drafts[0].body.chars().count(), MAX_BODY_CHARS);
    }

    #[test]
    fn test_import_rejects_non_array() {
        assert!(matches!(
            parse_import(r#"{"text":"ok"}"#),
            Err(BackupError::NotAnArray)
        ));
        assert!(matches!(
            parse_import("not json"),
            Err(BackupError::Malformed(_))
        ));
    }

    #[test]
    fn test_export_text_is_oldest_first() {
        // Snapshot order is newest first; the text export flips it.
        let entries = vec![
            entry("new", "newest", Some(Mood::Happy)),
            entry("old", "oldest", Some(Mood::Calm)),
        ];
        let text = export_text(&entries);
        let oldest = text.find("oldest").unwrap();
        let newest = text.find("newest").unwrap();
        assert!(oldest < newest);
    }

    #[test]
    fn test_export_json_reimports() {
        let entries = vec![entry("e1", "round trip", Some(Mood::Excited))];
        let drafts = parse_import(&export_json(&entries)).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].body, "round trip");
        assert_eq!(drafts[0].mood, Some(Mood::Excited));
    }
}
