//! Data Transfer Objects - wire shapes for the hosted document store and
//! identity provider. Moods travel as free strings; anything unrecognized
//! decodes to "unknown" rather than failing the document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use unspoken_core::domain::{
    Entry, EntryId, EntryPatch, Mood, NewEntry, NewPublicPost, OwnerId, PostId, PublicPost,
};

/// A journal entry document as the store serves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDoc {
    pub id: String,
    pub uid: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub trashed: bool,
    #[serde(default)]
    pub trashed_at: Option<DateTime<Utc>>,
}

impl From<EntryDoc> for Entry {
    fn from(doc: EntryDoc) -> Self {
        Entry {
            id: EntryId(doc.id),
            owner: OwnerId(doc.uid),
            body: doc.text,
            mood: doc.mood.as_deref().and_then(Mood::from_name),
            created_at: doc.created_at,
            archived: doc.archived,
            pinned: doc.pinned,
            trashed: doc.trashed,
            trashed_at: doc.trashed_at,
        }
    }
}

/// Create-document request body; the store assigns id and created-at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub uid: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub archived: bool,
    pub pinned: bool,
    pub trashed: bool,
}

impl CreateEntryRequest {
    pub fn new(owner: &OwnerId, draft: &NewEntry) -> Self {
        Self {
            uid: owner.0.clone(),
            text: draft.body.clone(),
            mood: draft.mood.map(|m| m.name().to_string()),
            archived: draft.archived,
            pinned: draft.pinned,
            trashed: draft.trashed,
        }
    }
}

/// Partial-merge request body; absent fields are left untouched by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trashed: Option<bool>,
}

impl From<&EntryPatch> for UpdateEntryRequest {
    fn from(patch: &EntryPatch) -> Self {
        Self {
            archived: patch.archived,
            pinned: patch.pinned,
            trashed: patch.trashed,
        }
    }
}

/// A public-feed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPostDoc {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub owner_uid: String,
    #[serde(default)]
    pub anon_name: String,
    #[serde(default)]
    pub report_count: u32,
}

impl From<PublicPostDoc> for PublicPost {
    fn from(doc: PublicPostDoc) -> Self {
        PublicPost {
            id: PostId(doc.id),
            body: doc.text,
            mood: doc.mood.as_deref().and_then(Mood::from_name),
            created_at: doc.created_at,
            owner: OwnerId(doc.owner_uid),
            alias: doc.anon_name,
            report_count: doc.report_count,
        }
    }
}

/// Publish request for the share action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub owner_uid: String,
    pub anon_name: String,
}

impl PublishRequest {
    pub fn new(draft: &NewPublicPost) -> Self {
        Self {
            text: draft.body.clone(),
            mood: draft.mood.map(|m| m.name().to_string()),
            owner_uid: draft.owner.0.clone(),
            anon_name: draft.alias.clone(),
        }
    }
}

/// Email/password credentials for sign-in and sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Federated sign-in carrying a provider-minted token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSignInRequest {
    pub id_token: String,
}

/// The provider's view of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One frame of the live-query stream: a full replacement snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFrame<T> {
    pub docs: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_mood_decodes_to_unknown() {
        let doc: EntryDoc = serde_json::from_str(
            r#"{"id":"e1","uid":"u1","text":"hi","mood":"Bogus","trashed":false}"#,
        )
        .unwrap();
        let entry: Entry = doc.into();
        assert_eq!(entry.mood, None);
        assert_eq!(entry.body, "hi");
    }

    #[test]
    fn test_update_request_omits_untouched_fields() {
        let body = UpdateEntryRequest::from(&EntryPatch::trash());
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"trashed":true}"#);
    }
}
