use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::{Entry, Mood, OwnerId};

/// Opaque public-post identifier, assigned by the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        PostId(id)
    }
}

/// An anonymously shared post on the public feed.
///
/// `report_count` only ever goes up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicPost {
    pub id: PostId,
    pub body: String,
    pub mood: Option<Mood>,
    pub created_at: Option<DateTime<Utc>>,
    pub owner: OwnerId,
    pub alias: String,
    #[serde(default)]
    pub report_count: u32,
}

/// Share draft. A share is a copy of the source entry at share time;
/// later edits to the entry do not propagate.
#[derive(Debug, Clone)]
pub struct NewPublicPost {
    pub body: String,
    pub mood: Option<Mood>,
    pub owner: OwnerId,
    pub alias: String,
}

impl NewPublicPost {
    pub fn from_entry(entry: &Entry, alias: &str) -> Self {
        Self {
            body: entry.body.clone(),
            mood: entry.mood,
            owner: entry.owner.clone(),
            alias: alias.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::EntryId;

    #[test]
    fn test_share_copies_the_entry() {
        let mut entry = Entry {
            id: EntryId("e1".into()),
            owner: OwnerId("u1".into()),
            body: "shared once".into(),
            mood: Some(Mood::Excited),
            created_at: None,
            archived: false,
            pinned: true,
            trashed: false,
            trashed_at: None,
        };

        let draft = NewPublicPost::from_entry(&entry, "NightSky");
        entry.body = "edited after sharing".into();

        assert_eq!(draft.body, "shared once");
        assert_eq!(draft.mood, Some(Mood::Excited));
        assert_eq!(draft.alias, "NightSky");
    }
}
