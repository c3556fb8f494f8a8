use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Maximum entry body length, enforced client-side only.
pub const MAX_BODY_CHARS: usize = 500;

/// The fixed set of moods an entry can be tagged with.
///
/// Anything outside this set coming back from the store is represented as
/// `None` on the entry - unrecognized values are never rejected at write time,
/// display logic just treats them as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Calm,
    Excited,
    Anxious,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Calm,
        Mood::Excited,
        Mood::Anxious,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Calm => "Calm",
            Mood::Excited => "Excited",
            Mood::Anxious => "Anxious",
        }
    }

    /// Parse a stored mood name. Returns `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|m| m.name() == name)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Mood::Happy => "😄",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Calm => "😌",
            Mood::Excited => "🥳",
            Mood::Anxious => "😰",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Mood::Happy => 0,
            Mood::Sad => 1,
            Mood::Angry => 2,
            Mood::Calm => 3,
            Mood::Excited => 4,
            Mood::Anxious => 5,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque entry identifier, assigned by the backing store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        EntryId(id)
    }
}

/// Identifier of the authenticated owner, issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub String);

impl OwnerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OwnerId {
    fn from(id: String) -> Self {
        OwnerId(id)
    }
}

/// A single journal entry as the store reports it.
///
/// `created_at` is server-assigned; an entry observed before the server has
/// stamped it carries `None` and is excluded from day-based views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub owner: OwnerId,
    pub body: String,
    pub mood: Option<Mood>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub trashed: bool,
    pub trashed_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Calendar day this entry was written on, in the given timezone.
    pub fn local_date<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        self.created_at.map(|ts| ts.with_timezone(tz).date_naive())
    }
}

/// Creation draft. The store assigns id and created-at.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub body: String,
    pub mood: Option<Mood>,
    pub archived: bool,
    pub pinned: bool,
    pub trashed: bool,
}

impl NewEntry {
    pub fn new(body: impl Into<String>, mood: Option<Mood>) -> Self {
        Self {
            body: body.into(),
            mood,
            archived: false,
            pinned: false,
            trashed: false,
        }
    }
}

/// Partial field merge for update-document calls. Only `Some` fields are
/// touched. Stores stamp `trashed_at` themselves when `trashed` flips to true
/// and clear it when it flips back.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub archived: Option<bool>,
    pub pinned: Option<bool>,
    pub trashed: Option<bool>,
}

impl EntryPatch {
    pub fn archived(value: bool) -> Self {
        Self {
            archived: Some(value),
            ..Self::default()
        }
    }

    pub fn pinned(value: bool) -> Self {
        Self {
            pinned: Some(value),
            ..Self::default()
        }
    }

    pub fn trash() -> Self {
        Self {
            trashed: Some(true),
            ..Self::default()
        }
    }

    pub fn restore() -> Self {
        Self {
            trashed: Some(false),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_from_name_roundtrip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_name(mood.name()), Some(mood));
        }
    }

    #[test]
    fn test_mood_from_name_unrecognized() {
        assert_eq!(Mood::from_name("Bogus"), None);
        assert_eq!(Mood::from_name("happy"), None);
        assert_eq!(Mood::from_name(""), None);
    }

    #[test]
    fn test_local_date_follows_timezone() {
        use chrono::FixedOffset;

        let entry = Entry {
            id: EntryId("e1".into()),
            owner: OwnerId("u1".into()),
            body: "late night".into(),
            mood: Some(Mood::Calm),
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 10, 23, 30, 0).unwrap()),
            archived: false,
            pinned: false,
            trashed: false,
            trashed_at: None,
        };

        // Two hours east of UTC, 23:30 is already the next day.
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            entry.local_date(&east),
            Some(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap())
        );
        assert_eq!(
            entry.local_date(&Utc),
            Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
        );
    }
}
