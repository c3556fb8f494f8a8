//! Visibility filter and ordering.

use crate::domain::{Entry, Mood};

/// The current filter/view selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Trash view shows only trashed entries; normal view only non-trashed.
    pub trash_view: bool,
    pub show_archived: bool,
    /// `None` means "All".
    pub mood: Option<Mood>,
    /// Case-insensitive substring match against the body.
    pub query: String,
}

impl FilterState {
    /// Reset search and mood filter, keeping the current view.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.mood = None;
    }
}

/// Apply the visibility rules and ordering to an entry set.
///
/// An entry is visible iff its trashed flag matches the view exactly, it is
/// unarchived or archived entries are shown, the mood filter is "All" or
/// matches, and the case-folded body contains the case-folded query.
///
/// Input order (reverse-chronological, as the store delivers it) is
/// preserved; outside trash view, pinned entries are stably partitioned to
/// the front.
pub fn visible<'a>(entries: &'a [Entry], filter: &FilterState) -> Vec<&'a Entry> {
    let query = filter.query.trim().to_lowercase();

    let list = entries.iter().filter(|e| {
        if e.trashed != filter.trash_view {
            return false;
        }
        if !filter.show_archived && e.archived {
            return false;
        }
        if let Some(mood) = filter.mood {
            if e.mood != Some(mood) {
                return false;
            }
        }
        query.is_empty() || e.body.to_lowercase().contains(&query)
    });

    if filter.trash_view {
        // No pinning reorder in the trash.
        return list.collect();
    }

    let (mut pinned, rest): (Vec<&Entry>, Vec<&Entry>) = list.partition(|e| e.pinned);
    pinned.extend(rest);
    pinned
}
