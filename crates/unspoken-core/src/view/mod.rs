//! The view-model reducer.
//!
//! Pure, synchronous transformation from (entry snapshot, filter state) to
//! what the presentation layer shows. It performs no I/O, mutates nothing it
//! is given, and is cheap enough to re-run on every snapshot the live query
//! pushes.

mod filter;
mod insights;
mod prompt;
mod streak;
mod tracker;

pub use filter::{FilterState, visible};
pub use insights::MoodHistogram;
pub use prompt::{
    Greeting, QUICK_TEMPLATES, daily_prompt, date_key, greeting_at, greeting_for_hour,
    reflection, reminder_at,
};
pub use streak::{StreakUpdate, record_write};
pub use tracker::{TRACKER_DAYS, TrackedDay, day_tracker};

use chrono::{NaiveDate, TimeZone};

use crate::domain::Entry;

/// Everything derived from one entry snapshot under the current filters.
#[derive(Debug)]
pub struct ViewModel<'a> {
    /// Filtered, pinned-first display list.
    pub visible: Vec<&'a Entry>,
    /// Mood counts over `visible`.
    pub histogram: MoodHistogram,
    /// The 14-day calendar, oldest day first.
    pub tracker: Vec<TrackedDay>,
    /// Non-trashed entries, for the header stat.
    pub saved_count: usize,
}

impl<'a> ViewModel<'a> {
    pub fn build<Tz: TimeZone>(
        entries: &'a [Entry],
        filter: &FilterState,
        today: NaiveDate,
        tz: &Tz,
    ) -> Self {
        let visible = filter::visible(entries, filter);
        let histogram = MoodHistogram::of(&visible);
        let tracker = tracker::day_tracker(entries, today, tz);
        let saved_count = entries.iter().filter(|e| !e.trashed).count();

        Self {
            visible,
            histogram,
            tracker,
            saved_count,
        }
    }

    /// Tracker days that actually have an entry.
    pub fn tracked_days(&self) -> usize {
        self.tracker.iter().filter(|d| d.mood.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone as _, Utc};

    use crate::domain::{EntryId, Mood, OwnerId};

    fn entry(id: &str, mood: Option<Mood>, pinned: bool, trashed: bool) -> Entry {
        Entry {
            id: EntryId(id.into()),
            owner: OwnerId("u1".into()),
            body: format!("entry {id}"),
            mood,
            created_at: Some(Utc.with_ymd_and_hms(2024, 6, 20, 9, 0, 0).unwrap()),
            archived: false,
            pinned,
            trashed,
            trashed_at: None,
        }
    }

    #[test]
    fn test_build_pinned_first_and_histogram() {
        // Calm is pinned, Happy is not: Calm leads, both counted once.
        let entries = vec![
            entry("calm", Some(Mood::Calm), true, false),
            entry("happy", Some(Mood::Happy), false, false),
        ];

        let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let vm = ViewModel::build(&entries, &FilterState::default(), today, &Utc);

        let ids: Vec<&str> = vm.visible.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["calm", "happy"]);
        assert_eq!(vm.histogram.count(Mood::Happy), 1);
        assert_eq!(vm.histogram.count(Mood::Calm), 1);
        assert_eq!(vm.histogram.count(Mood::Angry), 0);
        assert_eq!(vm.saved_count, 2);
    }

    #[test]
    fn test_trashed_excluded_from_stats_but_tracked_list_intact() {
        let entries = vec![
            entry("a", Some(Mood::Happy), false, false),
            entry("t", Some(Mood::Sad), false, true),
        ];

        let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let vm = ViewModel::build(&entries, &FilterState::default(), today, &Utc);

        assert_eq!(vm.saved_count, 1);
        assert_eq!(vm.tracker.len(), TRACKER_DAYS);
        assert_eq!(vm.tracked_days(), 1);
    }
}
