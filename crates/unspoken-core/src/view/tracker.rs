//! Rolling 14-day mood calendar.

use chrono::{Days, NaiveDate, TimeZone};

use crate::domain::{Entry, Mood};

/// The tracker window is fixed: the 14 calendar days ending today inclusive.
pub const TRACKER_DAYS: usize = 14;

/// One calendar day in the tracker. `mood` is the first-encountered
/// non-trashed entry written that day, or `None` for a day without entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedDay {
    pub date: NaiveDate,
    pub mood: Option<Mood>,
}

impl TrackedDay {
    /// ISO date key, e.g. `2026-08-04`.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Short weekday label, e.g. `Tue`.
    pub fn weekday_label(&self) -> String {
        self.date.format("%a").to_string()
    }

    pub fn glyph(&self) -> &'static str {
        match self.mood {
            Some(mood) => mood.glyph(),
            None => "—",
        }
    }
}

/// Build the tracker: always exactly [`TRACKER_DAYS`] days, oldest first.
///
/// Calendar-day membership uses the given timezone's midnight boundary.
/// Trashed entries and entries without a server timestamp are skipped.
/// Entries are scanned in their existing iteration order; the first entry
/// seen for a day wins, with a missing mood resolving to Calm.
pub fn day_tracker<Tz: TimeZone>(entries: &[Entry], today: NaiveDate, tz: &Tz) -> Vec<TrackedDay> {
    let window_start = today
        .checked_sub_days(Days::new(TRACKER_DAYS as u64 - 1))
        .unwrap_or(today);

    let mut by_day: Vec<Option<Mood>> = vec![None; TRACKER_DAYS];
    for entry in entries {
        if entry.trashed {
            continue;
        }
        let Some(date) = entry.local_date(tz) else {
            continue;
        };
        if date < window_start || date > today {
            continue;
        }
        let slot = (date - window_start).num_days() as usize;
        if by_day[slot].is_none() {
            by_day[slot] = Some(entry.mood.unwrap_or(Mood::Calm));
        }
    }

    (0..TRACKER_DAYS)
        .map(|offset| TrackedDay {
            date: window_start
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(today),
            mood: by_day[offset],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone as _, Utc};

    use crate::domain::{EntryId, OwnerId};

    fn entry_on(day: u32, mood: Option<Mood>) -> Entry {
        Entry {
            id: EntryId(format!("e{day}")),
            owner: OwnerId("u".into()),
            body: String::new(),
            mood,
            created_at: Some(Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()),
            archived: false,
            pinned: false,
            trashed: false,
            trashed_at: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }

    #[test]
    fn test_always_fourteen_days() {
        let days = day_tracker(&[], today(), &Utc);
        assert_eq!(days.len(), TRACKER_DAYS);
        assert!(days.iter().all(|d| d.mood.is_none()));

        // Oldest first, ending today.
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
        assert_eq!(days[13].date, today());
    }

    #[test]
    fn test_first_entry_of_the_day_wins() {
        // Snapshot order is newest-first; the first encountered wins.
        let entries = vec![entry_on(20, Some(Mood::Happy)), entry_on(20, Some(Mood::Sad))];
        let days = day_tracker(&entries, today(), &Utc);
        assert_eq!(days[13].mood, Some(Mood::Happy));
    }

    #[test]
    fn test_trashed_and_undated_entries_skipped() {
        let mut trashed = entry_on(19, Some(Mood::Angry));
        trashed.trashed = true;
        let mut undated = entry_on(18, Some(Mood::Excited));
        undated.created_at = None;

        let days = day_tracker(&[trashed, undated], today(), &Utc);
        assert!(days.iter().all(|d| d.mood.is_none()));
    }

    #[test]
    fn test_entries_outside_window_ignored() {
        let days = day_tracker(&[entry_on(1, Some(Mood::Calm))], today(), &Utc);
        assert!(days.iter().all(|d| d.mood.is_none()));
    }

    #[test]
    fn test_missing_mood_resolves_to_calm() {
        let days = day_tracker(&[entry_on(20, None)], today(), &Utc);
        assert_eq!(days[13].mood, Some(Mood::Calm));
    }

    #[test]
    fn test_glyph_for_empty_day() {
        let day = TrackedDay {
            date: today(),
            mood: None,
        };
        assert_eq!(day.glyph(), "—");
        assert_eq!(day.date_key(), "2024-06-20");
    }
}
