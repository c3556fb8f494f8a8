//! Per-mood counts over the visible list.

use crate::domain::{Entry, Mood};

/// Mood histogram for the insight bars. Entries whose mood is unrecognized
/// (or missing) are silently excluded from the counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodHistogram {
    counts: [usize; Mood::ALL.len()],
}

impl MoodHistogram {
    pub fn of(visible: &[&Entry]) -> Self {
        let mut counts = [0; Mood::ALL.len()];
        for entry in visible {
            if let Some(mood) = entry.mood {
                counts[mood.index()] += 1;
            }
        }
        Self { counts }
    }

    pub fn count(&self, mood: Mood) -> usize {
        self.counts[mood.index()]
    }

    /// Bar-scale denominator: the largest count, floored at 1 so an empty
    /// list never divides by zero.
    pub fn scale_max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0).max(1)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Mood, usize)> + '_ {
        Mood::ALL.into_iter().map(|m| (m, self.count(m)))
    }
}
