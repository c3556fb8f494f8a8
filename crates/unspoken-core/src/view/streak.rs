//! Consecutive-day writing streak.
//!
//! The streak is a ratchet over the act of saving, persisted only in device
//! settings. It never looks at entry timestamps, so backdated imports or
//! deletions leave it untouched.

use chrono::NaiveDate;

use crate::domain::DeviceSettings;

/// Outcome of recording a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub streak: u32,
    /// False when today already had a recorded write.
    pub changed: bool,
}

/// Record a successful save happening "now".
///
/// Same day as the last write: no change. Last write exactly yesterday:
/// increment. Anything else (gap of two or more days, or no prior record):
/// reset to 1. Always stamps the last-write day to today.
pub fn record_write(settings: &mut DeviceSettings, today: NaiveDate) -> StreakUpdate {
    if settings.last_write_day == Some(today) {
        return StreakUpdate {
            streak: settings.streak,
            changed: false,
        };
    }

    let yesterday = today.pred_opt();
    settings.streak = if settings.last_write_day.is_some() && settings.last_write_day == yesterday {
        settings.streak + 1
    } else {
        1
    };
    settings.last_write_day = Some(today);

    StreakUpdate {
        streak: settings.streak,
        changed: true,
    }
}
