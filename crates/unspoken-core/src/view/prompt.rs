//! Daily prompt, reflections, and other date-derived copy.
//!
//! Everything here is a pure function of the date (or timestamp) it is
//! given - no randomness, no state - so the same day always shows the same
//! words.

use chrono::{DateTime, NaiveDate, Timelike, Utc};

use crate::domain::Mood;

const DAILY_PROMPTS: [&str; 7] = [
    "What’s one thing you’re carrying today?",
    "What do you wish someone understood about you right now?",
    "Name the feeling. Don’t explain it—just name it.",
    "What are you avoiding that you actually need?",
    "If today had a title, what would it be?",
    "What would help you feel 5% lighter?",
    "Write one sentence you needed to hear.",
];

const REMINDERS: [&str; 4] = [
    "You don’t have to explain everything. Just write it out.",
    "Small steps count. Even writing one line is progress.",
    "Your feelings are valid. Let them breathe here.",
    "Write it as it is. No judgement.",
];

/// Starter fragments offered above the composer.
pub const QUICK_TEMPLATES: [&str; 5] = [
    "Right now I feel…",
    "What’s stuck in my head is…",
    "I’m tired of…",
    "I wish…",
    "One thing I’m grateful for is…",
];

/// ISO key identifying a calendar day.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Fold a date key into an unsigned 32-bit hash: `h = h*31 + byte`.
fn day_hash(key: &str) -> u32 {
    key.bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32))
}

/// The writing prompt for a given day.
pub fn daily_prompt(date: NaiveDate) -> &'static str {
    let hash = day_hash(&date_key(date));
    DAILY_PROMPTS[hash as usize % DAILY_PROMPTS.len()]
}

/// A short reflection shown after saving, matched to the entry's mood and
/// stable for the day.
pub fn reflection(mood: Mood, date: NaiveDate) -> &'static str {
    let lines: &[&'static str] = match mood {
        Mood::Happy => &[
            "Hold this moment a little longer ✨",
            "Joy is worth remembering.",
        ],
        Mood::Sad => &[
            "It’s okay to slow down today 🌙",
            "You don’t need to carry everything alone.",
        ],
        Mood::Angry => &[
            "Strong feelings mean something matters.",
            "Breathe first. You can respond later.",
        ],
        Mood::Calm => &[
            "Peace is progress too 😌",
            "This quiet moment belongs to you.",
        ],
        Mood::Excited => &["Energy like this is beautiful ⚡", "Capture this spark."],
        Mood::Anxious => &[
            "You are safer than your thoughts suggest 🌫️",
            "Take one small breath at a time.",
        ],
    };
    lines[day_hash(&date_key(date)) as usize % lines.len()]
}

/// Rotating reminder line, advancing once per wall-clock minute.
pub fn reminder_at(now: DateTime<Utc>) -> &'static str {
    let minutes = (now.timestamp() / 60).max(0) as usize;
    REMINDERS[minutes % REMINDERS.len()]
}

/// Time-of-day greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub word: &'static str,
    pub sub: &'static str,
}

pub fn greeting_for_hour(hour: u32) -> Greeting {
    match hour {
        0..=4 => Greeting {
            word: "Still awake?",
            sub: "The quiet hours hold the deepest truths.",
        },
        5..=11 => Greeting {
            word: "Good morning",
            sub: "A new page. What do you want it to hold?",
        },
        12..=16 => Greeting {
            word: "Good afternoon",
            sub: "Pause. Breathe. What's on your mind?",
        },
        17..=20 => Greeting {
            word: "Good evening",
            sub: "The day is settling. What did it stir in you?",
        },
        _ => Greeting {
            word: "Good night",
            sub: "Let the day go. Write it down first.",
        },
    }
}

/// Greeting for a concrete moment, for callers holding a timestamp.
pub fn greeting_at<Tz: chrono::TimeZone>(now: DateTime<Tz>) -> Greeting {
    greeting_for_hour(now.hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_prompt_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(daily_prompt(date), daily_prompt(date));
    }

    #[test]
    fn test_prompt_hash_matches_reference_fold() {
        // "2024-07-01" folded byte-by-byte with h*31 + b.
        let key = date_key(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        let expected = key
            .bytes()
            .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32));
        assert_eq!(day_hash(&key), expected);
        assert_eq!(
            daily_prompt(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
            DAILY_PROMPTS[expected as usize % DAILY_PROMPTS.len()]
        );
    }

    #[test]
    fn test_reflection_stable_per_day() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
        assert_eq!(reflection(Mood::Sad, date), reflection(Mood::Sad, date));
    }

    #[test]
    fn test_greeting_buckets() {
        assert_eq!(greeting_for_hour(3).word, "Still awake?");
        assert_eq!(greeting_for_hour(9).word, "Good morning");
        assert_eq!(greeting_for_hour(14).word, "Good afternoon");
        assert_eq!(greeting_for_hour(19).word, "Good evening");
        assert_eq!(greeting_for_hour(23).word, "Good night");
    }
}
