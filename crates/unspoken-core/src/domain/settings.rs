//! Device-local settings.
//!
//! Every field lives only in the device's key-value store - nothing here is
//! ever transmitted to the backend, and there is no cross-device consistency.
//! Settings are read once at startup and each change is written back
//! immediately, one key per field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::ports::SettingsStore;

mod keys {
    pub const THEME: &str = "theme";
    pub const PIN: &str = "pin";
    pub const PIN_ENABLED: &str = "pin_enabled";
    pub const AUTO_LOCK_MIN: &str = "autolock_min";
    pub const BLUR_ON_HIDE: &str = "blur_hidden";
    pub const LOCK_ON_HIDE: &str = "lock_hidden";
    pub const ALIAS: &str = "anon_name";
    pub const STREAK: &str = "streak";
    pub const LAST_WRITE_DAY: &str = "last_write_day";
}

const DATE_FMT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn from_name(name: &str) -> Option<Theme> {
        match name {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Explicit settings struct handed to the app at startup - no ambient
/// global. Mutating setters write the changed key straight through to the
/// device store.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSettings {
    pub theme: Theme,
    /// Stored as plaintext on the device. See [`crate::domain::lock`].
    pub pin: String,
    pub pin_enabled: bool,
    /// Idle minutes before auto-lock; 0 disables it.
    pub auto_lock_min: u32,
    pub blur_on_hide: bool,
    pub lock_on_hide: bool,
    /// Display alias used when sharing to the public feed.
    pub alias: String,
    pub streak: u32,
    pub last_write_day: Option<NaiveDate>,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            pin: String::new(),
            pin_enabled: false,
            auto_lock_min: 0,
            blur_on_hide: true,
            lock_on_hide: false,
            alias: "Anonymous".to_string(),
            streak: 0,
            last_write_day: None,
        }
    }
}

impl DeviceSettings {
    /// Read every setting once. Missing or unparsable values fall back to
    /// their defaults - the store has no schema to validate against.
    pub async fn load(store: &dyn SettingsStore) -> Self {
        let defaults = Self::default();

        let theme = store
            .get(keys::THEME)
            .await
            .and_then(|v| Theme::from_name(&v))
            .unwrap_or(defaults.theme);

        let pin = store.get(keys::PIN).await.unwrap_or_default();
        let pin_enabled = store
            .get(keys::PIN_ENABLED)
            .await
            .map(|v| v == "true")
            .unwrap_or(false);

        let auto_lock_min = store
            .get(keys::AUTO_LOCK_MIN)
            .await
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        let blur_on_hide = store
            .get(keys::BLUR_ON_HIDE)
            .await
            .map(|v| v != "false")
            .unwrap_or(true);
        let lock_on_hide = store
            .get(keys::LOCK_ON_HIDE)
            .await
            .map(|v| v == "true")
            .unwrap_or(false);

        let alias = store
            .get(keys::ALIAS)
            .await
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.alias.clone());

        let streak = store
            .get(keys::STREAK)
            .await
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let last_write_day = store
            .get(keys::LAST_WRITE_DAY)
            .await
            .and_then(|v| NaiveDate::parse_from_str(&v, DATE_FMT).ok());

        Self {
            theme,
            pin,
            pin_enabled,
            auto_lock_min,
            blur_on_hide,
            lock_on_hide,
            alias,
            streak,
            last_write_day,
        }
    }

    pub async fn set_theme(
        &mut self,
        store: &dyn SettingsStore,
        theme: Theme,
    ) -> Result<(), SettingsError> {
        self.theme = theme;
        store.set(keys::THEME, theme.name()).await
    }

    pub async fn set_pin(
        &mut self,
        store: &dyn SettingsStore,
        pin: String,
        enabled: bool,
    ) -> Result<(), SettingsError> {
        self.pin = pin;
        self.pin_enabled = enabled;
        store.set(keys::PIN, &self.pin).await?;
        store
            .set(keys::PIN_ENABLED, if enabled { "true" } else { "false" })
            .await
    }

    pub async fn set_pin_enabled(
        &mut self,
        store: &dyn SettingsStore,
        enabled: bool,
    ) -> Result<(), SettingsError> {
        self.pin_enabled = enabled;
        store
            .set(keys::PIN_ENABLED, if enabled { "true" } else { "false" })
            .await
    }

    pub async fn set_auto_lock_min(
        &mut self,
        store: &dyn SettingsStore,
        minutes: u32,
    ) -> Result<(), SettingsError> {
        self.auto_lock_min = minutes;
        store.set(keys::AUTO_LOCK_MIN, &minutes.to_string()).await
    }

    pub async fn set_blur_on_hide(
        &mut self,
        store: &dyn SettingsStore,
        value: bool,
    ) -> Result<(), SettingsError> {
        self.blur_on_hide = value;
        store
            .set(keys::BLUR_ON_HIDE, if value { "true" } else { "false" })
            .await
    }

    pub async fn set_lock_on_hide(
        &mut self,
        store: &dyn SettingsStore,
        value: bool,
    ) -> Result<(), SettingsError> {
        self.lock_on_hide = value;
        store
            .set(keys::LOCK_ON_HIDE, if value { "true" } else { "false" })
            .await
    }

    /// Save the sharing alias, falling back to "Anonymous" for blank input.
    pub async fn set_alias(
        &mut self,
        store: &dyn SettingsStore,
        alias: &str,
    ) -> Result<(), SettingsError> {
        let trimmed = alias.trim();
        self.alias = if trimmed.is_empty() {
            "Anonymous".to_string()
        } else {
            trimmed.to_string()
        };
        store.set(keys::ALIAS, &self.alias).await
    }

    /// Persist the streak counter and last-write day together; the two are
    /// only ever updated as a pair by the save path.
    pub async fn store_streak(&self, store: &dyn SettingsStore) -> Result<(), SettingsError> {
        store.set(keys::STREAK, &self.streak.to_string()).await?;
        match self.last_write_day {
            Some(day) => {
                store
                    .set(keys::LAST_WRITE_DAY, &day.format(DATE_FMT).to_string())
                    .await
            }
            None => store.remove(keys::LAST_WRITE_DAY).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct StubStore {
        values: Mutex<HashMap<String, String>>,
    }

    impl StubStore {
        fn with(pairs: &[(&str, &str)]) -> Self {
            let store = Self::default();
            {
                let mut values = store.values.lock().unwrap();
                for (k, v) in pairs {
                    values.insert(k.to_string(), v.to_string());
                }
            }
            store
        }
    }

    #[async_trait]
    impl SettingsStore for StubStore {
        async fn get(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), SettingsError> {
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_empty_store_loads_defaults() {
        let settings = DeviceSettings::load(&StubStore::default()).await;
        assert_eq!(settings, DeviceSettings::default());
        assert!(settings.blur_on_hide);
        assert_eq!(settings.alias, "Anonymous");
    }

    #[tokio::test]
    async fn test_garbage_values_fall_back_to_defaults() {
        let store = StubStore::with(&[
            ("theme", "solarized"),
            ("streak", "not-a-number"),
            ("autolock_min", "-3"),
            ("last_write_day", "yesterday-ish"),
        ]);

        let settings = DeviceSettings::load(&store).await;
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.streak, 0);
        assert_eq!(settings.auto_lock_min, 0);
        assert_eq!(settings.last_write_day, None);
    }

    #[tokio::test]
    async fn test_load_round_trips_stored_values() {
        let store = StubStore::with(&[
            ("theme", "light"),
            ("pin", "1234"),
            ("pin_enabled", "true"),
            ("autolock_min", "5"),
            ("blur_hidden", "false"),
            ("lock_hidden", "true"),
            ("anon_name", "NightSky"),
            ("streak", "12"),
            ("last_write_day", "2024-05-10"),
        ]);

        let settings = DeviceSettings::load(&store).await;
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.pin, "1234");
        assert!(settings.pin_enabled);
        assert_eq!(settings.auto_lock_min, 5);
        assert!(!settings.blur_on_hide);
        assert!(settings.lock_on_hide);
        assert_eq!(settings.alias, "NightSky");
        assert_eq!(settings.streak, 12);
        assert_eq!(
            settings.last_write_day,
            NaiveDate::from_ymd_opt(2024, 5, 10)
        );
    }

    #[tokio::test]
    async fn test_streak_pair_written_together() {
        let store = StubStore::default();
        let settings = DeviceSettings {
            streak: 3,
            last_write_day: NaiveDate::from_ymd_opt(2024, 5, 10),
            ..DeviceSettings::default()
        };

        settings.store_streak(&store).await.unwrap();
        assert_eq!(store.get("streak").await.as_deref(), Some("3"));
        assert_eq!(store.get("last_write_day").await.as_deref(), Some("2024-05-10"));
    }
}
