//! Device PIN lock.
//!
//! The PIN is compared as a plaintext string against device-local settings.
//! This is a convenience gate against shoulder-surfing on a shared device,
//! not a security boundary, and it claims no security properties: anyone with
//! access to the device's settings store can read the PIN.

use crate::domain::settings::DeviceSettings;
use crate::error::DomainError;

/// Minimum accepted PIN length, checked before anything is stored.
pub const MIN_PIN_LEN: usize = 4;

pub fn validate_pin(pin: &str) -> Result<(), DomainError> {
    if pin.chars().count() < MIN_PIN_LEN {
        return Err(DomainError::Validation(format!(
            "PIN must be at least {MIN_PIN_LEN} characters"
        )));
    }
    Ok(())
}

/// Pure lock state machine. Timers and persistence live with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockState {
    locked: bool,
}

impl LockState {
    /// Startup state: locked when a PIN is enabled and present.
    pub fn at_startup(settings: &DeviceSettings) -> Self {
        Self {
            locked: settings.pin_enabled && !settings.pin.is_empty(),
        }
    }

    pub fn is_locked(self) -> bool {
        self.locked
    }

    /// Explicit "lock now". Fails when no PIN is enabled, otherwise the
    /// journal could never be unlocked again.
    pub fn lock(&mut self, settings: &DeviceSettings) -> Result<(), DomainError> {
        if !settings.pin_enabled || settings.pin.is_empty() {
            return Err(DomainError::Validation("Enable a PIN first".to_string()));
        }
        self.locked = true;
        Ok(())
    }

    /// Attempt an unlock. Returns whether the input matched.
    pub fn unlock(&mut self, settings: &DeviceSettings, input: &str) -> bool {
        if input == settings.pin {
            self.locked = false;
            true
        } else {
            false
        }
    }

    /// The view went hidden; lock if the device is configured to.
    pub fn on_hidden(&mut self, settings: &DeviceSettings) {
        if settings.pin_enabled && settings.lock_on_hide {
            self.locked = true;
        }
    }

    /// Idle timeout fired.
    pub fn on_idle_timeout(&mut self, settings: &DeviceSettings) {
        if settings.pin_enabled && settings.auto_lock_min > 0 {
            self.locked = true;
        }
    }

    /// PIN was disabled; a lock without a PIN would be permanent.
    pub fn on_pin_disabled(&mut self) {
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_pin(pin: &str) -> DeviceSettings {
        DeviceSettings {
            pin: pin.to_string(),
            pin_enabled: true,
            ..DeviceSettings::default()
        }
    }

    #[test]
    fn test_validate_pin_length() {
        assert!(validate_pin("123").is_err());
        assert!(validate_pin("1234").is_ok());
        assert!(validate_pin("").is_err());
    }

    #[test]
    fn test_startup_locked_only_with_enabled_pin() {
        assert!(LockState::at_startup(&settings_with_pin("1234")).is_locked());
        assert!(!LockState::at_startup(&DeviceSettings::default()).is_locked());

        let enabled_but_empty = DeviceSettings {
            pin_enabled: true,
            ..DeviceSettings::default()
        };
        assert!(!LockState::at_startup(&enabled_but_empty).is_locked());
    }

    #[test]
    fn test_unlock_exact_match() {
        let settings = settings_with_pin("4321");
        let mut lock = LockState::at_startup(&settings);

        assert!(!lock.unlock(&settings, "1234"));
        assert!(lock.is_locked());
        assert!(lock.unlock(&settings, "4321"));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_lock_requires_enabled_pin() {
        let mut lock = LockState::default();
        assert!(lock.lock(&DeviceSettings::default()).is_err());
        assert!(lock.lock(&settings_with_pin("1234")).is_ok());
        assert!(lock.is_locked());
    }

    #[test]
    fn test_hidden_locks_only_when_configured() {
        let mut settings = settings_with_pin("1234");
        let mut lock = LockState::default();

        lock.on_hidden(&settings);
        assert!(!lock.is_locked());

        settings.lock_on_hide = true;
        lock.on_hidden(&settings);
        assert!(lock.is_locked());
    }

    #[test]
    fn test_disabling_pin_unlocks() {
        let settings = settings_with_pin("1234");
        let mut lock = LockState::at_startup(&settings);
        assert!(lock.is_locked());

        lock.on_pin_disabled();
        assert!(!lock.is_locked());
    }
}
