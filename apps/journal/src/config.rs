//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

#[cfg(feature = "hosted")]
use unspoken_infra::HostedConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where device settings live on disk.
    pub settings_path: PathBuf,
    /// Hosted platform connection; `None` runs fully in-memory.
    #[cfg(feature = "hosted")]
    pub hosted: Option<HostedConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let settings_path = env::var("UNSPOKEN_SETTINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_settings_path());

        Self {
            settings_path,
            #[cfg(feature = "hosted")]
            hosted: HostedConfig::from_env(),
        }
    }
}

fn default_settings_path() -> PathBuf {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".unspoken").join("settings.json"),
        Err(_) => PathBuf::from("unspoken-settings.json"),
    }
}
