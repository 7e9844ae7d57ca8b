//! Persisted client settings.
//!
//! Settings are loaded from disk at startup; command-line flags override
//! them for a single run.

use serde::{Deserialize, Serialize};
use shop_client::ClientSettings;
use std::path::{Path, PathBuf};

/// Storefront settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server connection settings.
    pub client: ClientSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid settings at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {}", e))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ShopStorefront", "shop")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.client.base_url = "https://shop.test/".to_string();
        settings.client.retry.max_attempts = 5;
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_cookie_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.client.cookie = Some("sessionid=s1; csrftoken=t1".to_string());
        settings.save_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("cookie"));
        assert!(!written.contains("csrftoken"));
        assert_eq!(Settings::load_from(&path).client.cookie, None);
    }

    #[test]
    fn test_cookie_is_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[client]\ncookie = \"csrftoken=t1\"\n").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.client.cookie.as_deref(), Some("csrftoken=t1"));
    }

    #[test]
    fn test_missing_or_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        assert_eq!(Settings::load_from(&path), Settings::default());

        std::fs::write(&path, "client = 3").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[client]\ntimeout_secs = 5\n").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.client.timeout_secs, 5);
        assert_eq!(settings.client.base_url, ClientSettings::default().base_url);
    }
}
