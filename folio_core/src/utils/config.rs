use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{FolioResult, ResultExt};
use crate::particles::EngineConfig;
use crate::theme::ThemeMode;

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "RESEND_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Active colour theme
    #[serde(default)]
    pub theme: ThemeMode,

    /// Particle effect parameters
    #[serde(default)]
    pub effects: EffectsConfig,

    /// Contact form delivery settings
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default = "EngineConfig::ambient")]
    pub ambient: EngineConfig,
    #[serde(default = "EngineConfig::trail")]
    pub trail: EngineConfig,
    #[serde(default = "EngineConfig::hero")]
    pub hero: EngineConfig,
    #[serde(default = "default_true")]
    pub trail_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_from")]
    pub from: String,
    #[serde(default = "default_to")]
    pub to: String,
    /// Delay for the simulated sender used without an API key
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_from() -> String {
    "Portfolio Contact <onboarding@resend.dev>".to_string()
}

fn default_to() -> String {
    "your-email@example.com".to_string()
}

fn default_simulated_delay_ms() -> u64 {
    1_000
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            ambient: EngineConfig::ambient(),
            trail: EngineConfig::trail(),
            hero: EngineConfig::hero(),
            trail_enabled: true,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            from: default_from(),
            to: default_to(),
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl ContactConfig {
    /// Configured key, else `RESEND_API_KEY`; blank values count as unset.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            effects: EffectsConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FolioResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str::<Config>(&content)
            .with_config_context(&format!("parsing {}", path.display()))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> FolioResult<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio")
            .join("config.yaml")
    }

    /// Loads the user config, falling back to defaults when it is missing or
    /// unreadable.
    pub fn load_or_default() -> FolioResult<Self> {
        let config_path = Self::get_config_path();

        if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => return Ok(config),
                Err(err) => tracing::warn!(
                    path = %config_path.display(),
                    error = %err,
                    "ignoring unreadable config"
                ),
            }
        }

        Ok(Self::default())
    }

    pub fn save(&self) -> FolioResult<()> {
        self.save_to_file(Self::get_config_path())
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(config.effects.trail_enabled);
        assert_eq!(config.contact.api_url, "https://api.resend.com");
        assert_eq!(config.contact.simulated_delay_ms, 1_000);
    }

    #[test]
    fn test_save_and_load_config() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.yaml");

        let mut original = Config::default();
        original.set_theme(ThemeMode::Light);
        original.contact.to = "me@example.com".to_string();
        original.effects.trail_enabled = false;

        original.save_to_file(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from_file(&config_path)?;
        assert_eq!(loaded, original);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "theme: light\ncontact:\n  to: owner@example.com\n")?;

        let config = Config::load_from_file(&config_path)?;

        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.contact.to, "owner@example.com");
        assert_eq!(config.contact.from, "Portfolio Contact <onboarding@resend.dev>");
        assert_eq!(config.effects.hero, EngineConfig::hero());
        Ok(())
    }

    #[test]
    fn test_invalid_yaml_is_an_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "theme: [not, a, theme]")?;

        let err = Config::load_from_file(&config_path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: parsing"));
        Ok(())
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(Config::load_from_file("/path/that/does/not/exist/config.yaml").is_err());
    }

    #[test]
    #[serial]
    fn test_api_key_falls_back_to_env() {
        std::env::set_var(API_KEY_ENV, "re_from_env");
        let config = ContactConfig::default();
        assert_eq!(config.resolved_api_key().as_deref(), Some("re_from_env"));

        let explicit = ContactConfig {
            api_key: Some("re_explicit".to_string()),
            ..ContactConfig::default()
        };
        assert_eq!(explicit.resolved_api_key().as_deref(), Some("re_explicit"));
        std::env::remove_var(API_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_blank_api_key_counts_as_unset() {
        std::env::remove_var(API_KEY_ENV);
        let config = ContactConfig {
            api_key: Some("   ".to_string()),
            ..ContactConfig::default()
        };
        assert_eq!(config.resolved_api_key(), None);
    }
}
