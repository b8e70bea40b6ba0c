use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable consulted before the config file. Lets the API key be
/// injected without ever touching disk.
pub const ENV_API_KEY: &str = "SKYCAST_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com API key, if configured.
    pub api_key: Option<String>,
}

impl Config {
    /// API key from the environment if set, falling back to the config file
    /// value. Blank values count as unset.
    pub fn resolved_api_key(&self) -> Option<String> {
        Self::pick_api_key(std::env::var(ENV_API_KEY).ok(), self.api_key.clone())
    }

    fn pick_api_key(env: Option<String>, stored: Option<String>) -> Option<String> {
        env.filter(|key| !key.trim().is_empty())
            .or_else(|| stored.filter(|key| !key.trim().is_empty()))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn is_configured(&self) -> bool {
        self.resolved_api_key().is_some()
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_key() {
        let cfg = Config::default();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn set_api_key_stores_value() {
        let mut cfg = Config::default();

        cfg.set_api_key("SECRET".into());

        assert_eq!(cfg.api_key.as_deref(), Some("SECRET"));
    }

    #[test]
    fn env_value_wins_over_stored_value() {
        let picked = Config::pick_api_key(Some("FROM_ENV".into()), Some("FROM_FILE".into()));
        assert_eq!(picked.as_deref(), Some("FROM_ENV"));
    }

    #[test]
    fn blank_env_value_falls_back_to_stored_value() {
        let picked = Config::pick_api_key(Some("   ".into()), Some("FROM_FILE".into()));
        assert_eq!(picked.as_deref(), Some("FROM_FILE"));
    }

    #[test]
    fn absent_everywhere_yields_none() {
        assert_eq!(Config::pick_api_key(None, None), None);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("SECRET".into());

        let serialized = toml::to_string_pretty(&cfg).expect("serialize should succeed");
        let parsed: Config = toml::from_str(&serialized).expect("parse should succeed");

        assert_eq!(parsed.api_key.as_deref(), Some("SECRET"));
    }
}
