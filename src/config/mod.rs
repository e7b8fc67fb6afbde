//! Configuration management for Wordkeep

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::token::TimestampPolicy;
use crate::words::SortOrder;

/// Application configuration
///
/// Holds connection settings and preferences only. Tokens and passwords
/// are never written here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vocabulary service host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Default login email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// How zoneless expiry timestamps are treated
    #[serde(default)]
    pub timestamp_policy: TimestampPolicy,

    /// Per-request HTTP timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long a surface waits for the background service to answer
    #[serde(default = "default_bridge_timeout_ms")]
    pub bridge_timeout_ms: u64,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Default word list order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_bridge_timeout_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: None,
            email: None,
            timestamp_policy: TimestampPolicy::default(),
            request_timeout_secs: default_request_timeout_secs(),
            bridge_timeout_ms: default_bridge_timeout_ms(),
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".wordkeep").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path` (or the default location).
    ///
    /// A missing file yields the defaults; there is nothing mandatory in it.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path` (or the default location)
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("request_timeout_secs must be positive".to_string()).into());
        }
        if self.bridge_timeout_ms == 0 {
            return Err(ConfigError::Invalid("bridge_timeout_ms must be positive".to_string()).into());
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bridge_timeout(&self) -> Duration {
        Duration::from_millis(self.bridge_timeout_ms)
    }

    /// Email to log in with: explicit override first, then the config value
    pub fn require_email(&self, email_override: Option<&str>) -> Result<String> {
        email_override
            .map(str::to_string)
            .or_else(|| self.email.clone())
            .ok_or_else(|| ConfigError::MissingEmail.into())
    }
}
