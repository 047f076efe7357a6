//! Configuration for the folio terminal portfolio.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/folio/config.toml` on Linux). Every field has a
//! default, so a partial or missing file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use folio_core::ColorTheme;
use serde::{Deserialize, Serialize};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors raised while reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Transactional email settings for the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Email service identifier.
    pub service_id: String,
    /// Template for the message delivered to the site owner.
    pub template_id: String,
    /// Template for the auto-reply delivered to the sender.
    pub auto_reply_template_id: String,
    /// Public key identifying the account.
    pub public_key: String,
    /// Send endpoint.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl EmailConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: "service_g09wqkb".to_string(),
            template_id: "template_8eft0vb".to_string(),
            auto_reply_template_id: "template_hkmwp0z".to_string(),
            public_key: "PuDH9f84JhCHa_L2u".to_string(),
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Target frame rate for animations.
    pub fps: u32,
    /// Whether the hero particle field is drawn.
    pub particles: bool,
    /// Accent colour.
    pub color_theme: ColorTheme,
}

impl DisplayConfig {
    /// Interval between frames. A zero fps is treated as 1.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            particles: true,
            color_theme: ColorTheme::default(),
        }
    }
}

/// Log settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `folio=debug`.
    pub level: String,
    /// Log file path. Defaults to `folio.log` in the data directory.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub email: EmailConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

impl Config {
    /// Platform directories for folio, if the platform has any.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "folio")
    }

    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Default location of the log file.
    pub fn default_log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("folio.log"))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load from an explicit path, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::default_path()?),
        }
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
