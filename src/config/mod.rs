//! Configuration
//!
//! Loaded from `<config_dir>/folio/config.toml`, or from the path in
//! `FOLIO_CONFIG`. Every field has a default, so a missing or partial file
//! is valid.

mod error;
mod migrate;

pub use error::ConfigError;
pub use migrate::{migrate_config, MigrateResult};

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::server_log::ServerLogSettings;
use crate::storage::{FileStore, StorageError};
use crate::terminal::{SessionSettings, Timings};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub terminal: TerminalConfig,
    pub storage: StorageConfig,
    pub server_log: ServerLogConfig,
    pub logging: LoggingConfig,
}

/// `[terminal]`: pacing of the landing prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub typing_delay_ms: u64,
    pub dispatch_delay_ms: u64,
    pub autotype_dispatch_delay_ms: u64,
    pub loading_delay_ms: u64,
    pub navigate_delay_ms: u64,
    pub banner_line_delay_ms: u64,
    pub history_limit: usize,
    /// Command typed automatically after the banner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autotype: Option<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 50,
            dispatch_delay_ms: 50,
            autotype_dispatch_delay_ms: 300,
            loading_delay_ms: 800,
            navigate_delay_ms: 500,
            banner_line_delay_ms: 200,
            history_limit: crate::terminal::history::DEFAULT_HISTORY_LIMIT,
            autotype: None,
        }
    }
}

impl TerminalConfig {
    pub fn timings(&self) -> Timings {
        Timings {
            typing: Duration::from_millis(self.typing_delay_ms),
            dispatch: Duration::from_millis(self.dispatch_delay_ms),
            autotype_dispatch: Duration::from_millis(self.autotype_dispatch_delay_ms),
            loading: Duration::from_millis(self.loading_delay_ms),
            navigate: Duration::from_millis(self.navigate_delay_ms),
            banner_line: Duration::from_millis(self.banner_line_delay_ms),
        }
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            timings: self.timings(),
            history_limit: self.history_limit,
            autotype: self.autotype.clone(),
        }
    }
}

/// `[storage]`: where the active selection is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured state file, or the platform default.
    pub fn state_file(&self) -> Result<PathBuf, StorageError> {
        match &self.state_file {
            Some(path) => Ok(path.clone()),
            None => FileStore::default_path(),
        }
    }
}

/// `[server_log]`: the decorative log panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerLogConfig {
    pub enabled: bool,
    pub restart_delay_ms: u64,
    pub skill_limit: usize,
}

impl Default for ServerLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            restart_delay_ms: 2000,
            skill_limit: 8,
        }
    }
}

impl ServerLogConfig {
    pub fn settings(&self) -> ServerLogSettings {
        ServerLogSettings {
            restart_delay: Duration::from_millis(self.restart_delay_ms),
            skill_limit: self.skill_limit,
        }
    }
}

/// `[logging]`: log file verbosity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, e.g. `info` or `folio=debug`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Config file location, honouring `FOLIO_CONFIG`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("folio").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path()?)
    }

    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Write to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&path, content).map_err(write_err)?;
        Ok(())
    }
}
