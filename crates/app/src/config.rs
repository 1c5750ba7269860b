//! Optional `config.toml` read at startup.
//! This module exists to resolve file locations, the seed and the log level.
//! It does not own the save format or the game rules.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::LevelFilter;
use serde::Deserialize;

use crate::APP_NAME;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SAVE_FILE_NAME: &str = "savegame.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Where the auto-save lives. Defaults to the platform data directory.
    pub save_path: Option<PathBuf>,
    /// Fixed RNG seed. A fresh one is generated per launch when absent.
    pub seed: Option<u64>,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: Option<String>,
    /// When set, the session's inputs are written here on exit.
    pub journal_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl AppConfig {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }

    /// Reads `path`. A missing file is `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Falls back to defaults on any problem, handing the error back so it
    /// can be logged once logging is up.
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<ConfigError>) {
        let Some(path) = path else {
            return (Self::default(), None);
        };
        match Self::load(path) {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn resolve_save_path(&self) -> PathBuf {
        self.save_path
            .clone()
            .or_else(default_save_path)
            .unwrap_or_else(|| PathBuf::from(SAVE_FILE_NAME))
    }

    /// Unknown level names fall back to `warn`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Warn)
    }
}

pub fn default_save_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join(SAVE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn full_config_parses() {
        let config = AppConfig::parse(
            r#"
save_path = "/tmp/f13/save.json"
seed = 1234
log_level = "debug"
journal_path = "/tmp/f13/journal.json"
"#,
        )
        .expect("parse");
        assert_eq!(config.save_path, Some(PathBuf::from("/tmp/f13/save.json")));
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.resolve_save_path(), PathBuf::from("/tmp/f13/save.json"));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::parse("").expect("parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn unknown_keys_and_levels() {
        assert!(matches!(AppConfig::parse("volume = 3"), Err(ConfigError::Parse(_))));
        let config = AppConfig { log_level: Some("chatty".into()), ..AppConfig::default() };
        assert_eq!(config.level_filter(), LevelFilter::Warn);
        let config = AppConfig { log_level: Some("INFO".into()), ..AppConfig::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(AppConfig::load(&path).expect("load").is_none());
        let (config, err) = AppConfig::load_or_default(Some(&path));
        assert_eq!(config, AppConfig::default());
        assert!(err.is_none());
    }

    #[test]
    fn broken_file_falls_back_with_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "seed = \"not a number\"").expect("write");
        let (config, err) = AppConfig::load_or_default(Some(&path));
        assert_eq!(config, AppConfig::default());
        assert!(err.is_some_and(|err| err.to_string().starts_with("invalid config")));
    }
}
