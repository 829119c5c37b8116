use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use practise_logging::practise_debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const DEFAULT_CONFIG_FILENAME: &str = "practise.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PractiseConfig {
    /// Terms printed by `fib` when `--count` is absent.
    pub fib_count: usize,
    /// Random inputs added to the fixed harness cases.
    pub random_cases: usize,
    pub seed: u64,
    pub log_level: LogLevel,
    /// Also write logs to this file when set.
    pub log_file: Option<PathBuf>,
}

impl Default for PractiseConfig {
    fn default() -> Self {
        Self {
            fib_count: 10,
            random_cases: 8,
            seed: 0x5eed,
            log_level: LogLevel::Info,
            log_file: None,
        }
    }
}

/// Loads the config.
///
/// An explicit path must exist. Without one, `./practise.ron` is used if
/// present and defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<PractiseConfig, ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILENAME), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
            return Ok(PractiseConfig::default());
        }
        Err(source) => return Err(ConfigError::Io { path, source }),
    };

    let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    practise_debug!("Loaded config from {:?}", path);
    Ok(config)
}
