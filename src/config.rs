use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
pub const DEFAULT_SHAKE_MS: u64 = 400;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub submit_delay_ms: u64,
    pub shake_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            shake_ms: DEFAULT_SHAKE_MS,
            log_file: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    pub fn timing(&self) -> Timing {
        Timing {
            submit_delay: Duration::from_millis(self.submit_delay_ms),
            shake: Duration::from_millis(self.shake_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub submit_delay: Duration,
    pub shake: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Config::default().timing()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(Config::from_yaml("").expect("parse"), Config::default());
        assert_eq!(
            Config::default().timing().submit_delay,
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = Config::from_yaml("submit_delay_ms: 10\nlog_file: /tmp/regform.log\n")
            .expect("parse");
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.shake_ms, 400);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/regform.log")));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_yaml("submit_delay: 10\n").is_err());
    }
}
