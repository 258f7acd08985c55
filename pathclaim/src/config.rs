//! Configuration loading for search defaults.
//!
//! Searches are usually configured per call through
//! [`FindOptions`](crate::FindOptions); this module supports hosts (such as
//! the CLI) that want file- or environment-driven defaults for the policy
//! knobs: the attempt budget, the attempt-counting mode, the dispose delay,
//! and name-length truncation.
//!
//! Precedence is file, then `PATHCLAIM_*` environment variables, then
//! built-in defaults for anything left unset.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::finder::{FindOptions, DEFAULT_MAX_ATTEMPTS};
use crate::name::{DefaultIncrementer, MAX_FILE_NAME_LEN};

/// Configuration for search defaults.
///
/// Every field is optional; unset fields fall back to the library defaults
/// documented on [`FindOptions`](crate::FindOptions) and
/// [`DefaultIncrementer`].
///
/// # Examples
///
/// ```
/// use pathclaim::Config;
///
/// let config: Config = serde_yaml::from_str("max_attempts: 256\n").unwrap();
/// assert_eq!(config.max_attempts, Some(256));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Attempt budget for searches (default 128).
    pub max_attempts: Option<u32>,

    /// Whether only filesystem-touching attempts consume the budget
    /// (default false).
    pub count_filesystem_attempts_only: Option<bool>,

    /// Delay, in milliseconds, between disposing a claim and the path
    /// becoming eligible again (default 0).
    pub dispose_delay_ms: Option<u64>,

    /// Whether generated names are truncated to the length ceiling
    /// (default true).
    pub truncate: Option<bool>,

    /// Length ceiling, in characters, for generated names (default 128).
    pub max_file_name_len: Option<usize>,
}

impl Config {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// parsed values fail validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `PATHCLAIM_*` environment variable overrides.
    ///
    /// Recognized variables: `PATHCLAIM_MAX_ATTEMPTS`,
    /// `PATHCLAIM_COUNT_FS_ONLY`, `PATHCLAIM_DISPOSE_DELAY_MS`,
    /// `PATHCLAIM_TRUNCATE`, `PATHCLAIM_MAX_NAME_LEN`.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable holds an unparseable value.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(val) = env::var("PATHCLAIM_MAX_ATTEMPTS") {
            self.max_attempts = Some(parse_number("PATHCLAIM_MAX_ATTEMPTS", &val)?);
        }
        if let Ok(val) = env::var("PATHCLAIM_COUNT_FS_ONLY") {
            self.count_filesystem_attempts_only =
                Some(parse_bool("PATHCLAIM_COUNT_FS_ONLY", &val)?);
        }
        if let Ok(val) = env::var("PATHCLAIM_DISPOSE_DELAY_MS") {
            self.dispose_delay_ms = Some(parse_number("PATHCLAIM_DISPOSE_DELAY_MS", &val)?);
        }
        if let Ok(val) = env::var("PATHCLAIM_TRUNCATE") {
            self.truncate = Some(parse_bool("PATHCLAIM_TRUNCATE", &val)?);
        }
        if let Ok(val) = env::var("PATHCLAIM_MAX_NAME_LEN") {
            self.max_file_name_len = Some(parse_number("PATHCLAIM_MAX_NAME_LEN", &val)?);
        }
        self.validate()
    }

    /// Merges another configuration over this one.
    ///
    /// Fields set in `other` take precedence; unset fields keep this
    /// configuration's values.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            max_attempts: other.max_attempts.or(self.max_attempts),
            count_filesystem_attempts_only: other
                .count_filesystem_attempts_only
                .or(self.count_filesystem_attempts_only),
            dispose_delay_ms: other.dispose_delay_ms.or(self.dispose_delay_ms),
            truncate: other.truncate.or(self.truncate),
            max_file_name_len: other.max_file_name_len.or(self.max_file_name_len),
        }
    }

    /// Validates the configured values.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` or `max_file_name_len` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == Some(0) {
            return Err(Error::Validation {
                field: "max_attempts".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.max_file_name_len == Some(0) {
            return Err(Error::Validation {
                field: "max_file_name_len".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Builds search options for `file_name` with this configuration's
    /// defaults applied.
    #[must_use]
    pub fn find_options(&self, file_name: impl Into<String>) -> FindOptions {
        FindOptions::new(file_name)
            .with_max_attempts(self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS))
            .with_count_filesystem_attempts_only(
                self.count_filesystem_attempts_only.unwrap_or(false),
            )
            .with_dispose_delay(Duration::from_millis(self.dispose_delay_ms.unwrap_or(0)))
    }

    /// Builds the default increment strategy matching this configuration's
    /// truncation settings.
    #[must_use]
    pub fn incrementer(&self) -> DefaultIncrementer {
        if self.truncate == Some(false) {
            return DefaultIncrementer::unbounded();
        }
        DefaultIncrementer::with_max_len(self.max_file_name_len.unwrap_or(MAX_FILE_NAME_LEN))
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(Error::Validation {
            field: field.to_string(),
            message: format!("expected a boolean, got {value:?}"),
        }),
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::Validation {
        field: field.to_string(),
        message: format!("expected a non-negative integer, got {value:?}"),
    })
}
