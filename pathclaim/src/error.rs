//! Error types for the pathclaim library.
//!
//! This module provides the error hierarchy for all operations in the
//! pathclaim library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathclaim error.
///
/// # Examples
///
/// ```
/// use pathclaim::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(128)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathclaim library.
///
/// This enum encompasses all possible error conditions that can occur
/// while searching for and reserving an unused file path.
#[derive(Debug, Error)]
pub enum Error {
    /// An unusable file name was requested.
    #[error("invalid file name {name:?}: {reason}")]
    InvalidFileName {
        /// The requested file name.
        name: String,
        /// The reason the name is invalid.
        reason: String,
    },

    /// An invalid folder path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The search consumed its attempt budget without finding a free,
    /// unreserved path.
    ///
    /// This failure is terminal for the call: the engine never retries it.
    /// Callers that want to retry should do so with a larger budget.
    #[error("no unused path found after {attempts} attempt(s)")]
    AttemptsExhausted {
        /// The attempt budget that was consumed.
        attempts: u32,
    },

    /// The filesystem existence probe failed for a reason other than
    /// "not found".
    ///
    /// Not-found is the expected free-path signal; anything else (permission
    /// denied, I/O failure) aborts the search rather than being treated as
    /// "path occupied", so real problems are not silently skipped.
    #[error("existence probe failed for {}: {source}", path.display())]
    Probe {
        /// The path whose probe failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A custom increment strategy failed.
    #[error("increment strategy failed on attempt {attempt}: {source}")]
    Strategy {
        /// The attempt number the strategy was invoked with.
        attempt: u32,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is the terminal attempts-exhausted failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathclaim::Error;
    ///
    /// let err = Error::AttemptsExhausted { attempts: 128 };
    /// assert!(err.is_attempts_exhausted());
    /// ```
    #[must_use]
    pub fn is_attempts_exhausted(&self) -> bool {
        matches!(self, Self::AttemptsExhausted { .. })
    }

    /// Check if the error came from the filesystem existence probe.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathclaim::Error;
    /// use std::path::PathBuf;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    /// let err = Error::Probe { path: PathBuf::from("/restricted/foo.txt"), source: io };
    /// assert!(err.is_probe_failure());
    /// ```
    #[must_use]
    pub fn is_probe_failure(&self) -> bool {
        matches!(self, Self::Probe { .. })
    }

    /// Check if the error came from a custom increment strategy.
    #[must_use]
    pub fn is_strategy_failure(&self) -> bool {
        matches!(self, Self::Strategy { .. })
    }
}
