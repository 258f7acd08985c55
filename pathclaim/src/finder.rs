//! The search engine: find and reserve an unused file path.
//!
//! This module implements the core retry loop, which derives candidate
//! names from the increment strategy and returns the first candidate that
//! is neither reserved in-process nor present on the filesystem.
//!
//! The availability check is two-tiered: the reservation table is consulted
//! first (cheap, in-memory), and the filesystem probe runs only for
//! candidates the table does not already rule out (expensive). The engine
//! never mutates the filesystem; creating the file is the caller's job.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::claim::Claim;
use crate::error::{Error, Result};
use crate::name::{sanitize, split_file_name, DefaultIncrementer, Incrementer};
use crate::path::normalize_folder;
use crate::probe::{FsProbe, PathProbe};
use crate::table::ReservationTable;

/// Default attempt budget for a search.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 128;

/// Options for a search.
///
/// Only the initial file name is required; everything else has documented
/// defaults.
///
/// # Examples
///
/// ```
/// use pathclaim::FindOptions;
/// use std::time::Duration;
///
/// let options = FindOptions::new("report.txt")
///     .with_folder_path("/tmp/out")
///     .with_max_attempts(256)
///     .with_dispose_delay(Duration::from_millis(500));
/// assert_eq!(options.max_attempts(), 256);
/// ```
#[derive(Clone)]
pub struct FindOptions {
    file_name: String,
    folder_path: Option<PathBuf>,
    max_attempts: u32,
    count_filesystem_attempts_only: bool,
    dispose_delay: Duration,
    incrementer: Option<Arc<dyn Incrementer>>,
}

impl FindOptions {
    /// Creates options for the given initial file name (with extension).
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            folder_path: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            count_filesystem_attempts_only: false,
            dispose_delay: Duration::ZERO,
            incrementer: None,
        }
    }

    /// Sets the folder to search in (default: current working directory).
    #[must_use]
    pub fn with_folder_path(mut self, folder_path: impl Into<PathBuf>) -> Self {
        self.folder_path = Some(folder_path.into());
        self
    }

    /// Sets the attempt budget (default: [`DEFAULT_MAX_ATTEMPTS`]).
    ///
    /// Must be at least 1; validated when the search starts.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// When enabled, only attempts that reach the filesystem probe consume
    /// the budget; in-table collisions are skipped for free (default:
    /// disabled, every attempt counts).
    ///
    /// This keeps a burst of in-process collisions on the same name from
    /// exhausting the budget before the filesystem is ever consulted.
    #[must_use]
    pub fn with_count_filesystem_attempts_only(mut self, enabled: bool) -> Self {
        self.count_filesystem_attempts_only = enabled;
        self
    }

    /// Sets how long a disposed path stays reserved before it becomes
    /// eligible again (default: zero, released immediately).
    #[must_use]
    pub fn with_dispose_delay(mut self, delay: Duration) -> Self {
        self.dispose_delay = delay;
        self
    }

    /// Sets a custom increment strategy for this search, overriding the
    /// finder's default.
    #[must_use]
    pub fn with_incrementer(mut self, incrementer: Arc<dyn Incrementer>) -> Self {
        self.incrementer = Some(incrementer);
        self
    }

    /// The requested initial file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The requested folder, if any.
    #[must_use]
    pub fn folder_path(&self) -> Option<&Path> {
        self.folder_path.as_deref()
    }

    /// The attempt budget.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether only filesystem-touching attempts consume the budget.
    #[must_use]
    pub fn count_filesystem_attempts_only(&self) -> bool {
        self.count_filesystem_attempts_only
    }

    /// The dispose delay.
    #[must_use]
    pub fn dispose_delay(&self) -> Duration {
        self.dispose_delay
    }

    fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(Error::InvalidFileName {
                name: self.file_name.clone(),
                reason: "file name must be non-empty".to_string(),
            });
        }
        if self.max_attempts == 0 {
            return Err(Error::Validation {
                field: "max_attempts".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for FindOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindOptions")
            .field("file_name", &self.file_name)
            .field("folder_path", &self.folder_path)
            .field("max_attempts", &self.max_attempts)
            .field(
                "count_filesystem_attempts_only",
                &self.count_filesystem_attempts_only,
            )
            .field("dispose_delay", &self.dispose_delay)
            .field(
                "incrementer",
                &self.incrementer.as_ref().map(|_| "<custom>"),
            )
            .finish()
    }
}

/// The search engine.
///
/// Holds the probe, the reservation table searches coordinate through, and
/// the fallback increment strategy. The engine is stateless between calls;
/// all shared state lives in the table.
///
/// # Type Parameters
///
/// * `P` - The path probe implementation (defaults to [`FsProbe`])
///
/// # Examples
///
/// ```
/// use pathclaim::{FindOptions, PathFinder, ReservationTable};
/// use pathclaim::probe::MockProbe;
/// use std::sync::Arc;
///
/// let finder = PathFinder::with_probe(MockProbe::empty())
///     .with_table(Arc::new(ReservationTable::new()));
///
/// let claim = finder
///     .find(&FindOptions::new("report.txt").with_folder_path("/tmp/out"))
///     .unwrap();
/// assert_eq!(claim.file_name(), "report.txt");
/// ```
#[derive(Clone)]
pub struct PathFinder<P: PathProbe = FsProbe> {
    probe: P,
    table: Arc<ReservationTable>,
    incrementer: Arc<dyn Incrementer>,
}

impl PathFinder<FsProbe> {
    /// Creates a finder over the real filesystem and the process-wide
    /// shared reservation table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_probe(FsProbe)
    }
}

impl Default for PathFinder<FsProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PathProbe> PathFinder<P> {
    /// Creates a finder with a custom probe, over the process-wide shared
    /// reservation table and the default increment strategy.
    #[must_use]
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            table: ReservationTable::shared(),
            incrementer: Arc::new(DefaultIncrementer::default()),
        }
    }

    /// Replaces the reservation table, e.g. with an isolated instance for
    /// tests that must not leak reservations across cases.
    #[must_use]
    pub fn with_table(mut self, table: Arc<ReservationTable>) -> Self {
        self.table = table;
        self
    }

    /// Replaces the fallback increment strategy used when the options do
    /// not carry their own.
    #[must_use]
    pub fn with_incrementer(mut self, incrementer: Arc<dyn Incrementer>) -> Self {
        self.incrementer = incrementer;
        self
    }

    /// The reservation table this finder coordinates through.
    #[must_use]
    pub fn table(&self) -> &Arc<ReservationTable> {
        &self.table
    }

    /// Finds and reserves an unused file path.
    ///
    /// Candidates are derived per attempt from the increment strategy,
    /// checked against the reservation table, and probed on the filesystem
    /// only when the table does not rule them out. The first free candidate
    /// is reserved and returned as a [`Claim`]; the reservation holds until
    /// the claim is disposed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the options fail validation (empty name, zero attempt budget)
    /// - the folder path cannot be normalized
    /// - the attempt budget runs out ([`Error::AttemptsExhausted`])
    /// - the filesystem probe fails for a reason other than "not found"
    /// - a custom increment strategy fails
    ///
    /// Probe and strategy failures abort the search immediately and are
    /// never retried by the engine; retry policy belongs to the caller.
    pub fn find(&self, options: &FindOptions) -> Result<Claim> {
        options.validate()?;

        let sanitized = sanitize(&options.file_name);
        let (stem, ext) = split_file_name(&sanitized);
        let folder = normalize_folder(options.folder_path())?;

        let incrementer: &dyn Incrementer = options
            .incrementer
            .as_deref()
            .unwrap_or(self.incrementer.as_ref());

        let max_attempts = options.max_attempts;
        let mut attempt: u32 = 1;
        let mut spent: u32 = 0;

        loop {
            if spent >= max_attempts {
                return Err(Error::AttemptsExhausted {
                    attempts: max_attempts,
                });
            }

            let candidate =
                incrementer
                    .next_name(stem, ext, attempt)
                    .map_err(|source| Error::Strategy { attempt, source })?;
            let file_name = sanitize(&candidate);
            let file_path = folder.join(&file_name);

            if self.table.is_reserved(&file_path) {
                log::debug!(
                    "attempt {attempt}: {} reserved in-process, skipping",
                    file_path.display()
                );
                if !options.count_filesystem_attempts_only {
                    spent += 1;
                }
                attempt = attempt.saturating_add(1);
                continue;
            }

            // Real work from here on: probing always consumes budget.
            let occupied = self.probe.exists(&file_path)?;
            spent += 1;

            if occupied {
                log::debug!(
                    "attempt {attempt}: {} exists on disk, skipping",
                    file_path.display()
                );
                attempt = attempt.saturating_add(1);
                continue;
            }

            if !self.table.try_reserve(&file_path) {
                // Another thread reserved this path between our probe and
                // the insert; treat it like any other collision.
                log::debug!(
                    "attempt {attempt}: lost reservation race for {}",
                    file_path.display()
                );
                attempt = attempt.saturating_add(1);
                continue;
            }

            log::debug!("reserved {} after {attempt} attempt(s)", file_path.display());

            return Ok(Claim::new(
                file_path,
                folder,
                file_name,
                Arc::clone(&self.table),
                options.dispose_delay,
            ));
        }
    }
}

/// Finds and reserves an unused file path using the real filesystem and the
/// process-wide shared reservation table.
///
/// One-call convenience over [`PathFinder::new`]; see [`PathFinder::find`]
/// for the algorithm and error conditions.
///
/// # Errors
///
/// Same conditions as [`PathFinder::find`].
///
/// # Examples
///
/// ```no_run
/// use pathclaim::{find_unused_path, FindOptions};
///
/// let claim = find_unused_path(&FindOptions::new("report.txt")).unwrap();
/// println!("{}", claim.file_path().display());
/// claim.dispose();
/// ```
pub fn find_unused_path(options: &FindOptions) -> Result<Claim> {
    PathFinder::new().find(options)
}
