//! Filesystem existence probing.
//!
//! This module provides trait-based existence checking to determine whether
//! a candidate path is already in use on disk. The design uses traits for
//! testability, allowing both real filesystem checks and mock
//! implementations for testing.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Trait for checking whether a path exists on the filesystem.
///
/// This is the expensive half of the availability check: the engine only
/// probes the filesystem for candidates the reservation table does not
/// already rule out.
///
/// # Examples
///
/// ```
/// use pathclaim::probe::{FsProbe, PathProbe};
/// use std::path::Path;
///
/// let probe = FsProbe;
/// let exists = probe.exists(Path::new("/definitely/not/here.txt")).unwrap();
/// assert!(!exists);
/// ```
pub trait PathProbe: Send + Sync {
    /// Check whether the path currently exists.
    ///
    /// Returns `Ok(true)` if the path is occupied, `Ok(false)` if it is
    /// free. "Not found" is the expected free-path signal, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the check itself fails (permission denied, I/O
    /// failure). Such failures abort the search rather than being treated
    /// as "occupied", so real problems are not silently skipped.
    fn exists(&self, path: &Path) -> Result<bool>;
}

/// Production implementation backed by the real filesystem.
///
/// Uses `symlink_metadata`, so a dangling symlink counts as occupied:
/// creating a file at that path would not succeed cleanly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> Result<bool> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::Probe {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

/// Mock implementation for testing with a configurable set of present paths.
///
/// This probe allows tests to specify exactly which paths should be
/// considered occupied, enabling deterministic testing without touching the
/// filesystem.
///
/// # Examples
///
/// ```
/// use pathclaim::probe::{MockProbe, PathProbe};
/// use std::path::Path;
///
/// let mut probe = MockProbe::empty();
/// probe.mark_present("/tmp/foo.txt");
///
/// assert!(probe.exists(Path::new("/tmp/foo.txt")).unwrap());
/// assert!(!probe.exists(Path::new("/tmp/bar.txt")).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockProbe {
    present: HashSet<PathBuf>,
}

impl MockProbe {
    /// Create a mock probe with the given set of present paths.
    #[must_use]
    pub fn new(present: HashSet<PathBuf>) -> Self {
        Self { present }
    }

    /// Create an empty mock probe (every path is free).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mark a path as present on the mock filesystem.
    pub fn mark_present(&mut self, path: impl Into<PathBuf>) {
        self.present.insert(path.into());
    }

    /// Mark a path as absent on the mock filesystem.
    pub fn mark_absent(&mut self, path: impl AsRef<Path>) {
        self.present.remove(path.as_ref());
    }

    /// Get the set of present paths.
    #[must_use]
    pub fn present_paths(&self) -> &HashSet<PathBuf> {
        &self.present
    }
}

impl PathProbe for MockProbe {
    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(self.present.contains(path))
    }
}
