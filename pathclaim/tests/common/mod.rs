//! Common test utilities for integration tests.

use std::sync::Arc;

use pathclaim::{PathFinder, ReservationTable};
use tempfile::TempDir;

/// Creates a temporary directory for testing.
///
/// The directory is cleaned up when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Creates a finder over the real filesystem with an isolated reservation
/// table, so reservations never leak across test cases.
#[allow(dead_code)]
pub fn isolated_finder() -> PathFinder {
    PathFinder::new().with_table(Arc::new(ReservationTable::new()))
}
