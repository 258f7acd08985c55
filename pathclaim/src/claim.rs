//! The successful result of a search: a reserved path and its release.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::table::ReservationTable;

/// A reserved, currently-unused file path.
///
/// Returned by [`crate::PathFinder::find`]. The path is marked in the
/// reservation table from the moment the claim is created; no other search
/// in this process will return it until [`dispose`](Self::dispose) runs.
///
/// Disposal is explicit. Dropping a claim without disposing it leaves the
/// path reserved for the rest of the process — that is the contract for
/// callers that create the file and want the name held forever, not a
/// leak. `dispose` is idempotent and safe to call from any thread.
///
/// # Examples
///
/// ```no_run
/// use pathclaim::{find_unused_path, FindOptions};
///
/// let claim = find_unused_path(&FindOptions::new("report.txt")).unwrap();
/// std::fs::write(claim.file_path(), b"...").unwrap();
/// claim.dispose();
/// ```
#[derive(Debug)]
pub struct Claim {
    file_path: PathBuf,
    folder_path: PathBuf,
    file_name: String,
    table: Arc<ReservationTable>,
    dispose_delay: Duration,
    disposed: AtomicBool,
}

impl Claim {
    /// Creates a claim over a path already reserved in `table`.
    pub(crate) fn new(
        file_path: PathBuf,
        folder_path: PathBuf,
        file_name: String,
        table: Arc<ReservationTable>,
        dispose_delay: Duration,
    ) -> Self {
        Self {
            file_path,
            folder_path,
            file_name,
            table,
            dispose_delay,
            disposed: AtomicBool::new(false),
        }
    }

    /// The reserved absolute file path.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// The folder the search ran in.
    #[must_use]
    pub fn folder_path(&self) -> &Path {
        &self.folder_path
    }

    /// The final file name, post-increment and post-sanitization.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Releases the reservation.
    ///
    /// With a zero dispose delay the path becomes eligible for reuse
    /// immediately; otherwise it stays reserved for the configured delay
    /// and is released by a timer without blocking this call.
    ///
    /// Idempotent: only the first call has any effect.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.table
            .release_after(self.file_path.clone(), self.dispose_delay);
    }

    /// Reports whether [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}
