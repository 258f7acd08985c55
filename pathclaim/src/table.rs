//! The in-process reservation table.
//!
//! The table exists to close the time-of-check-to-time-of-use gap inherent
//! in "probe the filesystem, then act on the result": between the moment
//! the engine observes a path as free and the moment the caller actually
//! creates the file, another concurrent request in the same process must
//! not observe the same path as free. Filesystem probing alone cannot
//! provide this, so reserved paths are tracked here until released.
//!
//! The table is process-local only. It is never persisted and provides no
//! cross-process coordination.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::thread;
use std::time::Duration;

/// Set of currently reserved absolute paths.
///
/// All operations are safe to call concurrently from multiple threads; the
/// check-and-insert of [`try_reserve`](Self::try_reserve) is a single
/// critical section, so two racing searches can never both reserve the same
/// path.
///
/// One shared instance ([`ReservationTable::shared`]) lives for the process
/// duration; fresh instances are constructible for isolated tests.
///
/// # Examples
///
/// ```
/// use pathclaim::ReservationTable;
/// use std::path::Path;
///
/// let table = ReservationTable::new();
/// let path = Path::new("/tmp/report.txt");
///
/// assert!(table.try_reserve(path));
/// assert!(table.is_reserved(path));
/// assert!(!table.try_reserve(path));
///
/// table.release(path);
/// assert!(!table.is_reserved(path));
/// ```
#[derive(Debug, Default)]
pub struct ReservationTable {
    paths: Mutex<HashSet<PathBuf>>,
}

impl ReservationTable {
    /// Creates an empty reservation table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide shared table.
    ///
    /// Constructed on first use and alive until process exit. All searches
    /// that go through [`crate::find_unused_path`] or
    /// [`crate::PathFinder::new`] coordinate through this instance.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<ReservationTable>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::new())))
    }

    /// Marks a path as reserved, unconditionally.
    ///
    /// Idempotent: reserving an already-reserved path is a no-op.
    pub fn reserve(&self, path: impl Into<PathBuf>) {
        self.lock().insert(path.into());
    }

    /// Atomically reserves a path if it is not already reserved.
    ///
    /// Returns `true` when the reservation was newly made, `false` when the
    /// path was already reserved. This is the guard the search engine uses
    /// between "probe said free" and "hand the path out": the lookup and
    /// insert happen under one lock, so no other thread can slip in
    /// between.
    pub fn try_reserve(&self, path: impl Into<PathBuf>) -> bool {
        self.lock().insert(path.into())
    }

    /// Reports whether a path is currently reserved.
    ///
    /// Pure lookup, no side effects.
    #[must_use]
    pub fn is_reserved(&self, path: impl AsRef<Path>) -> bool {
        self.lock().contains(path.as_ref())
    }

    /// Unmarks a path, unconditionally.
    ///
    /// Idempotent: releasing an unreserved path is a no-op.
    pub fn release(&self, path: impl AsRef<Path>) {
        if self.lock().remove(path.as_ref()) {
            log::debug!("released reservation for {}", path.as_ref().display());
        }
    }

    /// Schedules a release to run after `delay`, without blocking the
    /// caller.
    ///
    /// A zero delay releases immediately. Otherwise the release runs on a
    /// detached timer thread; it is best-effort at process shutdown — a
    /// missed delayed release leaves the path reserved until exit, which
    /// costs nothing beyond the entry itself.
    pub fn release_after(self: &Arc<Self>, path: PathBuf, delay: Duration) {
        if delay.is_zero() {
            self.release(&path);
            return;
        }

        let table = Arc::clone(self);
        thread::spawn(move || {
            thread::sleep(delay);
            table.release(&path);
        });
    }

    /// Returns the number of currently reserved paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether the table holds no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Locks the path set, recovering from poisoning.
    ///
    /// A panic elsewhere must not wedge every future search; the set itself
    /// cannot be left half-mutated by any operation here.
    fn lock(&self) -> MutexGuard<'_, HashSet<PathBuf>> {
        match self.paths.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_new_table_is_empty() {
        let table = ReservationTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_reserve_and_lookup() {
        let table = ReservationTable::new();
        table.reserve("/tmp/foo.txt");

        assert!(table.is_reserved("/tmp/foo.txt"));
        assert!(!table.is_reserved("/tmp/bar.txt"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_reserve_is_idempotent() {
        let table = ReservationTable::new();
        table.reserve("/tmp/foo.txt");
        table.reserve("/tmp/foo.txt");

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_try_reserve_reports_collisions() {
        let table = ReservationTable::new();

        assert!(table.try_reserve("/tmp/foo.txt"));
        assert!(!table.try_reserve("/tmp/foo.txt"));

        table.release("/tmp/foo.txt");
        assert!(table.try_reserve("/tmp/foo.txt"));
    }

    #[test]
    fn test_release_is_idempotent() {
        let table = ReservationTable::new();
        table.reserve("/tmp/foo.txt");

        table.release("/tmp/foo.txt");
        table.release("/tmp/foo.txt");

        assert!(!table.is_reserved("/tmp/foo.txt"));
    }

    #[test]
    fn test_release_after_zero_delay_is_immediate() {
        let table = Arc::new(ReservationTable::new());
        table.reserve("/tmp/foo.txt");

        table.release_after(PathBuf::from("/tmp/foo.txt"), Duration::ZERO);
        assert!(!table.is_reserved("/tmp/foo.txt"));
    }

    #[test]
    fn test_release_after_honors_delay() {
        let table = Arc::new(ReservationTable::new());
        table.reserve("/tmp/foo.txt");

        let start = Instant::now();
        table.release_after(PathBuf::from("/tmp/foo.txt"), Duration::from_millis(150));

        // The call must not block, and the path stays reserved during the
        // delay window.
        assert!(start.elapsed() < Duration::from_millis(100));
        assert!(table.is_reserved("/tmp/foo.txt"));

        // Poll until the timer thread fires, with a generous upper bound.
        let deadline = Instant::now() + Duration::from_secs(5);
        while table.is_reserved("/tmp/foo.txt") {
            assert!(Instant::now() < deadline, "delayed release never fired");
            thread::sleep(Duration::from_millis(10));
        }
        assert!(start.elapsed() >= Duration::from_millis(150));
    }

    #[test]
    fn test_concurrent_try_reserve_single_winner() {
        let table = Arc::new(ReservationTable::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let table = Arc::clone(&table);
                thread::spawn(move || table.try_reserve("/tmp/contended.txt"))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_shared_table_is_the_same_instance() {
        let a = ReservationTable::shared();
        let b = ReservationTable::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
