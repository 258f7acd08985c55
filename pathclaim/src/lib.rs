#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathclaim
//!
//! A library for reserving unused file paths.
//!
//! Given a desired file name and folder, pathclaim finds a path that is not
//! in use — neither on disk nor handed out to another in-flight request in
//! this process — reserves it, and returns it with a release mechanism.
//! Callers use it to allocate an output file name before creating the file
//! themselves, without two concurrent callers computing the same "first
//! free" name.
//!
//! ## Core Types
//!
//! - [`FindOptions`] and [`PathFinder`]: the search and its configuration
//! - [`Claim`]: a reserved path plus its `dispose` release
//! - [`ReservationTable`]: the process-local set of reserved paths
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```no_run
//! use pathclaim::{find_unused_path, FindOptions};
//!
//! // If ./report.txt is taken, this yields "./report (2).txt" and so on.
//! let claim = find_unused_path(&FindOptions::new("report.txt")).unwrap();
//! std::fs::write(claim.file_path(), b"...").unwrap();
//! claim.dispose();
//! ```
//!
//! The reservation table only coordinates callers within one process; it is
//! not a cross-process lock, and the library never creates the file itself.

pub mod claim;
pub mod config;
pub mod error;
pub mod finder;
pub mod logging;
pub mod name;
pub mod path;
pub mod probe;
pub mod table;

// Re-export key types at crate root for convenience
pub use claim::Claim;
pub use config::Config;
pub use error::{Error, Result};
pub use finder::{find_unused_path, FindOptions, PathFinder, DEFAULT_MAX_ATTEMPTS};
pub use logging::{init_logger, LogLevel, Logger};
pub use name::{sanitize, DefaultIncrementer, Incrementer, MAX_FILE_NAME_LEN};
pub use probe::{FsProbe, MockProbe, PathProbe};
pub use table::ReservationTable;
