//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `next`: Find an unused file path for a requested name
//! - `check`: Check whether a single path is free
//! - `sanitize`: Sanitize a file name for common filesystems
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod next;
pub mod sanitize;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use next::NextCommand;
pub use sanitize::SanitizeCommand;
