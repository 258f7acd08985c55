//! File-name handling: splitting, sanitization, and increment strategies.
//!
//! A requested file name is sanitized, split into a stem and an extension,
//! and then re-derived each attempt by an [`Incrementer`]. The default
//! strategy appends `" (N)"` counters before the extension; see
//! [`DefaultIncrementer`] for the exact policy.

mod increment;
mod sanitize;

pub use increment::{DefaultIncrementer, Incrementer, StrategyError};
pub use sanitize::sanitize;

/// Length ceiling (in characters) applied to generated file names by the
/// default increment strategy.
pub const MAX_FILE_NAME_LEN: usize = 128;

/// Split a file name into its stem and extension.
///
/// The extension starts at the last dot, unless that dot is the first
/// character of the name (dotfiles have no extension). The dot itself
/// belongs to the extension.
///
/// # Examples
///
/// ```
/// use pathclaim::name::split_file_name;
///
/// assert_eq!(split_file_name("foo.txt"), ("foo", ".txt"));
/// assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_file_name(".env"), (".env", ""));
/// assert_eq!(split_file_name("README"), ("README", ""));
/// ```
#[must_use]
pub fn split_file_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}
