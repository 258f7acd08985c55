//! Increment strategies for deriving candidate file names.
//!
//! Each search attempt maps `(stem, extension, attempt number)` to a
//! candidate name. The strategy is pluggable through the [`Incrementer`]
//! trait; [`DefaultIncrementer`] provides the `" (N)"` counter policy.

use super::MAX_FILE_NAME_LEN;

/// Error type produced by increment strategies.
///
/// Strategies report failures as boxed errors; the search engine wraps them
/// into [`crate::Error::Strategy`] with the failing attempt number attached.
pub type StrategyError = Box<dyn std::error::Error + Send + Sync>;

/// A strategy mapping a base name, extension, and attempt number to a
/// candidate file name.
///
/// Implemented by [`DefaultIncrementer`] and by any
/// `Fn(&str, &str, u32) -> String` closure, so ad-hoc strategies need no
/// boilerplate:
///
/// ```
/// use pathclaim::name::Incrementer;
///
/// let dashes = |stem: &str, ext: &str, attempt: u32| format!("{stem}-{attempt}{ext}");
/// assert_eq!(dashes.next_name("foo", ".txt", 1).unwrap(), "foo-1.txt");
/// ```
pub trait Incrementer: Send + Sync {
    /// Derive the candidate name for the given attempt.
    ///
    /// Attempt numbers start at 1 and increase by one per search iteration.
    ///
    /// # Errors
    ///
    /// A failing strategy aborts the search; the error is surfaced to the
    /// caller unretried.
    fn next_name(&self, stem: &str, ext: &str, attempt: u32) -> Result<String, StrategyError>;
}

impl<F> Incrementer for F
where
    F: Fn(&str, &str, u32) -> String + Send + Sync,
{
    fn next_name(&self, stem: &str, ext: &str, attempt: u32) -> Result<String, StrategyError> {
        Ok(self(stem, ext, attempt))
    }
}

/// The built-in `" (N)"` counter strategy.
///
/// Policy:
/// - any existing `" (N)"` counter suffix (N positive) is stripped from the
///   stem first, so repeated calls never compound suffixes;
/// - attempt 1 uses the bare name; attempt N > 1 appends `" (N)"` before
///   the extension;
/// - the stem is truncated so the whole name fits the configured length
///   ceiling. Only the stem is trimmed; the counter suffix and extension
///   stay intact.
///
/// # Examples
///
/// ```
/// use pathclaim::name::{DefaultIncrementer, Incrementer};
///
/// let inc = DefaultIncrementer::default();
/// assert_eq!(inc.next_name("foo", ".txt", 1).unwrap(), "foo.txt");
/// assert_eq!(inc.next_name("foo", ".txt", 2).unwrap(), "foo (2).txt");
/// assert_eq!(inc.next_name("foo (123)", ".txt", 1).unwrap(), "foo.txt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultIncrementer {
    max_len: Option<usize>,
}

impl DefaultIncrementer {
    /// Creates the strategy with the standard length ceiling
    /// ([`MAX_FILE_NAME_LEN`] characters).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_len: Some(MAX_FILE_NAME_LEN),
        }
    }

    /// Creates the strategy with a custom length ceiling (in characters).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathclaim::name::{DefaultIncrementer, Incrementer};
    ///
    /// let inc = DefaultIncrementer::with_max_len(10);
    /// assert_eq!(inc.next_name("abcdefghij", ".txt", 1).unwrap(), "abcdef.txt");
    /// ```
    #[must_use]
    pub const fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
        }
    }

    /// Creates the strategy with truncation disabled.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_len: None }
    }

    /// Returns the configured length ceiling, if any.
    #[must_use]
    pub const fn max_len(&self) -> Option<usize> {
        self.max_len
    }
}

impl Default for DefaultIncrementer {
    fn default() -> Self {
        Self::new()
    }
}

impl Incrementer for DefaultIncrementer {
    fn next_name(&self, stem: &str, ext: &str, attempt: u32) -> Result<String, StrategyError> {
        let stem = strip_counter_suffix(stem);

        let suffix = if attempt > 1 {
            format!(" ({attempt})")
        } else {
            String::new()
        };

        let stem = match self.max_len {
            Some(limit) => {
                let overhead = suffix.chars().count() + ext.chars().count();
                truncate_chars(stem, limit.saturating_sub(overhead))
            }
            None => stem,
        };

        Ok(format!("{stem}{suffix}{ext}"))
    }
}

/// Strip a trailing `" (N)"` counter from a stem, where N is a positive
/// integer and at least one whitespace character precedes the `(`.
///
/// `"foo (2)"` becomes `"foo"`; `"foo(2)"` and `"foo (0)"` are left alone.
fn strip_counter_suffix(stem: &str) -> &str {
    let Some(body) = stem.strip_suffix(')') else {
        return stem;
    };
    let Some(open) = body.rfind('(') else {
        return stem;
    };
    let digits = &body[open + 1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return stem;
    }
    // The counter must be positive; " (0)" is not a counter we generate.
    if !digits.bytes().any(|b| b != b'0') {
        return stem;
    }
    let head = &body[..open];
    let trimmed = head.trim_end();
    if trimmed.len() == head.len() {
        // No whitespace before the parenthesis: "foo(2)" is part of the name.
        return stem;
    }
    trimmed
}

/// Truncate a string to at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_uses_bare_name() {
        let inc = DefaultIncrementer::default();
        assert_eq!(inc.next_name("foo", ".txt", 1).unwrap(), "foo.txt");
    }

    #[test]
    fn test_later_attempts_append_counter() {
        let inc = DefaultIncrementer::default();
        assert_eq!(inc.next_name("foo", ".txt", 2).unwrap(), "foo (2).txt");
        assert_eq!(inc.next_name("foo", ".txt", 17).unwrap(), "foo (17).txt");
    }

    #[test]
    fn test_existing_counter_is_stripped() {
        let inc = DefaultIncrementer::default();
        assert_eq!(inc.next_name("foo (123)", ".txt", 1).unwrap(), "foo.txt");
        assert_eq!(inc.next_name("foo (123)", ".txt", 2).unwrap(), "foo (2).txt");
    }

    #[test]
    fn test_counter_without_whitespace_is_kept() {
        let inc = DefaultIncrementer::default();
        assert_eq!(inc.next_name("foo(2)", ".txt", 1).unwrap(), "foo(2).txt");
    }

    #[test]
    fn test_zero_counter_is_kept() {
        let inc = DefaultIncrementer::default();
        assert_eq!(inc.next_name("foo (0)", ".txt", 1).unwrap(), "foo (0).txt");
    }

    #[test]
    fn test_only_trailing_counter_is_stripped() {
        let inc = DefaultIncrementer::default();
        assert_eq!(inc.next_name("foo (2) (3)", ".txt", 1).unwrap(), "foo (2).txt");
    }

    #[test]
    fn test_non_numeric_parenthetical_is_kept() {
        let inc = DefaultIncrementer::default();
        assert_eq!(inc.next_name("foo (draft)", ".txt", 1).unwrap(), "foo (draft).txt");
        assert_eq!(inc.next_name("foo ()", ".txt", 1).unwrap(), "foo ().txt");
    }

    #[test]
    fn test_no_extension() {
        let inc = DefaultIncrementer::default();
        assert_eq!(inc.next_name("Makefile", "", 2).unwrap(), "Makefile (2)");
    }

    #[test]
    fn test_truncation_trims_stem_only() {
        let inc = DefaultIncrementer::with_max_len(12);
        // "abcdefghijkl" (12) + " (2)" (4) + ".txt" (4) must fit in 12:
        // stem budget is 12 - 8 = 4.
        let name = inc.next_name("abcdefghijkl", ".txt", 2).unwrap();
        assert_eq!(name, "abcd (2).txt");
        assert_eq!(name.chars().count(), 12);
        assert!(name.ends_with(" (2).txt"));
    }

    #[test]
    fn test_truncation_default_ceiling() {
        let inc = DefaultIncrementer::default();
        let stem = "a".repeat(400);
        let name = inc.next_name(&stem, ".txt", 2).unwrap();
        assert_eq!(name.chars().count(), MAX_FILE_NAME_LEN);
        assert!(name.ends_with(" (2).txt"));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let inc = DefaultIncrementer::with_max_len(6);
        // Four two-byte characters; budget is 6 - 4 = 2 characters.
        let name = inc.next_name("éééé", ".txt", 1).unwrap();
        assert_eq!(name, "éé.txt");
    }

    #[test]
    fn test_unbounded_skips_truncation() {
        let inc = DefaultIncrementer::unbounded();
        let stem = "a".repeat(400);
        let name = inc.next_name(&stem, ".txt", 1).unwrap();
        assert_eq!(name.chars().count(), 404);
    }

    #[test]
    fn test_short_names_never_truncated() {
        let inc = DefaultIncrementer::default();
        assert_eq!(inc.next_name("foo", ".txt", 1).unwrap(), "foo.txt");
    }

    #[test]
    fn test_closure_incrementer() {
        let dashes = |stem: &str, ext: &str, attempt: u32| format!("{stem}-{attempt}{ext}");
        assert_eq!(dashes.next_name("foo", ".txt", 3).unwrap(), "foo-3.txt");
    }

    // Property-based testing module
    // These tests verify invariants of the default increment policy.
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // PROPERTY: Generated names always respect the length ceiling
            // whenever the ceiling leaves room for the suffix and extension.
            #[test]
            fn prop_default_respects_ceiling(
                stem in "[a-zA-Z0-9 ]{0,300}",
                attempt in 1u32..=9999,
            ) {
                let inc = DefaultIncrementer::default();
                let name = inc.next_name(&stem, ".txt", attempt).unwrap();
                prop_assert!(name.chars().count() <= MAX_FILE_NAME_LEN);
            }

            // PROPERTY: Extension and counter survive truncation intact.
            #[test]
            fn prop_suffix_and_extension_preserved(
                stem in "[a-zA-Z0-9 ]{1,300}",
                attempt in 2u32..=9999,
            ) {
                let inc = DefaultIncrementer::default();
                let name = inc.next_name(&stem, ".txt", attempt).unwrap();
                let expected_suffix = format!(" ({}).txt", attempt);
                prop_assert!(name.ends_with(&expected_suffix));
            }

            // PROPERTY: The strategy is stable under its own output — feeding
            // a generated stem back in never compounds counters.
            #[test]
            fn prop_no_compounding_suffixes(
                stem in "[a-zA-Z0-9]{1,40}",
                first in 2u32..=99,
                second in 2u32..=99,
            ) {
                let inc = DefaultIncrementer::default();
                let once = inc.next_name(&stem, "", first).unwrap();
                let twice = inc.next_name(&once, "", second).unwrap();
                prop_assert_eq!(twice, format!("{} ({})", stem, second));
            }

            // PROPERTY: Attempt 1 output never carries a generated counter.
            #[test]
            fn prop_first_attempt_bare(stem in "[a-zA-Z0-9]{1,40}") {
                let inc = DefaultIncrementer::default();
                let name = inc.next_name(&stem, ".txt", 1).unwrap();
                prop_assert_eq!(name, format!("{}.txt", stem));
            }
        }
    }
}
