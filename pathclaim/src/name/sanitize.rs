//! File-name sanitization.
//!
//! Strips characters that are unsafe on common filesystems so that every
//! candidate name the engine produces can actually be created on disk.

/// Fallback name used when sanitization leaves nothing usable.
const FALLBACK_NAME: &str = "untitled";

/// Characters rejected on at least one mainstream filesystem.
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strip characters unsafe for common filesystems from a candidate name.
///
/// Removes control characters and the reserved set `<>:"/\|?*`, then trims
/// trailing dots and spaces (rejected on Windows). Names that sanitize to
/// nothing — including the special entries `.` and `..` — become
/// `"untitled"`.
///
/// This is a pure function: it never consults the filesystem.
///
/// # Examples
///
/// ```
/// use pathclaim::name::sanitize;
///
/// assert_eq!(sanitize("foo.txt"), "foo.txt");
/// assert_eq!(sanitize("a/b\\c.txt"), "abc.txt");
/// assert_eq!(sanitize("report?.pdf"), "report.pdf");
/// assert_eq!(sanitize("trailing. . "), "trailing");
/// assert_eq!(sanitize("???"), "untitled");
/// ```
#[must_use]
pub fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control() && !RESERVED_CHARS.contains(c))
        .collect();

    let trimmed = cleaned.trim_end_matches(['.', ' ']);

    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_unchanged() {
        assert_eq!(sanitize("foo.txt"), "foo.txt");
        assert_eq!(sanitize("foo (2).txt"), "foo (2).txt");
        assert_eq!(sanitize(".env"), ".env");
    }

    #[test]
    fn test_strips_path_separators() {
        assert_eq!(sanitize("a/b/c.txt"), "abc.txt");
        assert_eq!(sanitize("a\\b.txt"), "ab.txt");
    }

    #[test]
    fn test_strips_reserved_characters() {
        assert_eq!(sanitize("re<po>rt:\"v|1?*.pdf"), "reportv1.pdf");
        assert_eq!(sanitize("what?.txt"), "what.txt");
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(sanitize("fo\x00o\n.txt"), "foo.txt");
        assert_eq!(sanitize("tab\there"), "tabhere");
    }

    #[test]
    fn test_trims_trailing_dots_and_spaces() {
        assert_eq!(sanitize("name."), "name");
        assert_eq!(sanitize("name . . "), "name");
    }

    #[test]
    fn test_empty_input_falls_back() {
        assert_eq!(sanitize(""), "untitled");
        assert_eq!(sanitize("???"), "untitled");
        assert_eq!(sanitize("..."), "untitled");
    }

    #[test]
    fn test_parent_dir_entry_falls_back() {
        // ".." trims to empty; a literal parent-dir entry must never survive.
        assert_eq!(sanitize(".."), "untitled");
    }

    #[test]
    fn test_unicode_preserved() {
        assert_eq!(sanitize("résumé.pdf"), "résumé.pdf");
        assert_eq!(sanitize("日本語.txt"), "日本語.txt");
    }
}
