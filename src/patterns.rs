//! Compiled grammar patterns shared by the splitter and the field parser.
use once_cell::sync::Lazy;
use regex::Regex;

/// A single line break: `\r\n`, `\r` or `\n`.
///
/// `\r\n` is listed first so that leftmost-first matching never splits it
/// into two breaks.
pub(crate) static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("Invalid line break pattern"));

/// A maximal run of line-break characters.
///
/// Whether a run separates records depends on how many breaks it holds, see
/// [`is_record_break`].
pub(crate) static BREAK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n]+").expect("Invalid break run pattern"));

/// The field separator: a colon followed by any number of spaces.
pub(crate) static FIELD_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r": *").expect("Invalid field separator pattern"));

/// Whether a run of `\r`/`\n` characters contains two or more line breaks.
///
/// The only runs holding a single break are `\n`, `\r` and `\r\n`.
pub(crate) fn is_record_break(run: &[u8]) -> bool {
    !matches!(run, b"\n" | b"\r" | b"\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break_keeps_crlf_whole() {
        let lines: Vec<_> = LINE_BREAK.split("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_record_break_runs() {
        for run in ["\n\n", "\r\r", "\r\n\r\n", "\n\r\n", "\r\n\n", "\n\n\n", "\n\r"] {
            let run = run.as_bytes();
            assert!(is_record_break(run), "{run:?} should separate records");
        }
        for run in ["\n", "\r", "\r\n"] {
            let run = run.as_bytes();
            assert!(!is_record_break(run), "{run:?} is a single break");
        }
    }

    #[test]
    fn test_separator_swallows_following_spaces() {
        let parts: Vec<_> = FIELD_SEPARATOR.splitn("data:   {\"a\": 1}", 2).collect();
        assert_eq!(parts, vec!["data", "{\"a\": 1}"]);
    }
}
