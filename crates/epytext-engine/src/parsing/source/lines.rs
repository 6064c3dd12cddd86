/// A single input line with its zero-based line number.
///
/// `text` excludes the line terminator (`\n` or `\r\n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text`.
///
/// A trailing newline does not produce an extra empty line.
pub fn lines(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    text.split_inclusive('\n')
        .enumerate()
        .map(|(number, raw)| LineRef {
            number,
            text: raw.trim_end_matches('\n').trim_end_matches('\r'),
        })
}

/// Cuts `text` down to its first `max` lines.
///
/// Returns `None` when no truncation was needed (or `max` is 0, meaning
/// unlimited).
pub fn truncate_lines(text: &str, max: usize) -> Option<&str> {
    if max == 0 {
        return None;
    }
    let mut end = 0usize;
    for (i, raw) in text.split_inclusive('\n').enumerate() {
        if i == max {
            return Some(&text[..end]);
        }
        end += raw.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_strip_terminators() {
        let got: Vec<_> = lines("a\r\nb\nc").map(|l| l.text).collect();
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(lines("a\nb\n").count(), 2);
    }

    #[test]
    fn blank_lines_are_kept() {
        let got: Vec<_> = lines("a\n\nb").map(|l| (l.number, l.text)).collect();
        assert_eq!(got, vec![(0, "a"), (1, ""), (2, "b")]);
    }

    #[test]
    fn truncate_within_limit() {
        assert_eq!(truncate_lines("a\nb\n", 2), None);
        assert_eq!(truncate_lines("a\nb", 5), None);
    }

    #[test]
    fn truncate_over_limit() {
        assert_eq!(truncate_lines("a\nb\nc\n", 2), Some("a\nb\n"));
        assert_eq!(truncate_lines("a\nb\nc", 1), Some("a\n"));
    }

    #[test]
    fn zero_means_unlimited() {
        assert_eq!(truncate_lines("a\nb\nc\n", 0), None);
    }
}
