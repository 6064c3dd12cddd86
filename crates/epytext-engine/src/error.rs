use thiserror::Error;

/// Fieldless discriminant of a [`ParseError`], for callers that need to
/// branch on what went wrong without matching payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoMatch,
    TooManyLines,
    MaxExpressionsLimit,
    InvalidEncoding,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A non-blank line matched none of the block alternatives.
    #[error("no block matches line {line}")]
    NoMatch { line: usize },
    /// Input was cut down to `max` lines before parsing.
    #[error("input truncated to {max} lines")]
    TooManyLines { max: usize },
    /// The recognition budget ran out.
    #[error("expression budget of {limit} exhausted")]
    MaxExpressionsLimit { limit: usize },
    /// A byte at `offset` is not valid UTF-8; it was replaced with U+FFFD.
    #[error("invalid UTF-8 byte at offset {offset}")]
    InvalidEncoding { offset: usize },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::NoMatch { .. } => ErrorKind::NoMatch,
            ParseError::TooManyLines { .. } => ErrorKind::TooManyLines,
            ParseError::MaxExpressionsLimit { .. } => ErrorKind::MaxExpressionsLimit,
            ParseError::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
        }
    }

    /// Fatal errors stop the parse; the others accompany a usable tree.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NoMatch | ErrorKind::MaxExpressionsLimit
        )
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_and_encoding_are_not_fatal() {
        assert!(!ParseError::TooManyLines { max: 2 }.is_fatal());
        assert!(!ParseError::InvalidEncoding { offset: 0 }.is_fatal());
    }

    #[test]
    fn no_match_and_budget_are_fatal() {
        assert!(ParseError::NoMatch { line: 3 }.is_fatal());
        assert!(ParseError::MaxExpressionsLimit { limit: 10 }.is_fatal());
    }

    #[test]
    fn kind_ignores_payload() {
        assert_eq!(
            ParseError::InvalidEncoding { offset: 7 }.kind(),
            ParseError::InvalidEncoding { offset: 99 }.kind()
        );
    }

    #[test]
    fn messages_mention_payload() {
        assert_eq!(
            ParseError::TooManyLines { max: 2 }.to_string(),
            "input truncated to 2 lines"
        );
    }
}
