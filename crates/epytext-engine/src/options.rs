use serde::{Deserialize, Serialize};

/// Knobs recognized by [`crate::parse`].
///
/// A limit of `0` disables that limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Input is truncated to this many newline-delimited lines.
    pub max_lines: usize,
    /// Hard cap on recognition attempts, backtracked ones included.
    pub max_expressions: usize,
    /// Run the tree optimizer after building the document.
    pub optimize: bool,
}

impl ParseOptions {
    pub const DEFAULT_MAX_LINES: usize = 2000;
    pub const DEFAULT_MAX_EXPRESSIONS: usize = 1_000_000;

    /// No line or expression limits, optimizer on.
    pub fn unlimited() -> Self {
        Self {
            max_lines: 0,
            max_expressions: 0,
            optimize: true,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_lines: Self::DEFAULT_MAX_LINES,
            max_expressions: Self::DEFAULT_MAX_EXPRESSIONS,
            optimize: true,
        }
    }
}
