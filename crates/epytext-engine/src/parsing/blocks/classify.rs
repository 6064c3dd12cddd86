use crate::parsing::source::LineRef;

use super::indent::IndentStack;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block recognition: each line is classified
/// independently without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Zero-based line number in the (possibly truncated) input.
    pub number: usize,
    /// Column width of the leading whitespace, tabs expanded.
    pub indent: usize,
    /// Whether the line holds only whitespace.
    pub is_blank: bool,
    /// Text after the leading whitespace, trailing whitespace removed.
    pub content: &'a str,
    /// Text after the leading whitespace, trailing whitespace kept.
    pub body: &'a str,
}

/// Classifies individual lines for the block recognition phase.
pub struct EpytextLineClassifier;

impl EpytextLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let body = lr.text.trim_start_matches([' ', '\t']);
        let prefix = &lr.text[..lr.text.len() - body.len()];
        let content = body.trim_end();

        LineClass {
            number: lr.number,
            indent: IndentStack::compute_indent(prefix),
            is_blank: content.is_empty(),
            content,
            body,
        }
    }
}
