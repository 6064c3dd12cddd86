use crate::parsing::tree::MarkupKind;

/// What a `<Letter>{` opener starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opener {
    Basic(MarkupKind),
    Escape,
    Url,
    CrossRef,
}

/// Brace-delimited markup syntax.
pub struct Markup;

impl Markup {
    pub const OPEN: char = '{';
    pub const CLOSE: char = '}';

    /// What `letter` followed by `{` opens, if anything.
    pub fn opener(letter: char) -> Option<Opener> {
        match letter {
            'B' => Some(Opener::Basic(MarkupKind::Bold)),
            'C' => Some(Opener::Basic(MarkupKind::Code)),
            'I' => Some(Opener::Basic(MarkupKind::Italic)),
            'X' => Some(Opener::Basic(MarkupKind::Index)),
            'M' => Some(Opener::Basic(MarkupKind::Math)),
            'E' => Some(Opener::Escape),
            'U' => Some(Opener::Url),
            'L' => Some(Opener::CrossRef),
            _ => None,
        }
    }
}
