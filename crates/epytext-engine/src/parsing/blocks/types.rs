use super::kinds::SectionLevel;

/// The kind and payload of a recognized block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A header line over an underline of equal length.
    Section { text: String, level: SectionLevel },
    /// One or more consecutive lines at one indent.
    Paragraph { text: String, literal_intro: bool },
    /// A bulleted or numbered item; `inline_text` is the text on the bullet line.
    List {
        bullet: String,
        ordered: bool,
        inline_text: String,
        literal_intro: bool,
        has_trailing_blank: bool,
    },
    /// An `@name arg: text` annotation.
    Field {
        name: String,
        arg: Option<String>,
        inline_text: String,
        literal_intro: bool,
        has_trailing_blank: bool,
    },
    /// An interactive session transcript, dedented to its first line.
    Doctest { text: String },
    /// Verbatim text introduced by a trailing `::`.
    Literal { text: String },
}

impl BlockKind {
    /// Whether the block's text ended in `::`.
    pub fn literal_intro(&self) -> bool {
        match self {
            BlockKind::Paragraph { literal_intro, .. }
            | BlockKind::List { literal_intro, .. }
            | BlockKind::Field { literal_intro, .. } => *literal_intro,
            BlockKind::Section { .. } | BlockKind::Doctest { .. } | BlockKind::Literal { .. } => {
                false
            }
        }
    }
}

/// A recognized block in the flat, pre-hierarchy sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Column width of the block's first line.
    pub indent: usize,
    /// Position of `indent` on the indent stack when the block opened.
    pub depth: usize,
    /// Zero-based line number of the block's first line.
    pub line: usize,
    pub kind: BlockKind,
}

impl Block {
    /// A list or field item whose next line directly continues its text:
    /// the item has inline text and no blank line follows it.
    pub fn is_mergeable(&self) -> bool {
        match &self.kind {
            BlockKind::List {
                inline_text,
                has_trailing_blank,
                ..
            }
            | BlockKind::Field {
                inline_text,
                has_trailing_blank,
                ..
            } => !inline_text.is_empty() && !has_trailing_blank,
            _ => false,
        }
    }
}
