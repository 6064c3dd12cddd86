/// Doctest block type with owned prompt constant.
pub struct Doctest;

impl Doctest {
    /// The interactive-session prompt that opens a doctest block.
    pub const PROMPT: &'static str = ">>>";

    /// Whether a line's content starts with the prompt.
    pub fn opens(content: &str) -> bool {
        content.starts_with(Self::PROMPT)
    }
}
