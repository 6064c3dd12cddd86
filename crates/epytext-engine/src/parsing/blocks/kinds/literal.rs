use crate::parsing::blocks::classify::LineClass;

/// Literal block type with owned introducer constant.
pub struct Literal;

impl Literal {
    /// Trailing marker that makes the following indented lines literal.
    pub const INTRO: &'static str = "::";

    /// Strips a terminal `::` down to `:`, reporting whether it was there.
    pub fn split_intro(text: &str) -> (String, bool) {
        let trimmed = text.trim_end();
        match trimmed.strip_suffix(Self::INTRO) {
            Some(head) => (format!("{head}:"), true),
            None => (trimmed.to_string(), false),
        }
    }

    /// Joins literal lines, removing the indentation they all share.
    ///
    /// Trailing spaces on a line are kept. Blank lines inside the block
    /// are kept as empty lines.
    pub fn dedent(lines: &[LineClass<'_>]) -> String {
        let min = lines
            .iter()
            .filter(|l| !l.is_blank)
            .map(|l| l.indent)
            .min()
            .unwrap_or(0);

        lines
            .iter()
            .map(|l| {
                if l.is_blank {
                    String::new()
                } else {
                    format!("{}{}", " ".repeat(l.indent - min), l.body)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
