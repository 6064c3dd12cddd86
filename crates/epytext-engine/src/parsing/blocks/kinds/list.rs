use std::sync::OnceLock;

use regex::Regex;

/// A recognized bullet and the inline text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet<'a> {
    pub bullet: &'a str,
    pub ordered: bool,
    pub rest: &'a str,
}

/// List item block type with owned bullet syntax.
pub struct ListItem;

impl ListItem {
    /// The unordered bullet.
    pub const DASH: &'static str = "-";

    fn pattern() -> &'static Regex {
        static BULLET: OnceLock<Regex> = OnceLock::new();
        BULLET.get_or_init(|| {
            Regex::new(r"^(-|(?:[0-9]+\.)+)(?:[ \t]+(.*))?$").expect("Invalid bullet regex")
        })
    }

    /// Splits a line's content into bullet and inline text.
    ///
    /// A bullet must be followed by whitespace or the end of the line, so
    /// `-1` or `---` are not list items.
    pub fn parse(content: &str) -> Option<Bullet<'_>> {
        let caps = Self::pattern().captures(content)?;
        let bullet = caps.get(1)?.as_str();
        Some(Bullet {
            bullet,
            ordered: bullet != Self::DASH,
            rest: caps.get(2).map_or("", |m| m.as_str()),
        })
    }
}
