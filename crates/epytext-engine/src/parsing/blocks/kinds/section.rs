use serde::Serialize;

use crate::parsing::blocks::classify::LineClass;

/// Rank of a section heading, from its underline character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SectionLevel {
    H1,
    H2,
    H3,
}

/// Section block type with owned underline characters.
pub struct Section;

impl Section {
    /// Underline characters in rank order: `=` is H1, `-` H2, `~` H3.
    pub const UNDERLINES: [char; 3] = ['=', '-', '~'];

    /// Level of an underline made of one repeated underline character.
    pub fn underline_level(content: &str) -> Option<SectionLevel> {
        let first = content.chars().next()?;
        if !content.chars().all(|c| c == first) {
            return None;
        }
        match Self::UNDERLINES.iter().position(|&u| u == first)? {
            0 => Some(SectionLevel::H1),
            1 => Some(SectionLevel::H2),
            _ => Some(SectionLevel::H3),
        }
    }

    /// Level of the section formed by `header` over `underline`, if any.
    ///
    /// Both lines must sit at the same indent and the underline must be
    /// exactly as long (in bytes) as the header text.
    pub fn heading(header: &LineClass<'_>, underline: &LineClass<'_>) -> Option<SectionLevel> {
        if header.is_blank || underline.is_blank || header.indent != underline.indent {
            return None;
        }
        if underline.content.len() != header.content.len() {
            return None;
        }
        Self::underline_level(underline.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(indent: usize, content: &str) -> LineClass<'_> {
        LineClass {
            number: 0,
            indent,
            is_blank: content.is_empty(),
            content,
            body: content,
        }
    }

    #[test]
    fn underline_characters_map_to_levels() {
        assert_eq!(Section::underline_level("==="), Some(SectionLevel::H1));
        assert_eq!(Section::underline_level("---"), Some(SectionLevel::H2));
        assert_eq!(Section::underline_level("~~~"), Some(SectionLevel::H3));
    }

    #[test]
    fn mixed_or_foreign_underline_rejected() {
        assert_eq!(Section::underline_level("=-="), None);
        assert_eq!(Section::underline_level("***"), None);
        assert_eq!(Section::underline_level(""), None);
    }

    #[test]
    fn heading_requires_exact_length() {
        assert_eq!(
            Section::heading(&line(0, "Header"), &line(0, "======")),
            Some(SectionLevel::H1)
        );
        assert_eq!(Section::heading(&line(0, "Header"), &line(0, "=====")), None);
        assert_eq!(Section::heading(&line(0, "Header"), &line(0, "=======")), None);
    }

    #[test]
    fn heading_length_is_in_bytes() {
        // "Café" is four characters but five bytes.
        assert_eq!(Section::heading(&line(0, "Café"), &line(0, "====")), None);
        assert_eq!(
            Section::heading(&line(0, "Café"), &line(0, "=====")),
            Some(SectionLevel::H1)
        );
    }

    #[test]
    fn heading_requires_same_indent() {
        assert_eq!(Section::heading(&line(0, "Title"), &line(2, "-----")), None);
    }
}
