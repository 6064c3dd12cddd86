use std::sync::OnceLock;

use regex::Regex;

/// A recognized `@name arg:` opener and the inline text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHead<'a> {
    pub name: &'a str,
    pub arg: Option<&'a str>,
    pub rest: &'a str,
}

/// Field block type with owned sigil syntax.
pub struct FieldTag;

impl FieldTag {
    pub const SIGIL: char = '@';

    fn pattern() -> &'static Regex {
        static FIELD: OnceLock<Regex> = OnceLock::new();
        FIELD.get_or_init(|| {
            Regex::new(r"^@([^\s:]+)(?:[ \t]+([^:]*?))?[ \t]*:(.*)$").expect("Invalid field regex")
        })
    }

    /// Splits a line's content into field name, optional argument and
    /// inline text.
    pub fn parse(content: &str) -> Option<FieldHead<'_>> {
        if !content.starts_with(Self::SIGIL) {
            return None;
        }
        let caps = Self::pattern().captures(content)?;
        Some(FieldHead {
            name: caps.get(1)?.as_str(),
            arg: caps
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|a| !a.is_empty()),
            rest: caps.get(3).map_or("", |m| m.as_str().trim()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_with_arg() {
        assert_eq!(
            FieldTag::parse("@param x: the x value"),
            Some(FieldHead {
                name: "param",
                arg: Some("x"),
                rest: "the x value"
            })
        );
    }

    #[test]
    fn field_without_arg() {
        let f = FieldTag::parse("@return: nothing").unwrap();
        assert_eq!(f.name, "return");
        assert_eq!(f.arg, None);
        assert_eq!(f.rest, "nothing");
    }

    #[test]
    fn field_with_empty_text() {
        let f = FieldTag::parse("@raise ValueError:").unwrap();
        assert_eq!(f.arg, Some("ValueError"));
        assert_eq!(f.rest, "");
    }

    #[test]
    fn multi_word_arg() {
        let f = FieldTag::parse("@type x: list of int").unwrap();
        assert_eq!(f.arg, Some("x"));
        assert_eq!(f.rest, "list of int");
    }

    #[test]
    fn not_fields() {
        assert_eq!(FieldTag::parse("@ param: x"), None);
        assert_eq!(FieldTag::parse("@param x"), None);
        assert_eq!(FieldTag::parse("email@example.com: hi"), None);
    }
}
