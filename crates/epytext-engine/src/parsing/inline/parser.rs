use crate::parsing::tree::Node;

use super::{
    cursor::Cursor,
    kinds::{Escape, Link, Markup, Opener},
};

/// Parses a text span into inline nodes.
///
/// Text between markup is emitted as [`Node::Text`]; escapes are folded
/// into the surrounding text. Markup still open at the end of the span is
/// closed there, and a `}` with nothing to close is kept as text.
pub fn parse_inline(s: &str) -> Vec<Node> {
    let mut cur = Cursor::new(s);
    parse_span(&mut cur, false)
}

/// Replaces the raw text of every paragraph in the tree with parsed inline
/// nodes. Literal and doctest leaves are never touched.
pub fn expand(node: &mut Node) {
    if let Node::Paragraph { children } = node {
        let raw = std::mem::take(children);
        for child in raw {
            match child {
                Node::Text(text) => children.extend(parse_inline(&text)),
                other => children.push(other),
            }
        }
        return;
    }
    if let Some(children) = node.children_mut() {
        children.iter_mut().for_each(expand);
    }
}

/// Scans until end of input or, when `nested`, the `}` closing the
/// enclosing markup (which is consumed).
fn parse_span(cur: &mut Cursor<'_>, nested: bool) -> Vec<Node> {
    let mut out = vec![];
    let mut text = String::new();
    // Bare `{ ... }` groups opened inside this markup.
    let mut groups = 0usize;

    while let Some(c) = cur.peek() {
        if let Some(opener) = try_parse_opener(cur) {
            let children = parse_span(cur, true);
            match opener {
                Opener::Escape => text.push_str(Escape::substitute(&flatten(&children))),
                other => {
                    flush_text(&mut out, &mut text);
                    out.push(build(other, children));
                }
            }
            continue;
        }

        cur.bump();
        match c {
            Markup::OPEN if nested => {
                groups += 1;
                text.push(c);
            }
            Markup::CLOSE if nested && groups == 0 => {
                flush_text(&mut out, &mut text);
                return out;
            }
            Markup::CLOSE if nested => {
                groups -= 1;
                text.push(c);
            }
            _ => text.push(c),
        }
    }

    flush_text(&mut out, &mut text);
    out
}

/// Consumes `<Letter>{` if the cursor is at a markup opener.
fn try_parse_opener(cur: &mut Cursor<'_>) -> Option<Opener> {
    if cur.peek_second() != Some(Markup::OPEN) {
        return None;
    }
    let opener = Markup::opener(cur.peek()?)?;
    cur.bump_n(2);
    Some(opener)
}

fn build(opener: Opener, children: Vec<Node>) -> Node {
    match opener {
        Opener::Basic(kind) => Node::markup(kind, children),
        Opener::Url => {
            let (url, children) = Link::split_target(children);
            Node::Url { url, children }
        }
        Opener::CrossRef => {
            let (target, children) = Link::split_target(children);
            Node::CrossRef { target, children }
        }
        Opener::Escape => Node::Text(flatten(&children)),
    }
}

fn flatten(nodes: &[Node]) -> String {
    nodes.iter().map(Node::plain_text).collect()
}

fn flush_text(out: &mut Vec<Node>, text: &mut String) {
    if !text.is_empty() {
        out.push(Node::Text(std::mem::take(text)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tree::MarkupKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn t(s: &str) -> Node {
        Node::text(s)
    }

    #[test]
    fn plain_text() {
        assert_eq!(parse_inline("just words"), vec![t("just words")]);
    }

    #[test]
    fn empty_span() {
        assert_eq!(parse_inline(""), vec![]);
    }

    #[rstest]
    #[case("B{x}", MarkupKind::Bold)]
    #[case("C{x}", MarkupKind::Code)]
    #[case("I{x}", MarkupKind::Italic)]
    #[case("X{x}", MarkupKind::Index)]
    #[case("M{x}", MarkupKind::Math)]
    fn basic_markup(#[case] src: &str, #[case] kind: MarkupKind) {
        assert_eq!(parse_inline(src), vec![Node::markup(kind, vec![t("x")])]);
    }

    #[test]
    fn nested_markup() {
        assert_eq!(
            parse_inline("B{I{nested} markup}"),
            vec![Node::markup(
                MarkupKind::Bold,
                vec![Node::markup(MarkupKind::Italic, vec![t("nested")]), t(" markup")]
            )]
        );
    }

    #[test]
    fn unclosed_markup_closes_at_end() {
        assert_eq!(
            parse_inline("teB{st"),
            vec![t("te"), Node::markup(MarkupKind::Bold, vec![t("st")])]
        );
    }

    #[test]
    fn stray_close_brace_is_text() {
        assert_eq!(parse_inline("a } b"), vec![t("a } b")]);
    }

    #[test]
    fn unknown_letter_is_text() {
        assert_eq!(parse_inline("A{x} y"), vec![t("A{x} y")]);
    }

    #[test]
    fn bare_braces_inside_markup_are_text() {
        assert_eq!(
            parse_inline("C{d = {1: 2}} end"),
            vec![
                Node::markup(MarkupKind::Code, vec![t("d = {1: 2}")]),
                t(" end"),
            ]
        );
    }

    #[rstest]
    #[case("a E{lb} b", "a { b")]
    #[case("E{rb}", "}")]
    #[case("x E{@} y", "x @ y")]
    fn escapes_merge_into_text(#[case] src: &str, #[case] expected: &str) {
        assert_eq!(parse_inline(src), vec![t(expected)]);
    }

    #[test]
    fn escape_inside_markup() {
        assert_eq!(
            parse_inline("C{E{lb}}"),
            vec![Node::markup(MarkupKind::Code, vec![t("{")])]
        );
    }

    #[test]
    fn url_with_explicit_target() {
        assert_eq!(
            parse_inline("see U{Python <http://python.org>}."),
            vec![
                t("see "),
                Node::Url {
                    url: "http://python.org".into(),
                    children: vec![t("Python")],
                },
                t("."),
            ]
        );
    }

    #[test]
    fn url_without_target_uses_its_text() {
        assert_eq!(
            parse_inline("U{http://x.org}"),
            vec![Node::Url {
                url: "http://x.org".into(),
                children: vec![t("http://x.org")],
            }]
        );
    }

    #[test]
    fn crossref_with_markup_label() {
        assert_eq!(
            parse_inline("L{C{os.path}}"),
            vec![Node::CrossRef {
                target: "os.path".into(),
                children: vec![Node::markup(MarkupKind::Code, vec![t("os.path")])],
            }]
        );
    }

    #[test]
    fn expand_rewrites_paragraphs_only() {
        let mut doc = Node::doc(vec![
            Node::paragraph(vec![t("B{x}")]),
            Node::Literal("B{raw}".into()),
            Node::Doctest(">>> B{raw}".into()),
        ]);
        expand(&mut doc);
        assert_eq!(
            doc,
            Node::doc(vec![
                Node::paragraph(vec![Node::markup(MarkupKind::Bold, vec![t("x")])]),
                Node::Literal("B{raw}".into()),
                Node::Doctest(">>> B{raw}".into()),
            ])
        );
    }

    #[test]
    fn expand_reaches_nested_items() {
        let mut doc = Node::doc(vec![Node::Field {
            name: "param".into(),
            arg: Some("x".into()),
            children: vec![Node::paragraph(vec![t("an I{int}")])],
        }]);
        expand(&mut doc);
        assert_eq!(
            doc,
            Node::doc(vec![Node::Field {
                name: "param".into(),
                arg: Some("x".into()),
                children: vec![Node::paragraph(vec![
                    t("an "),
                    Node::markup(MarkupKind::Italic, vec![t("int")]),
                ])],
            }])
        );
    }
}
