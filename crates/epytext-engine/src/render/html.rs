use std::io::Write;

use serde::Serialize;

use crate::error::RenderError;

/// The closed set of elements the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    A,
    B,
    Body,
    Code,
    Dd,
    Div,
    Dl,
    Dt,
    H1,
    H2,
    H3,
    Html,
    I,
    Li,
    Ol,
    P,
    Pre,
    Span,
    Strong,
    Ul,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::A => "a",
            Tag::B => "b",
            Tag::Body => "body",
            Tag::Code => "code",
            Tag::Dd => "dd",
            Tag::Div => "div",
            Tag::Dl => "dl",
            Tag::Dt => "dt",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::Html => "html",
            Tag::I => "i",
            Tag::Li => "li",
            Tag::Ol => "ol",
            Tag::P => "p",
            Tag::Pre => "pre",
            Tag::Span => "span",
            Tag::Strong => "strong",
            Tag::Ul => "ul",
        }
    }

    /// Phrasing elements that may sit inside a heading or paragraph.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Tag::A | Tag::B | Tag::Code | Tag::I | Tag::Span | Tag::Strong
        )
    }

    pub fn is_heading(self) -> bool {
        matches!(self, Tag::H1 | Tag::H2 | Tag::H3)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<HtmlNode>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: vec![],
            children: vec![],
        }
    }

    pub fn with_children(tag: Tag, children: Vec<HtmlNode>) -> Self {
        Self {
            tag,
            attrs: vec![],
            children,
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }
}

/// A node of the rendered HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HtmlNode {
    Element(Element),
    Text(String),
}

impl HtmlNode {
    pub fn element(tag: Tag, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element(Element::with_children(tag, children))
    }

    pub fn text(s: impl Into<String>) -> Self {
        HtmlNode::Text(s.into())
    }

    /// Text and phrasing elements are inline; everything else is a block.
    pub fn is_inline(&self) -> bool {
        match self {
            HtmlNode::Text(_) => true,
            HtmlNode::Element(el) => el.tag.is_inline(),
        }
    }

    /// Serializes to a compact HTML string with no added whitespace.
    pub fn to_html_string(&self) -> String {
        let mut buf = String::new();
        write_node(&mut buf, self);
        buf
    }

    /// Serializes into `w`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<(), RenderError> {
        w.write_all(self.to_html_string().as_bytes())?;
        Ok(())
    }
}

fn write_node(buf: &mut String, node: &HtmlNode) {
    match node {
        HtmlNode::Text(text) => buf.push_str(&html_escape::encode_text(text)),
        HtmlNode::Element(el) => write_element(buf, el),
    }
}

fn write_element(buf: &mut String, el: &Element) {
    buf.push('<');
    buf.push_str(el.tag.name());
    for (name, value) in &el.attrs {
        buf.push(' ');
        buf.push_str(name);
        buf.push_str("=\"");
        buf.push_str(&html_escape::encode_double_quoted_attribute(value));
        buf.push('"');
    }
    buf.push('>');

    for child in &el.children {
        write_node(buf, child);
    }

    buf.push_str("</");
    buf.push_str(el.tag.name());
    buf.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_elements_serialize_compactly() {
        let node = HtmlNode::element(
            Tag::P,
            vec![
                HtmlNode::text("a "),
                HtmlNode::element(Tag::B, vec![HtmlNode::text("b")]),
            ],
        );
        assert_eq!(node.to_html_string(), "<p>a <b>b</b></p>");
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let node = HtmlNode::Element(
            Element::with_children(Tag::A, vec![HtmlNode::text("x < y & z")])
                .attr("href", "http://e.org/?a=1&b=\"2\""),
        );
        assert_eq!(
            node.to_html_string(),
            "<a href=\"http://e.org/?a=1&amp;b=&quot;2&quot;\">x &lt; y &amp; z</a>"
        );
    }

    #[test]
    fn empty_element_still_closes() {
        assert_eq!(HtmlNode::element(Tag::Div, vec![]).to_html_string(), "<div></div>");
    }

    #[test]
    fn inline_classification() {
        assert!(HtmlNode::text("t").is_inline());
        assert!(HtmlNode::element(Tag::Code, vec![]).is_inline());
        assert!(!HtmlNode::element(Tag::Pre, vec![]).is_inline());
        assert!(!HtmlNode::element(Tag::Ul, vec![]).is_inline());
    }

    #[test]
    fn write_to_sink() {
        let mut out = Vec::new();
        HtmlNode::element(Tag::I, vec![HtmlNode::text("x")])
            .write_to(&mut out)
            .unwrap();
        assert_eq!(out, b"<i>x</i>");
    }
}
