use crate::parsing::{
    blocks::SectionLevel,
    tree::{MarkupKind, Node, Visitor, Walk},
};

use super::{
    fields::FieldTable,
    fixups,
    html::{Element, HtmlNode, Tag},
};

/// An element under construction.
#[derive(Debug)]
struct Frame {
    element: Element,
    /// Set for the detached container collecting a field's content.
    field: Option<(String, Option<String>)>,
}

impl Frame {
    fn new(element: Element) -> Self {
        Self {
            element,
            field: None,
        }
    }
}

/// Builds an HTML tree from a document tree in one walk.
///
/// The open-element stack starts as `html > body`. Field content is built
/// off to the side and emitted, grouped, when the body closes.
pub struct HtmlRenderer {
    stack: Vec<Frame>,
    fields: FieldTable,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            stack: vec![
                Frame::new(Element::new(Tag::Html)),
                Frame::new(Element::new(Tag::Body)),
            ],
            fields: FieldTable::new(),
        }
    }

    /// Closes the body, appends grouped fields, and applies the fixups.
    pub fn finish(mut self) -> HtmlNode {
        while self.stack.len() > 2 {
            self.close();
        }
        let fields = std::mem::take(&mut self.fields);
        self.append_all(fields.into_html());
        while self.stack.len() > 1 {
            self.close();
        }

        let mut root = match self.stack.pop() {
            Some(frame) => HtmlNode::Element(frame.element),
            None => HtmlNode::element(Tag::Html, vec![]),
        };
        fixups::apply(&mut root);
        root
    }

    fn open(&mut self, element: Element) {
        self.stack.push(Frame::new(element));
    }

    fn open_field(&mut self, name: &str, arg: Option<&str>) {
        self.stack.push(Frame {
            element: Element::new(Tag::Div),
            field: Some((name.to_string(), arg.map(str::to_string))),
        });
    }

    /// Pops the top element into its parent, or into the field table if it
    /// is a field container.
    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame.field {
            Some((name, arg)) => self.fields.insert(&name, arg, frame.element.children),
            None => self.append(HtmlNode::Element(frame.element)),
        }
    }

    fn append(&mut self, node: HtmlNode) {
        if let Some(top) = self.stack.last_mut() {
            top.element.children.push(node);
        }
    }

    fn append_all(&mut self, nodes: Vec<HtmlNode>) {
        if let Some(top) = self.stack.last_mut() {
            top.element.children.extend(nodes);
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for HtmlRenderer {
    fn enter(&mut self, node: &Node) -> Walk {
        match node {
            Node::Doc { .. } => {}
            Node::Section { header, level, .. } => {
                let tag = match level {
                    SectionLevel::H1 => Tag::H1,
                    SectionLevel::H2 => Tag::H2,
                    SectionLevel::H3 => Tag::H3,
                };
                self.open(Element::with_children(tag, vec![HtmlNode::text(header)]));
            }
            Node::Paragraph { .. } => self.open(Element::new(Tag::P)),
            Node::List { ordered, .. } => {
                self.open(Element::new(if *ordered { Tag::Ol } else { Tag::Ul }));
                self.open(Element::new(Tag::Li));
            }
            Node::Field { name, arg, .. } => self.open_field(name, arg.as_deref()),
            Node::Doctest(text) => {
                self.append(HtmlNode::element(Tag::Pre, vec![HtmlNode::text(text)]));
            }
            Node::Literal(text) => {
                let code = HtmlNode::element(Tag::Code, vec![HtmlNode::text(text)]);
                self.append(HtmlNode::element(Tag::Pre, vec![code]));
            }
            Node::Markup { kind, .. } => match kind {
                MarkupKind::Bold => self.open(Element::new(Tag::B)),
                MarkupKind::Code => self.open(Element::new(Tag::Code)),
                MarkupKind::Italic | MarkupKind::Index => self.open(Element::new(Tag::I)),
                MarkupKind::Math => {}
            },
            Node::Url { url, .. } => self.open(Element::new(Tag::A).attr("href", url)),
            Node::CrossRef { .. } => {}
            Node::Text(text) => self.append(HtmlNode::text(text)),
        }
        Walk::Continue
    }

    fn exit(&mut self, node: &Node) {
        match node {
            Node::List { .. } => {
                self.close();
                self.close();
            }
            Node::Section { .. }
            | Node::Paragraph { .. }
            | Node::Field { .. }
            | Node::Url { .. } => self.close(),
            Node::Markup { kind, .. } if *kind != MarkupKind::Math => self.close(),
            _ => {}
        }
    }
}
