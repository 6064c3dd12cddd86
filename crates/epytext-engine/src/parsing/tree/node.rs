use serde::Serialize;

use crate::parsing::blocks::SectionLevel;

/// Generic inline markup, tagged by its opening letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkupKind {
    /// `B{}`
    Bold,
    /// `C{}`
    Code,
    /// `I{}`
    Italic,
    /// `X{}`: an indexed term.
    Index,
    /// `M{}`: math; rendered without a wrapper.
    Math,
}

/// A node of the parsed document tree.
///
/// Parents own their children exclusively; there are no back-references.
/// Nodes with a `children` list are nesting nodes, the rest are leaves
/// (see [`Node::shape`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    Doc {
        children: Vec<Node>,
    },
    Section {
        header: String,
        level: SectionLevel,
        children: Vec<Node>,
    },
    Paragraph {
        children: Vec<Node>,
    },
    /// One list item; consecutive items are grouped at render time.
    List {
        bullet: String,
        ordered: bool,
        children: Vec<Node>,
    },
    Field {
        name: String,
        arg: Option<String>,
        children: Vec<Node>,
    },
    Doctest(String),
    Literal(String),
    Markup {
        kind: MarkupKind,
        children: Vec<Node>,
    },
    Url {
        url: String,
        children: Vec<Node>,
    },
    CrossRef {
        target: String,
        children: Vec<Node>,
    },
    Text(String),
}

/// Capability view of a node: it either nests children or carries text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    Nesting(&'a [Node]),
    Leaf(&'a str),
}

impl Node {
    pub fn doc(children: Vec<Node>) -> Self {
        Node::Doc { children }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn markup(kind: MarkupKind, children: Vec<Node>) -> Self {
        Node::Markup { kind, children }
    }

    pub fn shape(&self) -> Shape<'_> {
        match self {
            Node::Doctest(s) | Node::Literal(s) | Node::Text(s) => Shape::Leaf(s),
            _ => Shape::Nesting(self.children().unwrap_or_default()),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.shape(), Shape::Leaf(_))
    }

    /// Whether the node renders nothing. A section's header counts as
    /// content even when no children follow it.
    pub fn is_empty(&self) -> bool {
        match (self, self.shape()) {
            (Node::Section { header, .. }, _) if !header.is_empty() => false,
            (_, Shape::Nesting(children)) => children.is_empty(),
            (_, Shape::Leaf(text)) => text.is_empty(),
        }
    }

    /// Child list of a nesting node; `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Doc { children }
            | Node::Section { children, .. }
            | Node::Paragraph { children }
            | Node::List { children, .. }
            | Node::Field { children, .. }
            | Node::Markup { children, .. }
            | Node::Url { children, .. }
            | Node::CrossRef { children, .. } => Some(children),
            Node::Doctest(_) | Node::Literal(_) | Node::Text(_) => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Doc { children }
            | Node::Section { children, .. }
            | Node::Paragraph { children }
            | Node::List { children, .. }
            | Node::Field { children, .. }
            | Node::Markup { children, .. }
            | Node::Url { children, .. }
            | Node::CrossRef { children, .. } => Some(children),
            Node::Doctest(_) | Node::Literal(_) | Node::Text(_) => None,
        }
    }
}
