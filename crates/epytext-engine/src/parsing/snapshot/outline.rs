use std::fmt::Write;

use crate::parsing::tree::{MarkupKind, Node};

/// Stable one-node-per-line dump of a tree, indented two spaces per level.
pub fn outline(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let pad = "  ".repeat(depth);
    // Writing to a String cannot fail.
    let _ = match node {
        Node::Doc { .. } => writeln!(out, "{pad}Doc"),
        Node::Section { header, level, .. } => {
            writeln!(out, "{pad}Section({level:?}) {header:?}")
        }
        Node::Paragraph { .. } => writeln!(out, "{pad}Paragraph"),
        Node::List {
            bullet, ordered, ..
        } => {
            let kind = if *ordered { "ordered" } else { "unordered" };
            writeln!(out, "{pad}List({kind}) {bullet:?}")
        }
        Node::Field { name, arg, .. } => match arg {
            Some(arg) => writeln!(out, "{pad}Field({name}) {arg:?}"),
            None => writeln!(out, "{pad}Field({name})"),
        },
        Node::Doctest(text) => writeln!(out, "{pad}Doctest {text:?}"),
        Node::Literal(text) => writeln!(out, "{pad}Literal {text:?}"),
        Node::Markup { kind, .. } => writeln!(out, "{pad}{}", markup_name(*kind)),
        Node::Url { url, .. } => writeln!(out, "{pad}Url {url:?}"),
        Node::CrossRef { target, .. } => writeln!(out, "{pad}CrossRef {target:?}"),
        Node::Text(text) => writeln!(out, "{pad}Text {text:?}"),
    };

    for child in node.children().unwrap_or_default() {
        write_node(out, child, depth + 1);
    }
}

fn markup_name(kind: MarkupKind) -> &'static str {
    match kind {
        MarkupKind::Bold => "B",
        MarkupKind::Code => "C",
        MarkupKind::Italic => "I",
        MarkupKind::Index => "X",
        MarkupKind::Math => "M",
    }
}
