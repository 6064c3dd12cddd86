use crate::parsing::blocks::{Block, BlockKind};

use super::node::Node;

/// An open node that can still receive children.
#[derive(Debug)]
struct Frame {
    /// `None` for the document root, which never closes early.
    indent: Option<usize>,
    node: Node,
}

/// Nests the flat block sequence into a document tree.
///
/// Keeps a stack of open frames seeded with the document root. Each block
/// closes the frames it cannot belong to, attaches to the new top, and, if
/// it can host children (section, list item, field), becomes the top.
pub struct HierarchyBuilder {
    stack: Vec<Frame>,
    /// The previous block was a mergeable list or field item.
    after_mergeable: bool,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self {
            stack: vec![Frame {
                indent: None,
                node: Node::doc(vec![]),
            }],
            after_mergeable: false,
        }
    }

    pub fn push(&mut self, block: Block) {
        if self.merges_into_item(&block) {
            self.after_mergeable = false;
            if let BlockKind::Paragraph { text, .. } = block.kind {
                self.continue_item_text(text);
            }
            return;
        }

        if matches!(block.kind, BlockKind::Field { .. }) {
            self.close_through_field();
        }
        while self.closes_top(&block) {
            self.close_top();
        }

        self.after_mergeable = block.is_mergeable();
        let opens = matches!(
            block.kind,
            BlockKind::Section { .. } | BlockKind::List { .. } | BlockKind::Field { .. }
        );
        let node = into_node(block.kind);
        if opens {
            self.stack.push(Frame {
                indent: Some(block.indent),
                node,
            });
        } else {
            self.attach(node);
        }
    }

    /// Closes every open frame and returns the document root.
    pub fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close_top();
        }
        match self.stack.pop() {
            Some(root) => root.node,
            None => Node::doc(vec![]),
        }
    }

    /// A paragraph directly continuing a mergeable item's line, at the
    /// item's indent or deeper, is a wrapped part of the item text.
    fn merges_into_item(&self, block: &Block) -> bool {
        let Some(top) = self.stack.last() else {
            return false;
        };
        self.after_mergeable
            && matches!(block.kind, BlockKind::Paragraph { .. })
            && matches!(top.node, Node::List { .. } | Node::Field { .. })
            && top.indent.is_some_and(|indent| block.indent >= indent)
    }

    /// Appends a continuation line to the open item's synthetic paragraph.
    fn continue_item_text(&mut self, text: String) {
        let top = self
            .stack
            .last_mut()
            .expect("document root frame is never popped");
        let children = top
            .node
            .children_mut()
            .expect("open frames are nesting nodes");
        if let [Node::Paragraph { children: inline }] = children.as_mut_slice()
            && let [Node::Text(item_text)] = inline.as_mut_slice()
        {
            item_text.push('\n');
            item_text.push_str(&text);
        } else {
            children.push(Node::paragraph(vec![Node::Text(text)]));
        }
    }

    fn closes_top(&self, block: &Block) -> bool {
        let Some(Frame {
            indent: Some(top_indent),
            node,
        }) = self.stack.last()
        else {
            return false;
        };

        match node {
            // Sections keep same-indent content; only a shallower block or a
            // same-indent section of equal or higher rank closes them.
            Node::Section { level, .. } => {
                block.indent < *top_indent
                    || (block.indent == *top_indent
                        && matches!(block.kind, BlockKind::Section { level: new, .. } if new <= *level))
            }
            _ => *top_indent >= block.indent,
        }
    }

    /// Fields never nest inside fields: close up to and including the
    /// innermost open field.
    fn close_through_field(&mut self) {
        if let Some(i) = self
            .stack
            .iter()
            .rposition(|f| matches!(f.node, Node::Field { .. }))
        {
            while self.stack.len() > i {
                self.close_top();
            }
        }
    }

    fn close_top(&mut self) {
        assert!(
            self.stack.len() > 1,
            "hierarchy builder tried to close the document root"
        );
        if let Some(frame) = self.stack.pop() {
            self.attach(frame.node);
        }
    }

    fn attach(&mut self, node: Node) {
        let top = self
            .stack
            .last_mut()
            .expect("document root frame is never popped");
        top.node
            .children_mut()
            .expect("open frames are nesting nodes")
            .push(node);
    }
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Tree form of a block. Item text becomes a synthetic paragraph.
fn into_node(kind: BlockKind) -> Node {
    let item_text = |text: String| {
        if text.is_empty() {
            vec![]
        } else {
            vec![Node::paragraph(vec![Node::Text(text)])]
        }
    };

    match kind {
        BlockKind::Section { text, level } => Node::Section {
            header: text,
            level,
            children: vec![],
        },
        BlockKind::Paragraph { text, .. } => Node::paragraph(vec![Node::Text(text)]),
        BlockKind::List {
            bullet,
            ordered,
            inline_text,
            ..
        } => Node::List {
            bullet,
            ordered,
            children: item_text(inline_text),
        },
        BlockKind::Field {
            name,
            arg,
            inline_text,
            ..
        } => Node::Field {
            name,
            arg,
            children: item_text(inline_text),
        },
        BlockKind::Doctest { text } => Node::Doctest(text),
        BlockKind::Literal { text } => Node::Literal(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::{BlockRecognizer, EpytextLineClassifier, SectionLevel};
    use crate::parsing::source::lines;
    use pretty_assertions::assert_eq;

    fn build(src: &str) -> Node {
        let classes: Vec<_> = lines(src)
            .map(|lr| EpytextLineClassifier.classify(&lr))
            .collect();
        let mut builder = HierarchyBuilder::new();
        for block in BlockRecognizer::new(&classes, 0).recognize().unwrap() {
            builder.push(block);
        }
        builder.finish()
    }

    fn p(text: &str) -> Node {
        Node::paragraph(vec![Node::text(text)])
    }

    fn item(children: Vec<Node>) -> Node {
        Node::List {
            bullet: "-".into(),
            ordered: false,
            children,
        }
    }

    fn field(name: &str, arg: Option<&str>, children: Vec<Node>) -> Node {
        Node::Field {
            name: name.into(),
            arg: arg.map(Into::into),
            children,
        }
    }

    #[test]
    fn empty_input_is_empty_doc() {
        assert_eq!(build(""), Node::doc(vec![]));
    }

    #[test]
    fn section_owns_same_indent_paragraph() {
        assert_eq!(
            build("Header\n======\n\np1\n"),
            Node::doc(vec![Node::Section {
                header: "Header".into(),
                level: SectionLevel::H1,
                children: vec![p("p1")],
            }])
        );
    }

    #[test]
    fn subsections_nest_and_siblings_close() {
        let doc = build("A\n=\n\nB\n-\n\nb text\n\nC\n=\n\nc text\n");
        assert_eq!(
            doc,
            Node::doc(vec![
                Node::Section {
                    header: "A".into(),
                    level: SectionLevel::H1,
                    children: vec![Node::Section {
                        header: "B".into(),
                        level: SectionLevel::H2,
                        children: vec![p("b text")],
                    }],
                },
                Node::Section {
                    header: "C".into(),
                    level: SectionLevel::H1,
                    children: vec![p("c text")],
                },
            ])
        );
    }

    #[test]
    fn nested_list_items() {
        assert_eq!(
            build("- a\n  - b\n- c\n"),
            Node::doc(vec![
                item(vec![p("a"), item(vec![p("b")])]),
                item(vec![p("c")]),
            ])
        );
    }

    #[test]
    fn mergeable_item_absorbs_next_paragraph() {
        assert_eq!(
            build("@param x: first\nsecond\n"),
            Node::doc(vec![field("param", Some("x"), vec![p("first\nsecond")])])
        );
    }

    #[test]
    fn blank_line_prevents_merge() {
        assert_eq!(
            build("- item\n\nafter\n"),
            Node::doc(vec![item(vec![p("item")]), p("after")])
        );
    }

    #[test]
    fn empty_item_text_prevents_merge() {
        assert_eq!(
            build("@return:\nplain\n"),
            Node::doc(vec![field("return", None, vec![]), p("plain")])
        );
    }

    #[test]
    fn deeper_lines_belong_to_the_item() {
        assert_eq!(
            build("- item\n  more\n"),
            Node::doc(vec![item(vec![p("item\nmore")])])
        );
    }

    #[test]
    fn wrapped_field_text_stays_one_paragraph() {
        assert_eq!(
            build("@param x: the x value\n    which continues\n    over lines\n"),
            Node::doc(vec![field(
                "param",
                Some("x"),
                vec![p("the x value\nwhich continues\nover lines")]
            )])
        );
    }

    #[test]
    fn blank_line_after_wrap_starts_a_new_paragraph() {
        assert_eq!(
            build("- item\n  more\n\n  later\n"),
            Node::doc(vec![item(vec![p("item\nmore"), p("later")])])
        );
    }

    #[test]
    fn fields_are_siblings_even_when_deeper() {
        assert_eq!(
            build("@param x: a\n  @param y: b\n"),
            Node::doc(vec![
                field("param", Some("x"), vec![p("a")]),
                field("param", Some("y"), vec![p("b")]),
            ])
        );
    }

    #[test]
    fn field_description_on_following_lines() {
        assert_eq!(
            build("@param x:\n    the x\n@return: y\n"),
            Node::doc(vec![
                field("param", Some("x"), vec![p("the x")]),
                field("return", None, vec![p("y")]),
            ])
        );
    }

    #[test]
    fn literal_after_paragraph_attaches_to_container() {
        assert_eq!(
            build("p::\n    code\n"),
            Node::doc(vec![p("p:"), Node::Literal("code".into())])
        );
    }

    #[test]
    fn literal_inside_list_item() {
        assert_eq!(
            build("- run::\n\n    make\n"),
            Node::doc(vec![item(vec![p("run:"), Node::Literal("make".into())])])
        );
    }

    #[test]
    fn doctest_is_a_leaf_under_section() {
        assert_eq!(
            build("Usage\n-----\n\n>>> f()\n1\n"),
            Node::doc(vec![Node::Section {
                header: "Usage".into(),
                level: SectionLevel::H2,
                children: vec![Node::Doctest(">>> f()\n1".into())],
            }])
        );
    }
}
