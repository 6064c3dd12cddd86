use super::node::Node;

/// Whether [`walk`] should descend into the node just entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    Skip,
}

/// Callbacks for a depth-first traversal.
///
/// `exit` runs for every node `enter` was called on, including skipped ones.
pub trait Visitor {
    fn enter(&mut self, node: &Node) -> Walk;

    fn exit(&mut self, _node: &Node) {}
}

/// Depth-first, pre-order walk calling `enter` before and `exit` after a
/// node's children.
pub fn walk<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) {
    if visitor.enter(node) == Walk::Continue
        && let Some(children) = node.children()
    {
        for child in children {
            walk(child, visitor);
        }
    }
    visitor.exit(node);
}

impl Node {
    /// Every `Field` node in the tree, in document order.
    ///
    /// Read-only access for downstream tools that pick out `param`,
    /// `return` or `rtype` fields.
    pub fn fields(&self) -> Vec<&Node> {
        fn visit<'n>(node: &'n Node, out: &mut Vec<&'n Node>) {
            if matches!(node, Node::Field { .. }) {
                out.push(node);
                return;
            }
            for child in node.children().unwrap_or_default() {
                visit(child, out);
            }
        }
        let mut found = vec![];
        visit(self, &mut found);
        found
    }

    /// All text under this node, concatenated. Literal and doctest text is
    /// included verbatim; field content is skipped.
    pub fn plain_text(&self) -> String {
        struct TextCollector(String);

        impl Visitor for TextCollector {
            fn enter(&mut self, node: &Node) -> Walk {
                match node {
                    Node::Field { .. } => Walk::Skip,
                    Node::Text(s) | Node::Literal(s) | Node::Doctest(s) => {
                        self.0.push_str(s);
                        Walk::Continue
                    }
                    _ => Walk::Continue,
                }
            }
        }

        let mut collector = TextCollector(String::new());
        walk(self, &mut collector);
        collector.0
    }
}
