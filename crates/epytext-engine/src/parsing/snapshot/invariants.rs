use crate::parsing::tree::Node;

/// Asserts structural invariants of a parsed tree.
///
/// With `optimized` set, also checks that no node below the root is empty
/// and that no two `Text` siblings are adjacent.
pub fn check(root: &Node, optimized: bool) {
    assert!(
        matches!(root, Node::Doc { .. }),
        "tree root is not a Doc: {root:?}"
    );
    check_node(root, optimized, false, true);
}

fn check_node(node: &Node, optimized: bool, in_field: bool, is_root: bool) {
    if !is_root {
        assert!(!matches!(node, Node::Doc { .. }), "Doc below the root");
    }
    if in_field {
        assert!(
            !matches!(node, Node::Field { .. }),
            "Field nested inside a Field: {node:?}"
        );
    }
    if optimized && !is_root {
        assert!(
            !node.is_empty(),
            "empty node survived optimization: {node:?}"
        );
    }

    let Some(children) = node.children() else {
        return;
    };
    if optimized {
        for pair in children.windows(2) {
            assert!(
                !matches!(pair, [Node::Text(_), Node::Text(_)]),
                "adjacent Text siblings survived optimization: {pair:?}"
            );
        }
    }
    if is_inline(node) {
        for child in children {
            assert!(
                is_inline(child),
                "block node inside inline markup: {child:?}"
            );
        }
    }

    let in_field = in_field || matches!(node, Node::Field { .. });
    for child in children {
        check_node(child, optimized, in_field, false);
    }
}

fn is_inline(node: &Node) -> bool {
    matches!(
        node,
        Node::Paragraph { .. }
            | Node::Markup { .. }
            | Node::Url { .. }
            | Node::CrossRef { .. }
            | Node::Text(_)
    )
}
