use super::node::Node;

/// Prunes empty nodes and merges adjacent text runs, bottom-up.
///
/// Children are optimized before their parent rebuilds its own child list,
/// so a node emptied by pruning is itself pruned one level up. The root is
/// never removed, even when it ends up empty.
pub fn optimize(node: &mut Node) {
    let Some(children) = node.children_mut() else {
        return;
    };

    let original = std::mem::take(children);
    let mut rebuilt = Vec::with_capacity(original.len());
    let mut run: Option<String> = None;

    for mut child in original {
        optimize(&mut child);
        match child {
            Node::Text(s) => run.get_or_insert_with(String::new).push_str(&s),
            other if other.is_empty() => {}
            other => {
                flush_run(&mut rebuilt, run.take());
                rebuilt.push(other);
            }
        }
    }
    flush_run(&mut rebuilt, run);

    *children = rebuilt;
}

fn flush_run(out: &mut Vec<Node>, run: Option<String>) {
    if let Some(text) = run
        && !text.is_empty()
    {
        out.push(Node::Text(text));
    }
}
