use super::html::{HtmlNode, Tag};

/// Structural cleanups applied to the finished HTML tree.
pub fn apply(root: &mut HtmlNode) {
    if let HtmlNode::Element(el) = root {
        close_headings_early(&mut el.children);
        merge_adjacent_lists(&mut el.children);
    }
}

/// Moves everything from a heading's first block-level child onwards out
/// to follow the heading as siblings.
pub fn close_headings_early(children: &mut Vec<HtmlNode>) {
    let original = std::mem::take(children);
    for mut node in original {
        let mut spliced = vec![];
        if let HtmlNode::Element(el) = &mut node {
            if el.tag.is_heading() {
                if let Some(split) = el.children.iter().position(|c| !c.is_inline()) {
                    spliced = el.children.split_off(split);
                }
            } else {
                close_headings_early(&mut el.children);
            }
        }
        children.push(node);
        close_headings_early(&mut spliced);
        children.extend(spliced);
    }
}

/// Folds the items of consecutive `<ul>` (or `<ol>`) siblings into the first.
pub fn merge_adjacent_lists(children: &mut Vec<HtmlNode>) {
    let original = std::mem::take(children);
    for mut node in original {
        if let HtmlNode::Element(el) = &mut node {
            merge_adjacent_lists(&mut el.children);
            if matches!(el.tag, Tag::Ul | Tag::Ol)
                && let Some(HtmlNode::Element(prev)) = children.last_mut()
                && prev.tag == el.tag
            {
                prev.children.append(&mut el.children);
                continue;
            }
        }
        children.push(node);
    }
}
