use crate::parsing::tree::Node;

/// Target extraction for `U{}` and `L{}`.
pub struct Link;

impl Link {
    pub const TARGET_OPEN: char = '<';
    pub const TARGET_CLOSE: char = '>';

    /// Splits link content into `(target, label)`.
    ///
    /// If the last child is text ending in `<target>`, the target is cut
    /// out of it and the rest is the label. Otherwise the target is all of
    /// the content's text and the content is the label.
    pub fn split_target(mut children: Vec<Node>) -> (String, Vec<Node>) {
        if let Some(Node::Text(last)) = children.last()
            && let Some((label, target)) = Self::trailing_target(last)
        {
            let (label, target) = (label.to_string(), target.to_string());
            children.pop();
            if !label.is_empty() {
                children.push(Node::Text(label));
            }
            if children.is_empty() {
                children.push(Node::Text(target.clone()));
            }
            return (target, children);
        }

        let target = children
            .iter()
            .map(Node::plain_text)
            .collect::<String>()
            .trim()
            .to_string();
        (target, children)
    }

    fn trailing_target(text: &str) -> Option<(&str, &str)> {
        let trimmed = text.trim_end();
        let body = trimmed.strip_suffix(Self::TARGET_CLOSE)?;
        let open = body.rfind(Self::TARGET_OPEN)?;
        Some((body[..open].trim_end(), body[open + 1..].trim()))
    }
}
