//! # HTML Rendering
//!
//! Document tree to a constrained HTML tree, then to text.
//!
//! - **`html`**: `HtmlNode`/`Element` with the closed `Tag` set and the
//!   serializer
//! - **`renderer`**: `HtmlRenderer`, a tree `Visitor` with an open-element stack
//! - **`fields`**: deferred field grouping and its signature/prose layouts
//! - **`fixups`**: early heading close and adjacent list merging

pub mod fields;
pub mod fixups;
pub mod html;
pub mod renderer;

pub use html::{Element, HtmlNode, Tag};
pub use renderer::HtmlRenderer;

use crate::parsing::tree::{Node, walk};

/// Renders a document tree to an `<html><body>` tree with fixups applied.
pub fn render(document: &Node) -> HtmlNode {
    let mut renderer = HtmlRenderer::new();
    walk(document, &mut renderer);
    renderer.finish()
}
