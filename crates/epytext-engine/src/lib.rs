//! Parser and HTML renderer for epytext docstrings.
//!
//! ```
//! use epytext_engine::{ParseOptions, to_html};
//!
//! let html = to_html("Header\n======\n\np1\n", &ParseOptions::default()).unwrap();
//! assert_eq!(html, "<html><body><h1>Header</h1><p>p1</p></body></html>");
//! ```

pub mod error;
pub mod options;
pub mod parsing;
pub mod render;

pub use error::{ErrorKind, ParseError, RenderError};
pub use options::ParseOptions;
pub use parsing::{
    ParseOutcome, parse,
    tree::{MarkupKind, Node, Shape, Visitor, Walk, walk},
};
pub use render::{HtmlNode, render};

/// Parses and renders in one call.
///
/// Non-fatal errors are dropped; use [`parse`] to see them.
pub fn to_html(input: impl AsRef<[u8]>, options: &ParseOptions) -> Result<String, ParseError> {
    let document = parse(input, options).into_result()?;
    Ok(render(&document).to_html_string())
}
