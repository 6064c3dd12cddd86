//! # Parsing
//!
//! Bytes in, document tree out.
//!
//! ## Pipeline
//!
//! 1. **`source`**: decode UTF-8, truncate to `max_lines`, split lines
//! 2. **`blocks`**: classify lines, recognize a flat block sequence
//! 3. **`tree`**: nest blocks into a `Node` tree
//! 4. **`inline`**: expand paragraph text into markup nodes
//! 5. **`tree::optimize`**: prune empties and merge text runs (optional)
//!
//! `snapshot` holds the outline dump and invariant checks used by tests.

pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod source;
pub mod tree;

use crate::{error::ParseError, options::ParseOptions};

use blocks::{BlockRecognizer, EpytextLineClassifier, LineClass};
use tree::{HierarchyBuilder, Node};

/// Result of a parse: the tree, if one could be built, and every error met.
///
/// Non-fatal errors (truncation, bad encoding) come with a document; a fatal
/// error leaves `document` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub document: Option<Node>,
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    pub fn is_fatal(&self) -> bool {
        self.errors.iter().any(ParseError::is_fatal)
    }

    /// The document, or the first fatal error. Non-fatal errors are dropped.
    pub fn into_result(self) -> Result<Node, ParseError> {
        if let Some(err) = self.errors.into_iter().find(ParseError::is_fatal) {
            return Err(err);
        }
        Ok(self.document.unwrap_or_else(|| Node::doc(vec![])))
    }
}

/// Parses a docstring into a document tree.
pub fn parse(input: impl AsRef<[u8]>, options: &ParseOptions) -> ParseOutcome {
    let decoded = source::decode(input.as_ref());
    let mut errors = decoded.errors;

    let text = match source::truncate_lines(&decoded.text, options.max_lines) {
        Some(kept) => {
            log::debug!("input truncated to {} lines", options.max_lines);
            errors.push(ParseError::TooManyLines {
                max: options.max_lines,
            });
            kept
        }
        None => decoded.text.as_str(),
    };

    let classifier = EpytextLineClassifier;
    let classes: Vec<LineClass<'_>> = source::lines(text)
        .map(|lr| classifier.classify(&lr))
        .collect();

    let blocks = match BlockRecognizer::new(&classes, options.max_expressions).recognize() {
        Ok(blocks) => blocks,
        Err(err) => {
            errors.push(err);
            return ParseOutcome {
                document: None,
                errors,
            };
        }
    };

    let mut builder = HierarchyBuilder::new();
    for block in blocks {
        builder.push(block);
    }
    let mut document = builder.finish();

    inline::expand(&mut document);
    if options.optimize {
        tree::optimize(&mut document);
    }

    ParseOutcome {
        document: Some(document),
        errors,
    }
}
