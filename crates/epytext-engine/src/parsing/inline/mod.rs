//! # Inline Markup
//!
//! Cursor-based parsing of `<Letter>{...}` markup inside paragraph text.
//!
//! Inline parsing runs after the tree is built and only rewrites the text
//! of `Paragraph` nodes. Literal and doctest leaves keep their raw text.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter-owning types (`Markup`, `Escape`, `Link`)
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`parser`**: `parse_inline()` for one span, `expand()` for a tree
//!
//! ## Brace Matching
//!
//! Markup is a plain brace matcher. Inside markup a bare `{` opens a group
//! whose `}` is text. `E{lb}` and `E{rb}` stand for literal braces.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::{expand, parse_inline};
