//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The recognizer
//! calls into these; it never hardcodes `@`, `>>>` or `::` itself.
//!
//! - **`Section`**: underline characters and header/underline matching
//! - **`ListItem`**: `-` and `1.2.` style bullets
//! - **`FieldTag`**: `@name arg:` field openers
//! - **`Doctest`**: the `>>>` prompt
//! - **`Literal`**: the `::` introducer and literal dedenting
//!
//! Paragraphs have no delimiters: they are whatever no other kind claims.

pub mod doctest;
pub mod field;
pub mod list;
pub mod literal;
pub mod section;

pub use doctest::Doctest;
pub use field::{FieldHead, FieldTag};
pub use list::{Bullet, ListItem};
pub use literal::Literal;
pub use section::{Section, SectionLevel};
