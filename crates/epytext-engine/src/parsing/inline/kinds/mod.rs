//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`Markup`**: `<Letter>{ ... }` openers and the closing brace
//! - **`Escape`**: `E{lb}` / `E{rb}` substitutions
//! - **`Link`**: the `<target>` suffix of `U{}` and `L{}`

pub mod escape;
pub mod link;
pub mod markup;

pub use escape::Escape;
pub use link::Link;
pub use markup::{Markup, Opener};
