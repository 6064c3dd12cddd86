//! # Document Tree
//!
//! The nested document tree and the passes that build and rewrite it.
//!
//! - **`node`**: `Node` sum type with a nesting/leaf `Shape` view
//! - **`builder`**: `HierarchyBuilder`, flat blocks to nested tree
//! - **`optimize`**: empty-node pruning and text-run merging
//! - **`walk`**: `Visitor` traversal with paired enter/exit callbacks
//!
//! ## Key Invariants
//!
//! - A `Field` never has a `Field` child
//! - `Literal` and `Doctest` are leaves holding verbatim text
//! - After `optimize`, no nesting node below the root is empty, no `Text`
//!   is empty, and no two `Text` siblings are adjacent

pub mod builder;
pub mod node;
pub mod optimize;
pub mod walk;

pub use builder::HierarchyBuilder;
pub use node::{MarkupKind, Node, Shape};
pub use optimize::optimize;
pub use walk::{Visitor, Walk, walk};
