//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a tree as a stable, indented text dump for
//!   `insta` snapshots and the CLI `--tree` view
//! - **`invariants`**: Runtime checks for tree shape (no nested fields, no
//!   empty or adjacent text after optimization, leaves hold no markup)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned down by outline snapshots of small docstrings
//! rather than a separate formal grammar.

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
