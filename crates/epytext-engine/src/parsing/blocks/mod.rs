//! # Block Recognition
//!
//! Two-phase, line-oriented recognition of epytext blocks.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (indent width, blank status, content).
//!
//! 2. **Block Recognition** (`recognizer`): a `BlockRecognizer` walks the
//!    classified lines, tries the block alternatives in priority order with
//!    save/restore backtracking, and emits a flat `Vec<Block>`.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockKind`
//! - **`kinds`**: block-specific types with owned delimiters
//! - **`classify`**: `EpytextLineClassifier` produces `LineClass` per line
//! - **`indent`**: `IndentStack`, the tab-stop aware indentation tracker
//! - **`recognizer`**: `BlockRecognizer` state machine and expression budget
//!
//! ## Key Invariants
//!
//! - Alternatives are tried as: literal (only after a `::` introducer),
//!   section, list item, field, doctest, paragraph
//! - An abandoned alternative leaves no trace in recognizer state
//! - Literal and doctest text is never inline-parsed

pub mod classify;
pub mod indent;
pub mod kinds;
pub mod recognizer;
pub mod types;

pub use classify::{EpytextLineClassifier, LineClass};
pub use indent::IndentStack;
pub use kinds::SectionLevel;
pub use recognizer::BlockRecognizer;
pub use types::{Block, BlockKind};
