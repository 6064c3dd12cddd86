//! Raw input handling: UTF-8 decoding with per-byte error reporting and
//! line splitting/truncation. Everything downstream works on `&str` lines.

pub mod decode;
pub mod lines;

pub use decode::{Decoded, decode};
pub use lines::{LineRef, lines, truncate_lines};
