//! # pairmsa-core
//!
//! Shared models and small helpers used by every pairmsa crate: alignment rows parsed
//! from a3m text, the alignment they belong to, and the paired rows produced by stitching
//! two alignments together.
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use models::{AlignmentRow, PairedAlignment, PairedColumns, PairedRow, ParsedAlignment};
