//! # Stitching two alignments into a paired alignment
//!
//! Each alignment is turned into a [`LookupTable`] mapping its labels to UniProt accession
//! hashes. Every row of alignment A is then paired with the row of alignment B whose hash is
//! nearest, if that distance falls inside a window, and near-duplicate pairs are dropped.
//!
//! # Feature Flags
//!
//! - `http` (default): lets [`pipeline`] build a UniProt REST client from a [`PairingConfig`]
pub mod config;
pub mod consts;
pub mod errors;
pub mod lookup;
pub mod pipeline;
pub mod stitcher;

// re-exports
pub use config::{PairingConfig, ResolutionConfig, StitchParams};
pub use errors::LookupError;
pub use lookup::LookupTable;
pub use pipeline::{PairedMsa, build_resolver, pair_a3m_files, pair_alignments};
pub use stitcher::{remove_redundant, stitch};
