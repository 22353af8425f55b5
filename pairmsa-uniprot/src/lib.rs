//! # UniProt accessions for pairmsa
//!
//! Two concerns live here:
//!
//! - [`accession`]: a locality-preserving integer encoding of UniProt accessions. Accessions
//!   that differ only in their trailing characters (consecutive entries, isoform neighbours)
//!   map to nearby integers, which is what lets two alignments be paired by hash distance.
//! - [`mapping`]: resolving UniRef cluster labels to the UniProtKB accessions they contain,
//!   through the [`IdResolver`] trait. [`MappingTable`] resolves from a local TSV; with the
//!   `http` feature (default), [`client::UniProtClient`] queries the UniProt ID mapping service.
//!
//! # Feature Flags
//!
//! - `http` (default): enables the UniProt REST client
pub mod accession;
pub mod consts;
pub mod errors;
pub mod mapping;

#[cfg(feature = "http")]
pub mod client;

// re-exports
pub use accession::{Partition, PositionClass, accession_hash, hash_accessions, place_value};
pub use errors::{AccessionError, MappingError};
pub use mapping::{IdMapping, IdResolver, MappingSource, MappingTable, fallback_accession, parse_mapping_tsv};

#[cfg(feature = "http")]
pub use client::{UniProtClient, UniProtClientBuilder};
