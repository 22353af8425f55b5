//! # a3m alignments for pairmsa
//!
//! Reads a3m text into [`ParsedAlignment`]s, filters hits by coverage and identity
//! against the query, and writes paired alignments back out as a3m.
//!
//! ```
//! use pairmsa_a3m::{FilterParams, parse_a3m};
//!
//! let rows = parse_a3m(">query\nCDE\n>UniRef100_AB12345\nabCDE\n", &FilterParams::default()).unwrap();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].sequence, "CDE");
//! assert_eq!(rows[0].insertions, vec![2, 0, 0]);
//! ```
pub mod consts;
pub mod errors;
pub mod filter;
pub mod parser;
pub mod writer;

// re-exports
pub use errors::A3mError;
pub use filter::{FilterParams, filter_rows, filter_uniref_rows};
pub use parser::{LabelSelection, parse_a3m, read_a3m, read_a3m_file};
pub use writer::{write_paired_a3m, write_rows};

pub use pairmsa_core::{AlignmentRow, ParsedAlignment};
