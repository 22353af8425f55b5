use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::{coverage, identity};

///
/// One row of an alignment matrix: the gapped sequence (lowercase insertions removed)
/// and, for every aligned column, the number of inserted residues that preceded it.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignmentRow {
    pub label: String,
    pub sequence: String,
    pub insertions: Vec<u32>,
}

impl AlignmentRow {
    ///
    /// Build a row from the raw a3m payload of a record.
    ///
    /// Lowercase residues are insertions relative to the query: they are dropped from
    /// the gapped sequence and counted into the insertion vector of the next aligned column.
    /// Trailing insertions with no aligned column after them are not recorded.
    ///
    /// # Arguments
    /// - label: the record label
    /// - raw: the concatenated a3m sequence lines of the record
    ///
    pub fn from_a3m(label: impl Into<String>, raw: &str) -> AlignmentRow {
        let mut sequence = String::with_capacity(raw.len());
        let mut insertions = Vec::with_capacity(raw.len());
        let mut pending = 0u32;

        for c in raw.chars() {
            if c.is_ascii_lowercase() {
                pending += 1;
            } else {
                sequence.push(c);
                insertions.push(pending);
                pending = 0;
            }
        }

        AlignmentRow {
            label: label.into(),
            sequence,
            insertions,
        }
    }

    ///
    /// Number of aligned columns in the row
    ///
    pub fn width(&self) -> usize {
        self.sequence.len()
    }

    /// Fraction of aligned columns that are not gaps.
    pub fn coverage(&self) -> f64 {
        coverage(self.sequence.as_bytes())
    }

    /// Fraction of aligned columns equal to the matching column of `reference`.
    pub fn identity_to(&self, reference: &AlignmentRow) -> f64 {
        identity(self.sequence.as_bytes(), reference.sequence.as_bytes())
    }

    ///
    /// Same row under a different label
    ///
    pub fn relabel(self, label: impl Into<String>) -> AlignmentRow {
        AlignmentRow {
            label: label.into(),
            ..self
        }
    }
}

impl Display for AlignmentRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.label, self.sequence)
    }
}
