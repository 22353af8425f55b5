#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::row::AlignmentRow;

///
/// An alignment matrix read from a3m text. Row 0 is the query; every other row is a hit.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedAlignment {
    pub rows: Vec<AlignmentRow>,
}

impl ParsedAlignment {
    pub fn new(rows: Vec<AlignmentRow>) -> Self {
        ParsedAlignment { rows }
    }

    /// The query row, `None` for an empty alignment.
    pub fn query(&self) -> Option<&AlignmentRow> {
        self.rows.first()
    }

    /// Every row except the query.
    pub fn hits(&self) -> &[AlignmentRow] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Consume the alignment, returning only the hits.
    pub fn into_hits(mut self) -> Vec<AlignmentRow> {
        if self.rows.is_empty() {
            return self.rows;
        }
        self.rows.split_off(1)
    }

    ///
    /// Number of aligned columns (the query width), zero when empty
    ///
    pub fn width(&self) -> usize {
        self.query().map_or(0, |q| q.width())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
