#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// One row of a paired alignment: a hit from alignment A and the hit from alignment B
/// judged to come from the same source organism.
///
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PairedRow {
    pub label_a: String,
    pub label_b: String,
    /// Hash distance the pair was accepted at
    pub distance: u64,
    pub sequence_a: String,
    pub sequence_b: String,
    pub insertions_a: Vec<u32>,
    pub insertions_b: Vec<u32>,
}

impl PairedRow {
    ///
    /// Concatenated gapped sequence, `sequence_a` followed by `sequence_b`
    ///
    pub fn combined_sequence(&self) -> String {
        let mut combined = String::with_capacity(self.sequence_a.len() + self.sequence_b.len());
        combined.push_str(&self.sequence_a);
        combined.push_str(&self.sequence_b);
        combined
    }
}

/// The four index-aligned columns of a paired alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PairedColumns {
    pub sequences_a: Vec<String>,
    pub sequences_b: Vec<String>,
    pub insertions_a: Vec<Vec<u32>>,
    pub insertions_b: Vec<Vec<u32>>,
}

///
/// Output of stitching two alignments, rows in acceptance order.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PairedAlignment {
    pub rows: Vec<PairedRow>,
}

impl PairedAlignment {
    pub fn new(rows: Vec<PairedRow>) -> Self {
        PairedAlignment { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PairedRow> {
        self.rows.iter()
    }

    ///
    /// Split the rows into four parallel sequences (sequence_a, sequence_b, insertions_a, insertions_b)
    ///
    pub fn into_columns(self) -> PairedColumns {
        let mut columns = PairedColumns {
            sequences_a: Vec::with_capacity(self.rows.len()),
            sequences_b: Vec::with_capacity(self.rows.len()),
            insertions_a: Vec::with_capacity(self.rows.len()),
            insertions_b: Vec::with_capacity(self.rows.len()),
        };

        for row in self.rows {
            columns.sequences_a.push(row.sequence_a);
            columns.sequences_b.push(row.sequence_b);
            columns.insertions_a.push(row.insertions_a);
            columns.insertions_b.push(row.insertions_b);
        }

        columns
    }
}

impl<'a> IntoIterator for &'a PairedAlignment {
    type Item = &'a PairedRow;
    type IntoIter = std::slice::Iter<'a, PairedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
