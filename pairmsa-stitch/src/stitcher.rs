//! Pairing rows of two lookup tables by nearest accession hash.

use log::info;

use pairmsa_core::utils::identity;
use pairmsa_core::{PairedAlignment, PairedRow};

use crate::config::StitchParams;
use crate::lookup::LookupTable;

///
/// B's hashes sorted for nearest-neighbour search, each remembering its position
/// in B's hash ordering.
///
struct HashIndex {
    sorted: Vec<(u64, usize)>,
}

impl HashIndex {
    fn new(hashes: &[u64]) -> Self {
        let mut sorted: Vec<(u64, usize)> = hashes.iter().copied().zip(0..).collect();
        sorted.sort_unstable();
        HashIndex { sorted }
    }

    ///
    /// The indexed hash closest to any of `query`, with its distance.
    ///
    /// Among hashes at the minimum distance, the one earliest in the ordering
    /// wins. Since indexed hashes are distinct, only the neighbours on either side of each
    /// query hash can be at that distance. `None` when the index is empty.
    fn nearest(&self, query: &[u64]) -> Option<(u64, u64)> {
        let mut best: Option<(u64, usize, u64)> = None;

        for &a in query {
            let i = self.sorted.partition_point(|&(h, _)| h < a);
            let below = i.checked_sub(1).and_then(|j| self.sorted.get(j));
            let above = self.sorted.get(i);

            for &(h, position) in below.into_iter().chain(above) {
                let distance = a.abs_diff(h);
                if best.is_none_or(|(d, p, _)| (distance, position) < (d, p)) {
                    best = Some((distance, position, h));
                }
            }
        }

        best.map(|(distance, _, hash)| (distance, hash))
    }
}

///
/// Pair each row of `a` with the row of `b` whose accession hash is nearest.
///
/// For every label of `a`, the smallest distance between any of its hashes and any hash
/// of `b` is found. The pair is kept when that distance lies within
/// `[stitch_min, stitch_max]`. Pairs are then passed through [`remove_redundant`] unless
/// `filter_id` is 1.0 or more.
///
/// An empty `b` yields no pairs.
pub fn stitch(a: &LookupTable, b: &LookupTable, params: &StitchParams) -> PairedAlignment {
    let index = HashIndex::new(b.hashes());
    let mut rows: Vec<PairedRow> = Vec::new();

    for label_a in a.labels() {
        let Some(hashes_a) = a.hashes_of(label_a) else {
            continue;
        };
        let Some((distance, hash_b)) = index.nearest(hashes_a) else {
            continue;
        };
        if distance < params.stitch_min || distance > params.stitch_max {
            continue;
        }

        let Some(label_b) = b.label_for_hash(hash_b) else {
            continue;
        };
        let (Some(row_a), Some(row_b)) = (a.row(label_a), b.row(label_b)) else {
            continue;
        };

        rows.push(PairedRow {
            label_a: label_a.clone(),
            label_b: label_b.to_string(),
            distance,
            sequence_a: row_a.sequence.clone(),
            sequence_b: row_b.sequence.clone(),
            insertions_a: row_a.insertions.clone(),
            insertions_b: row_b.insertions.clone(),
        });
    }
    info!("stitched {} of {} rows", rows.len(), a.len());

    if params.filter_id < 1.0 {
        rows = remove_redundant(rows, params.filter_id);
        info!("{} pairs left after redundancy filtering", rows.len());
    }

    PairedAlignment::new(rows)
}

///
/// Greedy forward suppression of near-duplicate pairs.
///
/// Pairs are visited in order. Each pair still kept drops every later pair whose
/// concatenated sequence is more than `filter_id` identical to its own. A dropped pair
/// drops nothing. Survivors keep their order.
pub fn remove_redundant(rows: Vec<PairedRow>, filter_id: f64) -> Vec<PairedRow> {
    let combined: Vec<String> = rows.iter().map(|r| r.combined_sequence()).collect();
    let mut keep = vec![true; rows.len()];

    for n in 0..rows.len() {
        if !keep[n] {
            continue;
        }
        for m in (n + 1)..rows.len() {
            if keep[m] && identity(combined[m].as_bytes(), combined[n].as_bytes()) > filter_id {
                keep[m] = false;
            }
        }
    }

    rows.into_iter()
        .zip(keep)
        .filter_map(|(row, kept)| kept.then_some(row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use pairmsa_core::AlignmentRow;

    fn lookup(entries: &[(&str, &str)]) -> LookupTable {
        let rows = entries
            .iter()
            .map(|(label, raw)| AlignmentRow::from_a3m(*label, raw))
            .collect();
        LookupTable::build(rows, None).unwrap()
    }

    fn paired(label: &str, a: &str, b: &str) -> PairedRow {
        PairedRow {
            label_a: label.to_string(),
            label_b: label.to_string(),
            distance: 1,
            sequence_a: a.to_string(),
            sequence_b: b.to_string(),
            insertions_a: vec![0; a.len()],
            insertions_b: vec![0; b.len()],
        }
    }

    fn labels_a(paired: &PairedAlignment) -> Vec<&str> {
        paired.iter().map(|r| r.label_a.as_str()).collect()
    }

    #[rstest]
    fn test_nearest_prefers_earliest_on_ties() {
        // 10 and 14 are both 2 away from 12; 14 comes first in the ordering
        let index = HashIndex::new(&[14, 100, 10]);
        assert_eq!(index.nearest(&[12]), Some((2, 14)));

        let index = HashIndex::new(&[10, 100, 14]);
        assert_eq!(index.nearest(&[12]), Some((2, 10)));
    }

    #[rstest]
    fn test_nearest_over_several_query_hashes() {
        let index = HashIndex::new(&[50, 1000]);
        assert_eq!(index.nearest(&[990, 40, 52]), Some((2, 50)));
        assert_eq!(index.nearest(&[2000]), Some((1000, 1000)));
        assert_eq!(index.nearest(&[]), None);
    }

    #[rstest]
    fn test_nearest_empty_index() {
        let index = HashIndex::new(&[]);
        assert_eq!(index.nearest(&[1, 2, 3]), None);
    }

    #[rstest]
    fn test_stitch_pairs_nearest_rows() {
        let a = lookup(&[
            ("UniRef100_A0A022YWF9", "AAAA"),
            ("UniRef100_P12345", "CCCC"),
        ]);
        let b = lookup(&[
            ("UniRef100_P12347", "GGGG"),
            ("UniRef100_A0A022YWF8", "TTTT"),
        ]);

        let paired = stitch(&a, &b, &StitchParams::default());
        assert_eq!(paired.len(), 2);

        assert_eq!(paired.rows[0].label_b, "UniRef100_A0A022YWF8");
        assert_eq!(paired.rows[0].distance, 1);
        assert_eq!(paired.rows[0].sequence_b, "TTTT");
        assert_eq!(paired.rows[1].label_b, "UniRef100_P12347");
        assert_eq!(paired.rows[1].distance, 2);
    }

    #[rstest]
    // A0A022YWF9 vs. B accessions at distance 0, 1, 20 and 21
    #[case("UniRef100_A0A022YWF9", true, 0)]
    #[case("UniRef100_A0A022YWF8", false, 1)]
    #[case("UniRef100_A0A022YWD9", false, 20)]
    #[case("UniRef100_A0A022YWD8", true, 21)]
    fn test_stitch_window_boundaries(#[case] label_b: &str, #[case] rejected: bool, #[case] distance: u64) {
        let a = lookup(&[("UniRef100_A0A022YWF9", "AAAA")]);
        let b = lookup(&[(label_b, "TTTT")]);

        let paired = stitch(&a, &b, &StitchParams::default());
        assert_eq!(paired.is_empty(), rejected);
        if !rejected {
            assert_eq!(paired.rows[0].distance, distance);
        }
    }

    #[rstest]
    fn test_custom_window_is_inclusive() {
        let a = lookup(&[("UniRef100_A0A022YWF9", "AAAA")]);
        let b = lookup(&[("UniRef100_A0A022YWF4", "TTTT")]);

        let window = |stitch_min, stitch_max| StitchParams {
            stitch_min,
            stitch_max,
            filter_id: 1.0,
        };
        assert_eq!(stitch(&a, &b, &window(5, 5)).len(), 1);
        assert_eq!(stitch(&a, &b, &window(6, 10)).len(), 0);
        assert_eq!(stitch(&a, &b, &window(0, 4)).len(), 0);
    }

    #[rstest]
    fn test_stitch_empty_tables() {
        let a = lookup(&[("UniRef100_A0A022YWF9", "AAAA")]);
        let empty = LookupTable::default();

        assert!(stitch(&a, &empty, &StitchParams::default()).is_empty());
        assert!(stitch(&empty, &a, &StitchParams::default()).is_empty());
    }

    #[rstest]
    fn test_stitch_drops_redundant_pairs() {
        let a = lookup(&[
            ("UniRef100_A0A022YWF9", "AAAAA"),
            ("UniRef100_A0A023GPI8", "AAAAA"),
        ]);
        let b = lookup(&[
            ("UniRef100_A0A022YWF8", "TTTTT"),
            ("UniRef100_A0A023GPI9", "TTTTT"),
        ]);

        let filtered = stitch(&a, &b, &StitchParams::default());
        assert_eq!(labels_a(&filtered), vec!["UniRef100_A0A022YWF9"]);

        let unfiltered = StitchParams {
            filter_id: 1.0,
            ..StitchParams::default()
        };
        assert_eq!(stitch(&a, &b, &unfiltered).len(), 2);
    }

    #[rstest]
    fn test_remove_redundant_does_not_cascade() {
        // 2 is 0.95 identical to 1, 3 is 0.95 identical to 2 but 0.9 identical to 1
        let rows = vec![
            paired("1", "AAAAAAAAAA", "AAAAAAAAAA"),
            paired("2", "AAAAAAAAAA", "AAAAAAAAAC"),
            paired("3", "AAAAAAAAAA", "AAAAAAAACC"),
        ];

        let kept = remove_redundant(rows, 0.9);
        let labels: Vec<&str> = kept.iter().map(|r| r.label_a.as_str()).collect();
        assert_eq!(labels, vec!["1", "3"]);
    }

    #[rstest]
    fn test_remove_redundant_keeps_order() {
        let rows = vec![
            paired("1", "AAAA", "CCCC"),
            paired("2", "GGGG", "TTTT"),
            paired("3", "AAAA", "CCCC"),
            paired("4", "GGGG", "TTAA"),
        ];

        let kept = remove_redundant(rows, 0.8);
        let labels: Vec<&str> = kept.iter().map(|r| r.label_a.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "4"]);
    }
}
