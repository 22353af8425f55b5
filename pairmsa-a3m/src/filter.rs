use log::info;
use serde::{Deserialize, Serialize};

use pairmsa_core::{AlignmentRow, ParsedAlignment};

use crate::consts::{
    DEFAULT_FILTER_COV, DEFAULT_FILTER_QID, RANGE_SEPARATOR, UNIPARC_TAG, UNIREF_TAG,
};

///
/// Coverage and identity thresholds a hit must strictly exceed to be kept.
///
/// Thresholds are policy, not validated: values above 1.0 simply keep nothing.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Minimum fraction of non-gap columns
    pub filter_cov: f64,
    /// Minimum fraction of columns identical to the query
    pub filter_qid: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            filter_cov: DEFAULT_FILTER_COV,
            filter_qid: DEFAULT_FILTER_QID,
        }
    }
}

impl FilterParams {
    /// Filtering is skipped when both thresholds are at or above 1.0.
    pub fn is_enabled(&self) -> bool {
        self.filter_cov < 1.0 || self.filter_qid < 1.0
    }

    pub fn accepts(&self, row: &AlignmentRow, query: &AlignmentRow) -> bool {
        row.coverage() > self.filter_cov && row.identity_to(query) > self.filter_qid
    }
}

///
/// Keep the hits of an alignment that pass the coverage/identity filter.
///
/// The query is the reference and is never part of the result. When the alignment holds
/// only the query, or filtering is disabled, every hit is returned.
///
pub fn filter_rows(alignment: &ParsedAlignment, params: &FilterParams) -> Vec<AlignmentRow> {
    let rows: Vec<AlignmentRow> = match alignment.query() {
        Some(query) if alignment.len() > 1 && params.is_enabled() => alignment
            .hits()
            .iter()
            .filter(|row| params.accepts(row, query))
            .cloned()
            .collect(),
        _ => alignment.hits().to_vec(),
    };

    info!("found {} sequences", rows.len());
    rows
}

///
/// Second-pass filter keeping only UniRef hits, for alignments read with
/// [`LabelSelection::All`](crate::parser::LabelSelection::All).
///
/// Labels are cut at the first `/` (dropping a hit range such as `/12-200`), UniParc
/// members are dropped, and the coverage/identity test is always applied.
///
pub fn filter_uniref_rows(alignment: &ParsedAlignment, params: &FilterParams) -> Vec<AlignmentRow> {
    let Some(query) = alignment.query() else {
        return Vec::new();
    };

    alignment
        .hits()
        .iter()
        .filter_map(|row| {
            if !row.label.starts_with(UNIREF_TAG) {
                return None;
            }
            let label = row.label.split(RANGE_SEPARATOR).next().unwrap_or_default();
            if label.contains(UNIPARC_TAG) || !params.accepts(row, query) {
                return None;
            }
            Some(row.clone().relabel(label))
        })
        .collect()
}
