//! Line-oriented a3m reader.
//!
//! Each record is a `>` header followed by one or more sequence lines. The first record is
//! the query and is always kept; later records are kept according to a [`LabelSelection`].

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use pairmsa_core::utils::get_dynamic_reader;
use pairmsa_core::{AlignmentRow, ParsedAlignment};

use crate::consts::{COMMENT_MARKER, HEADER_MARKER, UNIPARC_TAG, UNIREF_TAG, VERSION_SEPARATOR};
use crate::errors::A3mError;
use crate::filter::{FilterParams, filter_rows};

/// Which hit records the reader keeps, and how their labels are normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelSelection {
    /// Keep records whose header mentions a UniRef cluster, excluding UniParc members.
    /// The label becomes the first header token with any `-` version suffix removed.
    #[default]
    UniRef,
    /// Keep every record. The label is the first header token, untouched.
    All,
}

impl LabelSelection {
    ///
    /// Decide whether a hit header is kept, returning its normalised label if so.
    ///
    /// # Arguments
    /// - header: the header line without the leading '>'
    pub fn select(&self, header: &str) -> Option<String> {
        let header = header.trim();
        let code = header.split_whitespace().next().unwrap_or_default();

        match self {
            LabelSelection::UniRef => {
                if !header.contains(UNIREF_TAG) {
                    return None;
                }
                let code = code.split(VERSION_SEPARATOR).next().unwrap_or(code);
                if code.contains(UNIPARC_TAG) {
                    return None;
                }
                Some(code.to_string())
            }
            LabelSelection::All => Some(code.to_string()),
        }
    }
}

/// A record being accumulated; `label` is `None` when the record was not selected.
struct PendingRecord {
    label: Option<String>,
    raw: String,
}

fn push_record(rows: &mut Vec<AlignmentRow>, record: PendingRecord) {
    let Some(label) = record.label else {
        return;
    };

    let row = AlignmentRow::from_a3m(label, &record.raw);
    if let Some(query) = rows.first() {
        if query.width() != row.width() {
            warn!(
                "{} has {} aligned columns but the query has {}",
                row.label,
                row.width(),
                query.width()
            );
        }
    }
    rows.push(row);
}

///
/// Read a3m text into an alignment. Row 0 is the query, labelled with its full header.
///
/// Blank lines and `#` comment lines are skipped. Sequence lines following a header are
/// concatenated. Empty input yields an empty alignment.
///
/// # Arguments
/// - reader: any buffered reader over a3m text
/// - selection: which hit records to keep
///
/// A kept row whose aligned width differs from the query's is logged and kept; the
/// coverage/identity filter scores its missing columns as mismatches.
///
/// # Errors
/// [`A3mError::DataBeforeHeader`] if sequence data precedes the first header.
pub fn read_a3m<R: BufRead>(reader: R, selection: LabelSelection) -> Result<ParsedAlignment, A3mError> {
    let mut rows: Vec<AlignmentRow> = Vec::new();
    let mut pending: Option<PendingRecord> = None;
    let mut seen_query = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        if let Some(header) = line.strip_prefix(HEADER_MARKER) {
            if let Some(record) = pending.take() {
                push_record(&mut rows, record);
            }

            let label = if seen_query {
                selection.select(header)
            } else {
                seen_query = true;
                Some(header.trim().to_string())
            };

            pending = Some(PendingRecord {
                label,
                raw: String::new(),
            });
        } else {
            match pending.as_mut() {
                Some(record) => {
                    if record.label.is_some() {
                        record.raw.push_str(line.trim_start());
                    }
                }
                None => return Err(A3mError::DataBeforeHeader { line: idx + 1 }),
            }
        }
    }

    if let Some(record) = pending.take() {
        push_record(&mut rows, record);
    }

    Ok(ParsedAlignment::new(rows))
}

///
/// Read an a3m file (optionally gzipped) into an alignment.
///
pub fn read_a3m_file(path: &Path, selection: LabelSelection) -> Result<ParsedAlignment> {
    let reader = get_dynamic_reader(path)?;
    let alignment =
        read_a3m(reader, selection).with_context(|| format!("Failed to parse a3m file: {:?}", path))?;

    Ok(alignment)
}

///
/// Parse a3m text, keeping UniRef hits that pass the coverage/identity filter.
///
/// The query is used as the filtering reference and is not part of the result.
pub fn parse_a3m(a3m: &str, params: &FilterParams) -> Result<Vec<AlignmentRow>, A3mError> {
    let alignment = read_a3m(a3m.as_bytes(), LabelSelection::UniRef)?;
    Ok(filter_rows(&alignment, params))
}
