//! a3m output.
//!
//! Rows are written with their aligned columns only; inserted residues were dropped when
//! the rows were parsed and cannot be restored.
use std::io::{self, Write};

use pairmsa_core::{AlignmentRow, PairedAlignment};

use crate::consts::HEADER_MARKER;

///
/// Write a query (if any) followed by rows as a3m records.
///
pub fn write_rows<W: Write>(
    writer: &mut W,
    query: Option<&AlignmentRow>,
    rows: &[AlignmentRow],
) -> io::Result<()> {
    for row in query.into_iter().chain(rows.iter()) {
        writeln!(writer, "{}{}", HEADER_MARKER, row.label)?;
        writeln!(writer, "{}", row.sequence)?;
    }
    Ok(())
}

///
/// Write a paired alignment as a3m.
///
/// The first record concatenates both queries; every paired row follows with a
/// tab-separated `label_a<TAB>label_b` header and the concatenated sequence.
///
pub fn write_paired_a3m<W: Write>(
    writer: &mut W,
    query_a: &AlignmentRow,
    query_b: &AlignmentRow,
    paired: &PairedAlignment,
) -> io::Result<()> {
    writeln!(writer, "{}{}\t{}", HEADER_MARKER, query_a.label, query_b.label)?;
    writeln!(writer, "{}{}", query_a.sequence, query_b.sequence)?;

    for row in paired {
        writeln!(writer, "{}{}\t{}", HEADER_MARKER, row.label_a, row.label_b)?;
        writeln!(writer, "{}{}", row.sequence_a, row.sequence_b)?;
    }
    Ok(())
}
