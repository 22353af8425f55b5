use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::*;

use pairmsa_a3m::{
    FilterParams, LabelSelection, filter_rows, filter_uniref_rows, read_a3m, read_a3m_file,
    write_rows,
};

#[fixture]
fn path_to_data() -> PathBuf {
    std::env::current_dir().unwrap().join("../tests/data/a3m")
}

fn labels(rows: &[pairmsa_a3m::AlignmentRow]) -> Vec<&str> {
    rows.iter().map(|r| r.label.as_str()).collect()
}

#[rstest]
fn test_read_complex_a(path_to_data: PathBuf) {
    let alignment = read_a3m_file(&path_to_data.join("complex_a.a3m"), LabelSelection::UniRef).unwrap();

    assert_eq!(alignment.query().unwrap().label, "101 chain A");
    assert_eq!(
        labels(alignment.hits()),
        vec![
            "UniRef100_A0A022YWF9",
            "UniRef100_P12345",
            "UniRef100_Q9Y6K9",
            "UniRef100_B2RXH2",
            "UniRef100_A0A023GPI8",
        ]
    );

    for row in alignment.rows.iter() {
        assert_eq!(row.insertions.len(), row.sequence.len());
        assert_eq!(row.width(), alignment.width());
    }
    assert_eq!(alignment.hits()[2].insertions, vec![0, 0, 2, 0, 0, 0, 0, 0, 0, 0]);
}

#[rstest]
fn test_read_gzipped_matches_plain(path_to_data: PathBuf) {
    let plain = read_a3m_file(&path_to_data.join("complex_a.a3m"), LabelSelection::UniRef).unwrap();
    let gzipped =
        read_a3m_file(&path_to_data.join("complex_a.a3m.gz"), LabelSelection::UniRef).unwrap();
    assert_eq!(plain, gzipped);
}

#[rstest]
fn test_filter_complex_a(path_to_data: PathBuf) {
    let alignment = read_a3m_file(&path_to_data.join("complex_a.a3m"), LabelSelection::UniRef).unwrap();
    let rows = filter_rows(&alignment, &FilterParams::default());

    // the low coverage hit is the only one dropped
    assert_eq!(
        labels(&rows),
        vec![
            "UniRef100_A0A022YWF9",
            "UniRef100_P12345",
            "UniRef100_Q9Y6K9",
            "UniRef100_A0A023GPI8",
        ]
    );
}

#[rstest]
fn test_multiline_records(path_to_data: PathBuf) {
    let alignment = read_a3m_file(&path_to_data.join("complex_b.a3m"), LabelSelection::UniRef).unwrap();

    let last = alignment.hits().last().unwrap();
    assert_eq!(last.label, "UniRef100_A0A023GPI9");
    assert_eq!(last.sequence, "GSHMLEDPVA");
    assert_eq!(alignment.hits().len(), 4);
}

#[rstest]
fn test_jackhmmer_label_filter(path_to_data: PathBuf) {
    let alignment = read_a3m_file(&path_to_data.join("jackhmmer.a3m"), LabelSelection::All).unwrap();
    assert_eq!(alignment.hits().len(), 5);

    let rows = filter_uniref_rows(&alignment, &FilterParams::default());
    assert_eq!(labels(&rows), vec!["UniRef90_P12345", "UniRef90_A0A022YWF9"]);
    assert_eq!(rows[1].insertions, vec![0, 0, 0, 3, 0, 0, 0, 0, 0, 0]);
}

#[rstest]
fn test_written_rows_read_back(path_to_data: PathBuf) {
    let alignment = read_a3m_file(&path_to_data.join("complex_a.a3m"), LabelSelection::UniRef).unwrap();
    let rows = filter_rows(&alignment, &FilterParams::default());

    let tempdir = tempfile::tempdir().unwrap();
    let out_path = tempdir.path().join("filtered.a3m");
    let mut out = std::fs::File::create(&out_path).unwrap();
    write_rows(&mut out, alignment.query(), &rows).unwrap();
    drop(out);

    let text = std::fs::read_to_string(&out_path).unwrap();
    let reread = read_a3m(text.as_bytes(), LabelSelection::UniRef).unwrap();
    assert_eq!(labels(reread.hits()), labels(&rows));
    assert_eq!(reread.hits()[0].sequence, rows[0].sequence);
}
