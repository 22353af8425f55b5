use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

/// Gap character of an aligned column.
pub const GAP: u8 = b'-';

///
/// Fraction of positions in a gapped sequence that are not gaps.
///
/// An empty sequence yields NaN, which fails every threshold comparison.
///
pub fn coverage(sequence: &[u8]) -> f64 {
    let covered = sequence.iter().filter(|&&c| c != GAP).count();
    covered as f64 / sequence.len() as f64
}

///
/// Fraction of positions at which `target` equals `reference`.
///
/// Both sequences are expected to be rows of the same alignment. If the widths differ,
/// positions past the shorter sequence count as mismatches.
///
pub fn identity(target: &[u8], reference: &[u8]) -> f64 {
    let matching = target
        .iter()
        .zip(reference.iter())
        .filter(|(t, r)| t == r)
        .count();
    matching as f64 / target.len().max(reference.len()) as f64
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// Get a writer for a file, gzip-compressing when the path ends in `.gz`.
/// A path of '-' writes to stdout.
///
pub fn get_dynamic_writer(file_path_str: &str) -> Result<BufWriter<Box<dyn Write>>> {
    if file_path_str == "-" {
        return Ok(BufWriter::new(Box::new(std::io::stdout()) as Box<dyn Write>));
    }

    let path = Path::new(file_path_str);
    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let file: Box<dyn Write> = match path.extension() == Some(OsStr::new("gz")) {
        true => Box::new(GzEncoder::new(file, Compression::default())),
        false => Box::new(file),
    };

    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(b"ABCDE", 1.0)]
    #[case(b"-----", 0.0)]
    #[case(b"A-C-", 0.5)]
    fn test_coverage(#[case] sequence: &[u8], #[case] expected: f64) {
        assert_eq!(coverage(sequence), expected);
    }

    #[rstest]
    fn test_empty_sequence_fails_every_threshold() {
        assert!(coverage(b"").is_nan());
        assert!(identity(b"", b"").is_nan());
        assert!(!(coverage(b"") > 0.0));
    }

    #[rstest]
    #[case(b"ABCD", b"ABCD", 1.0)]
    #[case(b"ABCD", b"ABXX", 0.5)]
    #[case(b"----", b"ABCD", 0.0)]
    #[case(b"AB", b"ABCD", 0.5)]
    fn test_identity(#[case] target: &[u8], #[case] reference: &[u8], #[case] expected: f64) {
        assert_eq!(identity(target, reference), expected);
    }

    #[rstest]
    fn test_gz_roundtrip_through_dynamic_io() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("rows.a3m.gz");
        let path_str = path.to_str().unwrap();

        {
            let mut writer = get_dynamic_writer(path_str).unwrap();
            writeln!(writer, ">query").unwrap();
            writeln!(writer, "ABCDE").unwrap();
            writer.flush().unwrap();
        }

        let reader = get_dynamic_reader(&path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec![">query", "ABCDE"]);
    }
}
