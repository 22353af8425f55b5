use std::time::Duration;

/// Length of a six-character accession, and of the stem of a ten-character one.
pub const STEM_LEN: usize = 6;
/// Length of the extended accession format.
pub const EXTENDED_LEN: usize = 10;

pub const DEFAULT_UNIPROT_API: &str = "https://rest.uniprot.org";
/// Most labels submitted in a single ID mapping job.
pub const DEFAULT_BATCH_SIZE: usize = 10_000;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);
pub const DEFAULT_MAX_POLLS: usize = 200;

/// Header of the first column of an ID mapping TSV.
pub const MAPPING_TSV_HEADER: &str = "From";
/// Separates the namespace from the member identifier in a UniRef label.
pub const LABEL_SEPARATOR: char = '_';
