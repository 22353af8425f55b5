pub const HEADER_MARKER: char = '>';
pub const COMMENT_MARKER: char = '#';

/// Namespace tag a hit label must carry to be kept.
pub const UNIREF_TAG: &str = "UniRef";
/// Marks UniParc (unclustered) members, which cannot be mapped to a UniProt accession.
pub const UNIPARC_TAG: &str = "_UPI";
/// Separates an isoform/version suffix from the accession in a label.
pub const VERSION_SEPARATOR: char = '-';
/// Separates a label from a hit range, as in `UniRef90_P12345/12-200`.
pub const RANGE_SEPARATOR: char = '/';

pub const DEFAULT_FILTER_COV: f64 = 0.5;
pub const DEFAULT_FILTER_QID: f64 = 0.15;
