//! Mixed-radix encoding of UniProt accessions.
//!
//! UniProt accessions come in two lengths, each built from a fixed per-position grammar:
//!
//! ```text
//! [OPQ][0-9][A-Z0-9]{3}[0-9]
//! [A-NR-Z][0-9]([A-Z][A-Z0-9]{2}[0-9]){1,2}
//! ```
//!
//! Every position admits an ordered set of symbols. Reading an accession as a number whose
//! digit at each position is the symbol's rank, and whose base at each position is the size
//! of that position's symbol set, gives an integer that grows with the accession: neighbouring
//! accessions hash to neighbouring integers.
//!
//! Positions are indexed from the right. A six-character accession uses positions 0..6 of its
//! partition's table. A ten-character accession encodes its trailing four characters first
//! with positions 0..4, then continues with its six-character stem using positions 0..6, so
//! the suffix holds the low-order digits.
//!
//! The encoding is not unique across partitions or lengths.

use crate::consts::{EXTENDED_LEN, STEM_LEN};
use crate::errors::AccessionError;

const INVALID_RANK: u8 = u8::MAX;

/// The ordered symbols allowed at one accession position.
pub struct PositionClass {
    symbols: &'static [u8],
    ranks: [u8; 256],
}

const fn position_class(symbols: &'static [u8]) -> PositionClass {
    let mut ranks = [INVALID_RANK; 256];
    let mut i = 0;
    while i < symbols.len() {
        ranks[symbols[i] as usize] = i as u8;
        i += 1;
    }
    PositionClass { symbols, ranks }
}

impl PositionClass {
    /// Number of symbols allowed at this position.
    pub const fn radix(&self) -> u64 {
        self.symbols.len() as u64
    }

    /// Rank of `symbol` within this position, `None` if it is not allowed here.
    pub fn rank(&self, symbol: u8) -> Option<u64> {
        match self.ranks[symbol as usize] {
            INVALID_RANK => None,
            rank => Some(rank as u64),
        }
    }

    pub fn symbols(&self) -> &'static [u8] {
        self.symbols
    }
}

static DIGIT: PositionClass = position_class(b"0123456789");
static LETTER: PositionClass = position_class(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");
static ALPHANUMERIC: PositionClass = position_class(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");

/// Position tables, rightmost position first.
static STANDARD_GRAMMAR: [&PositionClass; STEM_LEN] =
    [&DIGIT, &ALPHANUMERIC, &ALPHANUMERIC, &LETTER, &DIGIT, &LETTER];
static OPQ_GRAMMAR: [&PositionClass; STEM_LEN] =
    [&DIGIT, &ALPHANUMERIC, &ALPHANUMERIC, &ALPHANUMERIC, &DIGIT, &LETTER];

/// Grammar variant selected by the first character of an accession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Accessions starting with A-N or R-Z
    Standard,
    /// Accessions starting with O, P or Q
    Opq,
}

impl Partition {
    pub fn of(first: u8) -> Option<Partition> {
        match first {
            b'O' | b'P' | b'Q' => Some(Partition::Opq),
            b'A'..=b'Z' => Some(Partition::Standard),
            _ => None,
        }
    }

    pub fn grammar(&self) -> &'static [&'static PositionClass; STEM_LEN] {
        match self {
            Partition::Standard => &STANDARD_GRAMMAR,
            Partition::Opq => &OPQ_GRAMMAR,
        }
    }
}

/// Blocks of an accession in encoding order, with the index of each block's first character.
fn blocks(accession: &[u8]) -> [(usize, &[u8]); 2] {
    let (stem, suffix) = accession.split_at(STEM_LEN);
    [(STEM_LEN, suffix), (0, stem)]
}

fn check_shape(accession: &str) -> Result<Partition, AccessionError> {
    let length = accession.len();
    if length != STEM_LEN && length != EXTENDED_LEN {
        return Err(AccessionError::UnsupportedLength {
            accession: accession.to_string(),
            length,
        });
    }

    Partition::of(accession.as_bytes()[0])
        .ok_or_else(|| AccessionError::UnknownPartition(accession.to_string()))
}

///
/// Encode a UniProt accession as an integer.
///
/// # Arguments
/// - accession: a six- or ten-character UniProt accession
///
/// # Errors
/// Fails if the length is unsupported, the first character is not an uppercase letter, or
/// any character falls outside the grammar of its position. There is no fallback.
///
/// # Examples
/// ```
/// use pairmsa_uniprot::accession_hash;
///
/// let a = accession_hash("A0A022YWF9").unwrap();
/// let b = accession_hash("A0A022YWF8").unwrap();
/// assert_eq!(a - b, 1);
/// ```
pub fn accession_hash(accession: &str) -> Result<u64, AccessionError> {
    let grammar = check_shape(accession)?.grammar();

    let mut hash = 0u64;
    let mut place = 1u64;
    for (offset, block) in blocks(accession.as_bytes()) {
        for (position, &symbol) in block.iter().rev().enumerate() {
            let class = grammar[position];
            let rank = class
                .rank(symbol)
                .ok_or_else(|| AccessionError::InvalidCharacter {
                    accession: accession.to_string(),
                    character: char::from(symbol),
                    index: offset + block.len() - 1 - position,
                })?;
            hash += rank * place;
            place *= class.radix();
        }
    }

    Ok(hash)
}

/// Encode every accession, failing on the first malformed one.
pub fn hash_accessions<I, S>(accessions: I) -> Result<Vec<u64>, AccessionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    accessions
        .into_iter()
        .map(|a| accession_hash(a.as_ref()))
        .collect()
}

///
/// Weight of the character at `index` in the hash of an accession of the given partition
/// and length: raising that character by one rank (without carry) raises the hash by this much.
///
/// Returns `None` for an unsupported length or an index past the end.
pub fn place_value(partition: Partition, length: usize, index: usize) -> Option<u64> {
    if (length != STEM_LEN && length != EXTENDED_LEN) || index >= length {
        return None;
    }

    let grammar = partition.grammar();
    let mut place = 1u64;
    // walk the positions in encoding order until reaching `index`
    let order = (STEM_LEN..length).rev().chain((0..STEM_LEN).rev());
    for (step, i) in order.enumerate() {
        if i == index {
            return Some(place);
        }
        let position = if step < length - STEM_LEN {
            step
        } else {
            step - (length - STEM_LEN)
        };
        place *= grammar[position].radix();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("P12345", 70824185)]
    #[case("Q9Y6K9", 79171309)]
    #[case("O00000", 65664980)]
    #[case("B2RXH2", 4272192)]
    #[case("A0A022YWF9", 3249287339)]
    #[case("A0A023GPI8", 3249388528)]
    #[case("A0A0A0A0A0", 3153954960)]
    fn test_known_hashes(#[case] accession: &str, #[case] expected: u64) {
        assert_eq!(accession_hash(accession).unwrap(), expected);
    }

    #[rstest]
    fn test_hash_is_deterministic() {
        for accession in ["P12345", "A0A022YWF9", "Z9ZZZ9", "Q0AAA0"] {
            assert_eq!(accession_hash(accession), accession_hash(accession));
        }
    }

    #[rstest]
    #[case("A0A022YWF9", "A0A022YWF8", 1)]
    #[case("B2RXH3", "B2RXH2", 1)]
    #[case("A0A022YWG0", "A0A022YWF9", 1)]
    #[case("A0A022YWF9", "A0A022YWA9", 50)]
    fn test_neighbouring_accessions(#[case] high: &str, #[case] low: &str, #[case] distance: u64) {
        let high = accession_hash(high).unwrap();
        let low = accession_hash(low).unwrap();
        assert_eq!(high - low, distance);
    }

    #[rstest]
    fn test_single_rank_step_matches_place_value() {
        // bump each character of an accession by one rank where possible
        for accession in ["A0A022YWF8", "P12344", "Q9Y6K8", "C1ABC2DEF3"] {
            let bytes = accession.as_bytes();
            let partition = Partition::of(bytes[0]).unwrap();
            let base = accession_hash(accession).unwrap();

            for index in 1..bytes.len() {
                let class = {
                    let from_right = if index >= STEM_LEN {
                        bytes.len() - 1 - index
                    } else {
                        STEM_LEN - 1 - index
                    };
                    partition.grammar()[from_right]
                };
                let rank = class.rank(bytes[index]).unwrap() as usize;
                let Some(&next) = class.symbols().get(rank + 1) else {
                    continue;
                };

                let mut bumped = bytes.to_vec();
                bumped[index] = next;
                let bumped = String::from_utf8(bumped).unwrap();

                assert_eq!(
                    accession_hash(&bumped).unwrap() - base,
                    place_value(partition, bytes.len(), index).unwrap(),
                    "{} -> {}",
                    accession,
                    bumped
                );
            }
        }
    }

    #[rstest]
    fn test_place_values() {
        assert_eq!(place_value(Partition::Standard, 10, 9), Some(1));
        assert_eq!(place_value(Partition::Standard, 10, 8), Some(10));
        assert_eq!(place_value(Partition::Standard, 10, 5), Some(10 * 36 * 36 * 26));
        assert_eq!(place_value(Partition::Opq, 6, 5), Some(1));
        assert_eq!(place_value(Partition::Opq, 6, 0), Some(10 * 36 * 36 * 36 * 10));
        assert_eq!(place_value(Partition::Opq, 6, 6), None);
        assert_eq!(place_value(Partition::Opq, 7, 0), None);
    }

    #[rstest]
    fn test_partitions() {
        assert_eq!(Partition::of(b'P'), Some(Partition::Opq));
        assert_eq!(Partition::of(b'A'), Some(Partition::Standard));
        assert_eq!(Partition::of(b'a'), None);
        assert_eq!(Partition::of(b'1'), None);
    }

    #[rstest]
    #[case("P1234")]
    #[case("A0A022YWF")]
    #[case("")]
    fn test_unsupported_length(#[case] accession: &str) {
        assert!(matches!(
            accession_hash(accession),
            Err(AccessionError::UnsupportedLength { .. })
        ));
    }

    #[rstest]
    fn test_unknown_partition() {
        assert_eq!(
            accession_hash("1A2345"),
            Err(AccessionError::UnknownPartition("1A2345".to_string()))
        );
    }

    #[rstest]
    #[case("A12B45", '2', 2)]
    #[case("P1234A", 'A', 5)]
    #[case("A0A022YW9F", 'F', 9)]
    #[case("A0A02aYWF9", 'a', 5)]
    #[case("AAA022YWF9", 'A', 1)]
    fn test_invalid_character(#[case] accession: &str, #[case] character: char, #[case] index: usize) {
        assert_eq!(
            accession_hash(accession),
            Err(AccessionError::InvalidCharacter {
                accession: accession.to_string(),
                character,
                index,
            })
        );
    }

    #[rstest]
    fn test_hash_accessions() {
        assert_eq!(
            hash_accessions(["A0A022YWF9", "A0A022YWF8"]).unwrap(),
            vec![3249287339, 3249287338]
        );
        assert!(hash_accessions(["A0A022YWF9", "bogus"]).is_err());
    }
}
