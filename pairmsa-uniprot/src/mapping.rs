//! Resolving alignment labels to UniProtKB accessions.

use std::fmt::{self, Display};
use std::io::BufRead;
use std::ops::Index;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use fxhash::{FxHashMap, FxHashSet};

use pairmsa_core::utils::get_dynamic_reader;

use crate::consts::{LABEL_SEPARATOR, MAPPING_TSV_HEADER};
use crate::errors::MappingError;

///
/// Label → accessions, in the order the resolver reported them.
///
/// Labels keep the position of their first report; later reports for the same label
/// append accessions to it.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMapping {
    entries: Vec<(String, Vec<String>)>,
    index: FxHashMap<String, usize>,
}

impl IdMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more accession for `label`.
    pub fn push(&mut self, label: &str, accession: String) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1.push(accession),
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), vec![accession]));
            }
        }
    }

    /// Record several accessions for `label` at once.
    pub fn extend_label(&mut self, label: String, accessions: impl IntoIterator<Item = String>) {
        let i = match self.index.get(&label) {
            Some(&i) => i,
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push((label, Vec::new()));
                self.entries.len() - 1
            }
        };
        self.entries[i].1.extend(accessions);
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.index.get(label).map(|&i| self.entries[i].1.as_slice())
    }

    pub fn contains_key(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Labels in report order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, Vec<String>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for IdMapping {
    type Output = [String];

    fn index(&self, label: &str) -> &[String] {
        match self.get(label) {
            Some(accessions) => accessions,
            None => panic!("label {:?} is not in the mapping", label),
        }
    }
}

impl FromIterator<(String, Vec<String>)> for IdMapping {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut mapping = IdMapping::new();
        for (label, accessions) in iter {
            mapping.extend_label(label, accessions);
        }
        mapping
    }
}

impl IntoIterator for IdMapping {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a IdMapping {
    type Item = &'a (String, Vec<String>);
    type IntoIter = std::slice::Iter<'a, (String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// UniRef cluster namespace the labels being resolved belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingSource {
    UniRef100,
    UniRef90,
    UniRef50,
}

impl MappingSource {
    ///
    /// Guess the namespace from a label; anything that is not
    /// UniRef100 or UniRef50 is treated as UniRef90.
    ///
    pub fn detect(label: &str) -> MappingSource {
        if label.contains("UniRef100") {
            MappingSource::UniRef100
        } else if label.contains("UniRef50") {
            MappingSource::UniRef50
        } else {
            MappingSource::UniRef90
        }
    }

    /// Database name used by the UniProt ID mapping service.
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingSource::UniRef100 => "UniRef100",
            MappingSource::UniRef90 => "UniRef90",
            MappingSource::UniRef50 => "UniRef50",
        }
    }
}

impl Display for MappingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MappingSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniref100" => Ok(MappingSource::UniRef100),
            "uniref90" => Ok(MappingSource::UniRef90),
            "uniref50" => Ok(MappingSource::UniRef50),
            _ => Err(format!("Unknown mapping source: {}", s)),
        }
    }
}

///
/// Something that can resolve alignment labels to UniProtKB accessions.
///
/// Labels the resolver cannot resolve are simply absent from the returned mapping. The
/// mapping lists labels in the order the resolver reported them, which need not be the
/// order they were requested in.
/// Implementations do not retry; failures are returned to the caller.
///
pub trait IdResolver {
    fn resolve(&self, labels: &[String], source: MappingSource) -> Result<IdMapping, MappingError>;
}

///
/// Accession derived from a label when no resolver result exists:
/// the second `_`-separated field, so `UniRef100_P12345` yields `P12345`.
///
/// Returns `None` when the label has no `_`.
pub fn fallback_accession(label: &str) -> Option<&str> {
    label.split(LABEL_SEPARATOR).nth(1)
}

///
/// Parse an ID mapping TSV (`From<TAB>Entry` per line) into a mapping.
///
/// The `From` header row and blank lines are skipped, as are lines with fewer than two
/// columns. A label listed on several lines accumulates accessions in file order.
pub fn parse_mapping_tsv<R: BufRead>(reader: R) -> std::io::Result<IdMapping> {
    let mut mapping = IdMapping::default();
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let (Some(from), Some(to)) = (fields.next(), fields.next()) else {
            continue;
        };
        if from == MAPPING_TSV_HEADER {
            continue;
        }
        mapping.push(from, to.to_string());
    }
    Ok(mapping)
}

///
/// A precomputed label → accession table, for resolving without network access.
///
/// Resolved labels are reported in table order, as a saved service response would be.
///
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    mapping: IdMapping,
}

impl MappingTable {
    pub fn new(mapping: IdMapping) -> Self {
        MappingTable { mapping }
    }

    /// Load a table from an ID mapping TSV file (optionally gzipped).
    pub fn from_path(path: &Path) -> Result<MappingTable> {
        let reader = get_dynamic_reader(path)?;
        let mapping = parse_mapping_tsv(reader)
            .with_context(|| format!("Failed to read ID mapping table: {:?}", path))?;
        Ok(MappingTable { mapping })
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl IdResolver for MappingTable {
    fn resolve(&self, labels: &[String], _source: MappingSource) -> Result<IdMapping, MappingError> {
        let requested: FxHashSet<&str> = labels.iter().map(String::as_str).collect();
        Ok(self
            .mapping
            .iter()
            .filter(|(label, _)| requested.contains(label.as_str()))
            .cloned()
            .collect())
    }
}
