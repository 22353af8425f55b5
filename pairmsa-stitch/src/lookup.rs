//! Per-alignment lookup tables joining rows to accession hashes.

use fxhash::{FxHashMap, FxHashSet};
use log::debug;

use pairmsa_core::AlignmentRow;
use pairmsa_uniprot::{IdMapping, IdResolver, MappingSource, accession_hash, fallback_accession};

use crate::errors::LookupError;

///
/// Rows of one alignment indexed by label and by accession hash.
///
/// Built once and never mutated. Labels are processed in resolver report order for the
/// labels the resolver resolved, followed by the remaining labels in order of first
/// appearance in the alignment. Without a resolver this is plain alignment order.
/// Where several rows share a label, or several labels share an accession or hash, the
/// one processed last is kept.
///
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    labels: Vec<String>,
    rows: FxHashMap<String, AlignmentRow>,
    label_hashes: FxHashMap<String, Vec<u64>>,
    /// distinct hashes, in order of first appearance
    hashes: Vec<u64>,
    hash_labels: FxHashMap<u64, String>,
}

impl LookupTable {
    ///
    /// Build a lookup table from filtered alignment rows.
    ///
    /// # Arguments
    /// - rows: the hits of one alignment (the query excluded)
    /// - resolver: resolves labels to accessions; `None` skips resolution and derives one
    ///   accession per label from the label itself
    ///
    /// Labels the resolver leaves unresolved also fall back to the accession embedded in
    /// the label (`UniRef100_P12345` → `P12345`).
    ///
    /// # Errors
    /// Fails if the resolver fails, if an unresolved label has no `_`, or if any accession
    /// cannot be hashed.
    pub fn build(
        rows: Vec<AlignmentRow>,
        resolver: Option<&dyn IdResolver>,
    ) -> Result<LookupTable, LookupError> {
        let mut alignment_order: Vec<String> = Vec::new();
        let mut by_label: FxHashMap<String, AlignmentRow> = FxHashMap::default();
        for row in rows {
            if !by_label.contains_key(&row.label) {
                alignment_order.push(row.label.clone());
            }
            by_label.insert(row.label.clone(), row);
        }

        let resolved = match resolver {
            Some(resolver) if !alignment_order.is_empty() => {
                resolver.resolve(&alignment_order, MappingSource::detect(&alignment_order[0]))?
            }
            _ => IdMapping::default(),
        };
        debug!("resolved {} of {} labels", resolved.len(), alignment_order.len());

        // resolved labels in resolver order, then the rest in alignment order
        let mut labels: Vec<String> = Vec::with_capacity(alignment_order.len());
        let mut label_accessions: Vec<Vec<String>> = Vec::with_capacity(alignment_order.len());
        let mut seen: FxHashSet<String> = FxHashSet::default();
        for (label, accessions) in resolved {
            if accessions.is_empty() || !by_label.contains_key(&label) {
                continue;
            }
            seen.insert(label.clone());
            labels.push(label);
            label_accessions.push(accessions);
        }
        for label in alignment_order {
            if seen.contains(&label) {
                continue;
            }
            let fallback = fallback_accession(&label)
                .ok_or_else(|| LookupError::MalformedLabel(label.clone()))?;
            label_accessions.push(vec![fallback.to_string()]);
            labels.push(label);
        }

        // invert to accession -> label, keeping first-seen order
        let mut accession_order: Vec<&str> = Vec::new();
        let mut accession_labels: FxHashMap<&str, &str> = FxHashMap::default();
        for (label, accessions) in labels.iter().zip(label_accessions.iter()) {
            for accession in accessions.iter() {
                if accession_labels.insert(accession, label).is_none() {
                    accession_order.push(accession);
                }
            }
        }

        let mut accession_hashes: FxHashMap<&str, u64> = FxHashMap::default();
        let mut hashes: Vec<u64> = Vec::new();
        let mut hash_labels: FxHashMap<u64, String> = FxHashMap::default();
        for &accession in accession_order.iter() {
            let hash = accession_hash(accession)?;
            accession_hashes.insert(accession, hash);
            if hash_labels
                .insert(hash, accession_labels[accession].to_string())
                .is_none()
            {
                hashes.push(hash);
            }
        }

        let label_hashes: FxHashMap<String, Vec<u64>> = labels
            .iter()
            .zip(label_accessions.iter())
            .map(|(label, accessions)| {
                let hashes = accessions
                    .iter()
                    .map(|a| accession_hashes[a.as_str()])
                    .collect();
                (label.clone(), hashes)
            })
            .collect();

        Ok(LookupTable {
            labels,
            rows: by_label,
            label_hashes,
            hashes,
            hash_labels,
        })
    }

    /// Distinct labels in processing order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn row(&self, label: &str) -> Option<&AlignmentRow> {
        self.rows.get(label)
    }

    pub fn sequence(&self, label: &str) -> Option<&str> {
        self.rows.get(label).map(|r| r.sequence.as_str())
    }

    pub fn insertions(&self, label: &str) -> Option<&[u32]> {
        self.rows.get(label).map(|r| r.insertions.as_slice())
    }

    /// Hashes of every accession of a label, in resolver order.
    pub fn hashes_of(&self, label: &str) -> Option<&[u64]> {
        self.label_hashes.get(label).map(|h| h.as_slice())
    }

    /// Distinct hashes in order of first appearance.
    pub fn hashes(&self) -> &[u64] {
        &self.hashes
    }

    pub fn label_for_hash(&self, hash: u64) -> Option<&str> {
        self.hash_labels.get(&hash).map(|l| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
