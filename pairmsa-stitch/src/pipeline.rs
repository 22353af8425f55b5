//! Read, filter, look up and stitch in one call.

use std::path::Path;
#[cfg(feature = "http")]
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use pairmsa_a3m::{LabelSelection, filter_rows, read_a3m_file};
use pairmsa_core::{AlignmentRow, PairedAlignment, ParsedAlignment};
use pairmsa_uniprot::{IdResolver, MappingTable};

use crate::config::{PairingConfig, ResolutionConfig};
use crate::errors::LookupError;
use crate::lookup::LookupTable;
use crate::stitcher::stitch;

///
/// Pair two parsed alignments.
///
/// Both alignments are filtered against their own query, turned into lookup tables with
/// `resolver`, and stitched. The queries themselves are not part of the result.
///
pub fn pair_alignments(
    alignment_a: &ParsedAlignment,
    alignment_b: &ParsedAlignment,
    config: &PairingConfig,
    resolver: Option<&dyn IdResolver>,
) -> Result<PairedAlignment, LookupError> {
    let lookup_a = LookupTable::build(filter_rows(alignment_a, &config.filter), resolver)?;
    let lookup_b = LookupTable::build(filter_rows(alignment_b, &config.filter), resolver)?;

    Ok(stitch(&lookup_a, &lookup_b, &config.stitch))
}

/// Both queries of a pairing and the paired hits, ready to be written as paired a3m.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedMsa {
    pub query_a: AlignmentRow,
    pub query_b: AlignmentRow,
    pub paired: PairedAlignment,
}

///
/// Pair two a3m files (plain or gzipped).
///
/// # Arguments
/// - path_a: alignment of the first chain
/// - path_b: alignment of the second chain
/// - config: filtering and stitching parameters
/// - resolver: label resolver, see [`build_resolver`]
///
/// # Errors
/// Fails if either file cannot be read, holds no query record, or cannot be paired.
pub fn pair_a3m_files(
    path_a: &Path,
    path_b: &Path,
    config: &PairingConfig,
    resolver: Option<&dyn IdResolver>,
) -> Result<PairedMsa> {
    let alignment_a = read_a3m_file(path_a, LabelSelection::UniRef)?;
    let alignment_b = read_a3m_file(path_b, LabelSelection::UniRef)?;

    let paired = pair_alignments(&alignment_a, &alignment_b, config, resolver)
        .with_context(|| format!("Failed to pair {:?} with {:?}", path_a, path_b))?;
    info!("paired {} rows", paired.len());

    let (Some(query_a), Some(query_b)) = (alignment_a.query(), alignment_b.query()) else {
        anyhow::bail!("Both alignments need a query record: {:?}, {:?}", path_a, path_b);
    };

    Ok(PairedMsa {
        query_a: query_a.clone(),
        query_b: query_b.clone(),
        paired,
    })
}

///
/// Build the label resolver a [`ResolutionConfig`] asks for.
///
/// A mapping table takes precedence over the REST service. `None` means labels are not
/// resolved at all, which is also the result when resolution is enabled but this crate
/// was built without the `http` feature.
///
pub fn build_resolver(config: &ResolutionConfig) -> Result<Option<Box<dyn IdResolver>>> {
    if let Some(path) = &config.mapping_table {
        let table = MappingTable::from_path(path)?;
        info!("resolving labels from {:?} ({} entries)", path, table.len());
        return Ok(Some(Box::new(table)));
    }

    if !config.enabled {
        return Ok(None);
    }

    #[cfg(feature = "http")]
    {
        let client = pairmsa_uniprot::UniProtClient::builder()
            .with_api(config.api.clone())
            .with_batch_size(config.batch_size)
            .with_poll_interval(Duration::from_millis(config.poll_interval_ms))
            .with_max_polls(config.max_polls)
            .finish();
        Ok(Some(Box::new(client)))
    }

    #[cfg(not(feature = "http"))]
    {
        log::warn!("built without the `http` feature, labels will not be resolved");
        Ok(None)
    }
}
