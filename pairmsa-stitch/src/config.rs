use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use pairmsa_a3m::FilterParams;
use pairmsa_uniprot::consts::{
    DEFAULT_BATCH_SIZE, DEFAULT_MAX_POLLS, DEFAULT_POLL_INTERVAL, DEFAULT_UNIPROT_API,
};

use crate::consts::{DEFAULT_FILTER_ID, DEFAULT_STITCH_MAX, DEFAULT_STITCH_MIN};

///
/// Acceptance window and redundancy threshold used when stitching.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchParams {
    /// Smallest accepted hash distance (inclusive)
    pub stitch_min: u64,
    /// Largest accepted hash distance (inclusive)
    pub stitch_max: u64,
    /// Pairs more identical than this to an earlier kept pair are dropped; 1.0 or more disables
    pub filter_id: f64,
}

impl Default for StitchParams {
    fn default() -> Self {
        StitchParams {
            stitch_min: DEFAULT_STITCH_MIN,
            stitch_max: DEFAULT_STITCH_MAX,
            filter_id: DEFAULT_FILTER_ID,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Resolve labels with the UniProt ID mapping service
    pub enabled: bool,
    /// Resolve labels from a local `From<TAB>Entry` TSV instead
    pub mapping_table: Option<PathBuf>,
    pub api: String,
    pub batch_size: usize,
    pub poll_interval_ms: u64,
    pub max_polls: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        ResolutionConfig {
            enabled: true,
            mapping_table: None,
            api: DEFAULT_UNIPROT_API.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            max_polls: DEFAULT_MAX_POLLS,
        }
    }
}

///
/// Everything needed to pair two alignments. Every field has a default, so a config
/// file only needs the values it changes:
///
/// ```toml
/// [filter]
/// filter_qid = 0.3
///
/// [stitch]
/// stitch_max = 10
///
/// [resolution]
/// enabled = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    pub filter: FilterParams,
    pub stitch: StitchParams,
    pub resolution: ResolutionConfig,
}

impl PairingConfig {
    ///
    /// Read a pairing config.
    ///
    /// # Arguments
    /// - path: Path to the config file (a .toml) file.
    pub fn try_from(path: &Path) -> Result<PairingConfig> {
        let toml_str = read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: PairingConfig = toml::from_str(&toml_str)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}
