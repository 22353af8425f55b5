use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use pairmsa_a3m::write_paired_a3m;
use pairmsa_core::utils::get_dynamic_writer;
use pairmsa_stitch::{PairingConfig, build_resolver, pair_a3m_files};

use super::cli::DEFAULT_OUT;

///
/// Fold command line overrides into the config file (or the defaults).
///
fn pairing_config(matches: &ArgMatches) -> Result<PairingConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => PairingConfig::try_from(Path::new(path))?,
        None => PairingConfig::default(),
    };

    if let Some(&v) = matches.get_one::<u64>("stitch-min") {
        config.stitch.stitch_min = v;
    }
    if let Some(&v) = matches.get_one::<u64>("stitch-max") {
        config.stitch.stitch_max = v;
    }
    if let Some(&v) = matches.get_one::<f64>("filter-id") {
        config.stitch.filter_id = v;
    }
    if let Some(&v) = matches.get_one::<f64>("filter-cov") {
        config.filter.filter_cov = v;
    }
    if let Some(&v) = matches.get_one::<f64>("filter-qid") {
        config.filter.filter_qid = v;
    }
    if let Some(path) = matches.get_one::<String>("mapping-table") {
        config.resolution.mapping_table = Some(PathBuf::from(path));
    }
    if matches.get_flag("offline") {
        config.resolution.enabled = false;
        config.resolution.mapping_table = None;
    }

    Ok(config)
}

pub fn run_pair(matches: &ArgMatches) -> Result<()> {
    let path_a = matches
        .get_one::<String>("a3m_a")
        .context("A path to the first alignment is required.")?;
    let path_b = matches
        .get_one::<String>("a3m_b")
        .context("A path to the second alignment is required.")?;
    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let config = pairing_config(matches)?;
    let resolver = build_resolver(&config.resolution)?;

    let msa = pair_a3m_files(Path::new(path_a), Path::new(path_b), &config, resolver.as_deref())?;

    let mut writer = get_dynamic_writer(output)?;
    write_paired_a3m(&mut writer, &msa.query_a, &msa.query_b, &msa.paired)?;
    writer.flush()?;

    if let Some(json) = matches.get_one::<String>("json") {
        let mut writer = get_dynamic_writer(json)?;
        serde_json::to_writer(&mut writer, &msa.paired.into_columns())
            .with_context(|| format!("Failed to write JSON output: {}", json))?;
        writer.flush()?;
    }

    Ok(())
}
