use std::io::Write;

use anyhow::{Context, Result};
use clap::ArgMatches;

use pairmsa_a3m::{FilterParams, LabelSelection, filter_rows, filter_uniref_rows, read_a3m, write_rows};
use pairmsa_core::utils::{get_dynamic_reader_w_stdin, get_dynamic_writer};

use super::cli::DEFAULT_OUT;

pub fn run_filter(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("a3m")
        .context("A path to an alignment is required.")?;
    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);
    let all_labels = matches.get_flag("all-labels");

    let mut params = FilterParams::default();
    if let Some(&v) = matches.get_one::<f64>("filter-cov") {
        params.filter_cov = v;
    }
    if let Some(&v) = matches.get_one::<f64>("filter-qid") {
        params.filter_qid = v;
    }

    let selection = match all_labels {
        true => LabelSelection::All,
        false => LabelSelection::UniRef,
    };
    let reader = get_dynamic_reader_w_stdin(path)?;
    let alignment =
        read_a3m(reader, selection).with_context(|| format!("Failed to parse a3m file: {}", path))?;

    let rows = match all_labels {
        true => filter_uniref_rows(&alignment, &params),
        false => filter_rows(&alignment, &params),
    };

    let mut writer = get_dynamic_writer(output)?;
    write_rows(&mut writer, alignment.query(), &rows)?;
    writer.flush()?;

    Ok(())
}
