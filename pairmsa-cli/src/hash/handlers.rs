use std::io::{Write, stdout};

use anyhow::Result;
use clap::ArgMatches;

use pairmsa_uniprot::accession_hash;

pub fn run_hash(matches: &ArgMatches) -> Result<()> {
    let mut out = stdout().lock();
    write_hashes(&mut out, matches.get_many::<String>("accessions").into_iter().flatten())?;
    out.flush()?;
    Ok(())
}

fn write_hashes<'a, W: Write>(writer: &mut W, accessions: impl Iterator<Item = &'a String>) -> Result<()> {
    for accession in accessions {
        writeln!(writer, "{}\t{}", accession, accession_hash(accession)?)?;
    }
    Ok(())
}
