mod filter;
mod hash;
mod pair;

use anyhow::Result;
use clap::{Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "pairmsa";
    pub const BIN_NAME: &str = "pairmsa";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Pair the multiple sequence alignments of two protein chains by UniProt accession proximity.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Log debug messages")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(pair::cli::create_pair_cli())
        .subcommand(filter::cli::create_filter_cli())
        .subcommand(hash::cli::create_hash_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    let log_level = if matches.get_flag("verbose") { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match matches.subcommand() {
        //
        // PAIR
        //
        Some((pair::cli::PAIR_CMD, matches)) => {
            pair::handlers::run_pair(matches)?;
        }

        //
        // FILTER
        //
        Some((filter::cli::FILTER_CMD, matches)) => {
            filter::handlers::run_filter(matches)?;
        }

        //
        // HASH
        //
        Some((hash::cli::HASH_CMD, matches)) => {
            hash::handlers::run_hash(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
