use clap::{Arg, Command};

pub const HASH_CMD: &str = "hash";

pub fn create_hash_cli() -> Command {
    Command::new(HASH_CMD)
        .author("Databio")
        .about("Print the numeric hash of UniProt accessions.")
        .arg(
            Arg::new("accessions")
                .required(true)
                .num_args(1..)
                .help("6- or 10-character UniProt accessions"),
        )
}
