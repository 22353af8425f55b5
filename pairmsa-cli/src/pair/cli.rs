use clap::{Arg, Command, arg, value_parser};

pub const PAIR_CMD: &str = "pair";
pub const DEFAULT_OUT: &str = "-";

pub fn create_pair_cli() -> Command {
    Command::new(PAIR_CMD)
        .author("Databio")
        .about("Pair two a3m alignments row by row and write the paired alignment as a3m.")
        .arg(Arg::new("a3m_a").required(true).help("Alignment of the first chain (.a3m or .a3m.gz)"))
        .arg(Arg::new("a3m_b").required(true).help("Alignment of the second chain (.a3m or .a3m.gz)"))
        .arg(arg!(--output <output> "Paired a3m output; '-' for stdout"))
        .arg(arg!(--json <json> "Also write the paired columns as JSON"))
        .arg(arg!(--config <config> "Pairing config (.toml)"))
        .arg(arg!(--"mapping-table" <mapping_table> "Resolve labels from a From/Entry TSV instead of the UniProt service"))
        .arg(
            arg!(--offline "Do not resolve labels; use the accession embedded in each label")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(arg!(--"stitch-min" <stitch_min> "Smallest accepted hash distance").value_parser(value_parser!(u64)))
        .arg(arg!(--"stitch-max" <stitch_max> "Largest accepted hash distance").value_parser(value_parser!(u64)))
        .arg(arg!(--"filter-id" <filter_id> "Redundancy threshold for paired rows").value_parser(value_parser!(f64)))
        .arg(arg!(--"filter-cov" <filter_cov> "Minimum row coverage").value_parser(value_parser!(f64)))
        .arg(arg!(--"filter-qid" <filter_qid> "Minimum identity to the query").value_parser(value_parser!(f64)))
}
