use clap::{Arg, Command, arg, value_parser};

pub const FILTER_CMD: &str = "filter";
pub const DEFAULT_OUT: &str = "-";

pub fn create_filter_cli() -> Command {
    Command::new(FILTER_CMD)
        .author("Databio")
        .about("Keep the rows of an a3m alignment that pass the coverage and query identity filter.")
        .arg(Arg::new("a3m").required(true).help("Alignment to filter (.a3m or .a3m.gz); '-' for stdin"))
        .arg(arg!(--output <output> "Filtered a3m output; '-' for stdout"))
        .arg(
            arg!(--"all-labels" "Read every record and keep UniRef labels cut at '/' (jackhmmer output)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(arg!(--"filter-cov" <filter_cov> "Minimum row coverage").value_parser(value_parser!(f64)))
        .arg(arg!(--"filter-qid" <filter_qid> "Minimum identity to the query").value_parser(value_parser!(f64)))
}
