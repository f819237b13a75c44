//! Command line arguments.

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;

/// Expand CIDR blocks into the host addresses they contain, one per line.
///
/// IPv4 blocks exclude the network and broadcast address; IPv6 blocks exclude only the
/// network address.
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// CIDR to extract IPs (example: 192.168.0.0/24)
    #[arg(short, long, value_name = "CIDR")]
    pub target: Option<String>,

    /// File containing a list of CIDRs, one per line
    // empty is accepted here and treated as not given, like an empty --target
    #[arg(short, long, value_name = "FILE", value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub list: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// log4rs YAML configuration file [default: log4rs.yml when present]
    #[arg(long, value_name = "FILE")]
    pub log_config: Option<PathBuf>,
}
