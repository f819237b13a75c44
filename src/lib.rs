//! Expand IPv4 and IPv6 CIDR blocks into the host addresses they contain.
//!
//! ```
//! let hosts: Vec<String> = cidr_expand::expand("192.168.0.0/30")
//!     .unwrap()
//!     .map(|ip| ip.to_string())
//!     .collect();
//! assert_eq!(hosts, ["192.168.0.1", "192.168.0.2"]);
//! ```

pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;
use std::io::{self, BufWriter, IsTerminal};

pub use cli::Cli;
pub use error::{CidrError, InputError};
pub use input::InputSource;
pub use models::{Family, Network};
pub use processing::{expand, expand_batch, BatchSummary, Hosts};

/// Run the command line: pick the input, then expand every CIDR to stdout.
///
/// Parse errors go to stderr and do not fail the run.
pub fn run(cli: &Cli) -> Result<BatchSummary, Box<dyn Error>> {
    let source = InputSource::resolve(
        cli.target.as_deref(),
        cli.list.as_deref(),
        io::stdin().is_terminal(),
    )?;
    log::info!("Input source: {source}");

    let cidrs = source.open()?;
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();
    expand_batch(cidrs, &mut out, &mut err)
}
