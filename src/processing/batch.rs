//! Batch processing of CIDR lines.

use super::expand;
use crate::error::InputError;
use crate::output::{is_broken_pipe, write_hosts};
use colored::Colorize;
use std::error::Error;
use std::io::{self, Write};

/// What a batch run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// CIDR lines seen.
    pub cidrs: usize,
    /// CIDR lines that failed to parse.
    pub rejected: usize,
    /// Addresses written to the output.
    pub addresses: u128,
    /// The reader of the output went away (e.g. `| head`) before the batch was done.
    pub truncated: bool,
}

/// Expand each CIDR in order, writing hosts to `out` and parse errors to `err`.
///
/// A malformed CIDR is reported and skipped. Input errors and output errors other than a
/// closed pipe end the batch. Everything written to `out` before an error message is flushed
/// first, so both streams stay in input order on a terminal.
///
/// # Returns
/// * `Ok(BatchSummary)` - The batch was processed, possibly with rejected lines
/// * `Err` - Reading input or writing output failed
pub fn expand_batch<I, W, E>(
    cidrs: I,
    out: &mut W,
    err: &mut E,
) -> Result<BatchSummary, Box<dyn Error>>
where
    I: IntoIterator<Item = Result<String, InputError>>,
    W: Write,
    E: Write,
{
    let mut summary = BatchSummary::default();

    for cidr in cidrs {
        let cidr = cidr?;
        summary.cidrs += 1;

        let hosts = match expand(&cidr) {
            Ok(hosts) => hosts,
            Err(e) => {
                summary.rejected += 1;
                log::warn!(
                    "{rejected} {cidr}: {e}",
                    rejected = "rejected".on_red(),
                    cidr = cidr.on_blue()
                );
                if checked_output(out.flush())?.is_none() {
                    summary.truncated = true;
                    break;
                }
                writeln!(err, "Error: invalid CIDR address {cidr}: {e}")?;
                continue;
            }
        };

        match checked_output(write_hosts(hosts, out))? {
            Some(written) => summary.addresses += written,
            None => {
                summary.truncated = true;
                break;
            }
        }
    }

    if !summary.truncated && checked_output(out.flush())?.is_none() {
        summary.truncated = true;
    }
    if summary.truncated {
        log::debug!("output closed after {} addresses", summary.addresses);
    }

    Ok(summary)
}

/// A closed pipe is `Ok(None)`: the consumer has what it wanted.
fn checked_output<T>(result: io::Result<T>) -> Result<Option<T>, Box<dyn Error>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_broken_pipe(&e) => Ok(None),
        Err(e) => Err(format!("error writing output: {e}").into()),
    }
}
