//! Line oriented address output.

use crate::processing::Hosts;
use std::io::{self, Write};

/// Write every host, one per line, returning how many were written.
///
/// `out` should be buffered; this issues one small write per address.
pub fn write_hosts<W: Write>(hosts: Hosts, out: &mut W) -> io::Result<u128> {
    let mut written: u128 = 0;
    for addr in hosts {
        writeln!(out, "{addr}")?;
        written += 1;
    }
    Ok(written)
}

/// The consumer of our output has gone away, e.g. `cidr-expand -t ::/64 | head`.
pub fn is_broken_pipe(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::BrokenPipe
}
