//! Error types for CIDR parsing and input handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a CIDR string is rejected.
///
/// These are recoverable: the offending entry is reported and the batch carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CidrError {
    /// No `/` separating address and prefix length.
    #[error("missing '/' between address and prefix length")]
    MissingPrefix,
    /// The address part is neither IPv4 nor IPv6.
    #[error("invalid IP address '{0}'")]
    InvalidAddress(String),
    /// The prefix length is empty or not a plain decimal number.
    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),
    /// The prefix length exceeds the width of the address family.
    #[error("prefix length {len} is too long, maximum is {max}")]
    PrefixTooLong { len: u32, max: u8 },
}

/// Failures while locating or reading CIDR input.
///
/// Unlike [`CidrError`] these end the run.
#[derive(Debug, Error)]
pub enum InputError {
    /// The list file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading a line from the input failed.
    #[error("error reading {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
    /// Neither a target, a list file nor piped stdin was given.
    #[error("you must provide a CIDR with -t, or a list of CIDRs with -l or via stdin")]
    NoSource,
}
