//! Input source selection.

use super::read_cidrs;
use crate::error::InputError;
use std::fs::File;
use std::io::{self, BufReader};
use std::iter;
use std::path::{Path, PathBuf};

/// Stream of CIDR lines from any source.
pub type CidrLines = Box<dyn Iterator<Item = Result<String, InputError>>>;

/// Where the CIDRs of a run are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single CIDR given on the command line.
    Target(String),
    /// A file with one CIDR per line.
    List(PathBuf),
    /// Lines piped into standard input.
    Stdin,
}

impl InputSource {
    /// Pick the source for a run.
    ///
    /// A list file wins over a target, and piped stdin is only used when neither is given.
    /// An empty target or list path counts as not given. An interactive stdin is never read, so with
    /// nothing else to go on this is [`InputError::NoSource`].
    pub fn resolve(
        target: Option<&str>,
        list: Option<&Path>,
        stdin_is_terminal: bool,
    ) -> Result<InputSource, InputError> {
        if let Some(list) = list.filter(|path| !path.as_os_str().is_empty()) {
            return Ok(InputSource::List(list.to_path_buf()));
        }
        match target.map(str::trim) {
            Some(target) if !target.is_empty() => Ok(InputSource::Target(target.to_string())),
            _ if !stdin_is_terminal => Ok(InputSource::Stdin),
            _ => Err(InputError::NoSource),
        }
    }

    /// Open the source as a lazy stream of CIDR lines.
    ///
    /// # Returns
    /// * `Ok(CidrLines)` - The CIDRs, read on demand
    /// * `Err` - The list file could not be opened
    pub fn open(&self) -> Result<CidrLines, InputError> {
        match self {
            InputSource::Target(cidr) => Ok(Box::new(iter::once(Ok(cidr.clone())))),
            InputSource::List(path) => {
                let file = File::open(path).map_err(|source| InputError::Open {
                    path: path.clone(),
                    source,
                })?;
                log::info!("Reading CIDRs from file: {}", path.display());
                Ok(Box::new(read_cidrs(
                    BufReader::new(file),
                    &path.display().to_string(),
                )))
            }
            InputSource::Stdin => {
                log::info!("Reading CIDRs from stdin");
                Ok(Box::new(read_cidrs(io::stdin().lock(), "stdin")))
            }
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            InputSource::Target(cidr) => write!(f, "target {cidr}"),
            InputSource::List(path) => write!(f, "list {}", path.display()),
            InputSource::Stdin => write!(f, "stdin"),
        }
    }
}
