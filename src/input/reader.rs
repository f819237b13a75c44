//! Line reader for CIDR lists.

use crate::error::InputError;
use std::io::BufRead;
use std::iter;

/// Stream the CIDRs in `reader`, one per line.
///
/// Lines are trimmed and blank lines skipped. Lines are read on demand, so a large list is
/// never held in memory. Bytes that are not UTF-8 are kept as replacement characters, so such
/// a line reaches the parser and is rejected like any other malformed CIDR. A failed read is
/// returned once, naming `name`, and ends the stream.
pub fn read_cidrs<R: BufRead>(
    mut reader: R,
    name: &str,
) -> impl Iterator<Item = Result<String, InputError>> {
    let name = name.to_string();
    let mut failed = false;
    let mut buf = Vec::new();
    iter::from_fn(move || {
        if failed {
            return None;
        }
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(String::from_utf8_lossy(&buf).trim().to_string())),
            Err(source) => {
                failed = true;
                Some(Err(InputError::Read {
                    name: name.clone(),
                    source,
                }))
            }
        }
    })
    .filter(|line| !matches!(line, Ok(line) if line.is_empty()))
}
