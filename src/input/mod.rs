//! Where CIDRs come from.
//!
//! - [`source`] - Choosing between `-t`, `-l` and piped stdin
//! - [`reader`] - Streaming trimmed, non-blank lines

mod reader;
mod source;

pub use reader::read_cidrs;
pub use source::{CidrLines, InputSource};
