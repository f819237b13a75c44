//! Output of expanded addresses.
//!
//! - [`lines`] - One address per line on any writer

mod lines;

pub use lines::{is_broken_pipe, write_hosts};
