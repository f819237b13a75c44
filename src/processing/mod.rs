//! CIDR expansion logic.
//!
//! - [`hosts`] - Expanding one CIDR into its host addresses
//! - [`batch`] - Expanding a sequence of CIDRs, reporting bad ones

mod batch;
mod hosts;

// Re-export public functions
pub use batch::{expand_batch, BatchSummary};
pub use hosts::{expand, Hosts};
