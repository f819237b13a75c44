//! Domain models for CIDR expansion.
//!
//! This module contains the address math used by the expander:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`Ipv6`] - IPv6 network with CIDR notation support
//! - [`Network`] - either of the above, chosen when parsing

pub mod ipv4;
pub mod ipv6;
mod network;

// Re-export public types
pub use ipv4::Ipv4;
pub use ipv6::Ipv6;
pub use network::{Family, Network};
