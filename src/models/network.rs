//! Address family dispatch for a parsed CIDR.

use super::{ipv4, ipv6, Ipv4, Ipv6};
use crate::error::CidrError;
use std::net::IpAddr;
use std::str::FromStr;

/// The IP version of a [`Network`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Family {
    V4,
    V6,
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// A CIDR block of either family.
///
/// IPv4-mapped IPv6 text such as `::ffff:10.0.0.0/120` stays an IPv6 block.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Network {
    V4(Ipv4),
    V6(Ipv6),
}

impl Network {
    pub fn family(&self) -> Family {
        match self {
            Network::V4(_) => Family::V4,
            Network::V6(_) => Family::V6,
        }
    }

    pub fn prefix_len(&self) -> u8 {
        match self {
            Network::V4(net) => net.mask,
            Network::V6(net) => net.mask,
        }
    }

    /// The network address (host bits cleared).
    pub fn network_addr(&self) -> IpAddr {
        match self {
            Network::V4(net) => IpAddr::V4(net.lo()),
            Network::V6(net) => IpAddr::V6(net.lo()),
        }
    }

    /// True when `addr` is of the same family and inside the block.
    pub fn contains(&self, addr: IpAddr) -> bool {
        match (self, addr) {
            (Network::V4(net), IpAddr::V4(addr)) => net.contains(addr),
            (Network::V6(net), IpAddr::V6(addr)) => net.contains(addr),
            _ => false,
        }
    }

    /// How many addresses expanding this block yields.
    pub fn host_count(&self) -> u128 {
        // prefix was validated on parse
        match self {
            Network::V4(net) => ipv4::num_hosts(net.mask).map(u128::from).unwrap_or(0),
            Network::V6(net) => ipv6::num_hosts(net.mask).unwrap_or(0),
        }
    }
}

impl FromStr for Network {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, _) = ipv4::split_cidr(s)?;
        if addr.contains(':') {
            Ok(Network::V6(Ipv6::new(s)?))
        } else {
            Ok(Network::V4(Ipv4::new(s)?))
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Network::V4(net) => write!(f, "{net}"),
            Network::V6(net) => write!(f, "{net}"),
        }
    }
}
