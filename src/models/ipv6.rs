//! IPv6 counterparts of the [`super::ipv4`] helpers.
//!
//! All arithmetic is done on `u128`, so even a /0 block is handled without overflow.

use super::ipv4::{parse_prefix, split_cidr};
use crate::error::CidrError;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH: u8 = 128;

/// Convert a prefix length to a network mask as u128.
///
/// # Examples
/// ```
/// use cidr_expand::models::ipv6::get_cidr_mask;
/// assert_eq!(get_cidr_mask(64).unwrap(), 0xFFFF_FFFF_FFFF_FFFF_0000_0000_0000_0000);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u128, CidrError> {
    if len > MAX_LENGTH {
        return Err(CidrError::PrefixTooLong {
            len: u32::from(len),
            max: MAX_LENGTH,
        });
    }
    // a shift by the full width is a zero mask (/0)
    Ok(u128::MAX
        .checked_shl(u32::from(MAX_LENGTH - len))
        .unwrap_or(0))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv6Addr, len: u8) -> Result<Ipv6Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv6Addr::from(u128::from(addr) & mask))
}

/// Highest address in the block. IPv6 has no broadcast, so this is a normal host.
pub fn last_addr(addr: Ipv6Addr, len: u8) -> Result<Ipv6Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv6Addr::from((u128::from(addr) & mask) | !mask))
}

/// Number of host addresses in a block: every address except the network address.
///
/// `2^(128-len) - 1`, which is exactly `u128::MAX` for a /0.
pub fn num_hosts(len: u8) -> Result<u128, CidrError> {
    Ok(!get_cidr_mask(len)?)
}

/// IPv6 address with CIDR notation support.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv6 {
    /// The IPv6 address, host bits as given.
    pub addr: Ipv6Addr,
    /// The prefix length (0-128).
    pub mask: u8,
}

impl Ipv6 {
    /// Create a new [`Ipv6`] from a CIDR string (e.g., "2001:db8::/32").
    pub fn new(addr_cidr: &str) -> Result<Ipv6, CidrError> {
        let (addr, mask) = split_cidr(addr_cidr.trim())?;
        let addr: Ipv6Addr = addr
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr.to_string()))?;
        let mask = parse_prefix(mask, MAX_LENGTH)?;
        Ok(Ipv6 { addr, mask })
    }

    /// Lowest (network) address of the block.
    pub fn lo(&self) -> Ipv6Addr {
        cut_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Highest address of the block.
    pub fn hi(&self) -> Ipv6Addr {
        last_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    pub fn contains(&self, addr: Ipv6Addr) -> bool {
        cut_addr(addr, self.mask).is_ok_and(|net| net == self.lo())
    }
}

impl FromStr for Ipv6 {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6::new(s)
    }
}

impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
