//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing an IPv4 network with its prefix length,
//! along with the mask and boundary calculations used when expanding it to hosts.

use crate::error::CidrError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_expand::models::ipv4::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(too_long(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Number of host addresses in a block, network and broadcast excluded.
///
/// Blocks of two addresses or fewer (/31, /32) have no hosts.
pub fn num_hosts(len: u8) -> Result<u64, CidrError> {
    let mask = get_cidr_mask(len)?;
    let total = u64::from(!mask) + 1;
    if total > 2 {
        Ok(total - 2)
    } else {
        Ok(0)
    }
}

fn too_long(len: u8) -> CidrError {
    CidrError::PrefixTooLong {
        len: u32::from(len),
        max: MAX_LENGTH,
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address, host bits as given.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CidrError> {
        let (addr, mask) = split_cidr(addr_cidr.trim())?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr.to_string()))?;
        let mask = parse_prefix(mask, MAX_LENGTH)?;
        Ok(Ipv4 { addr, mask })
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        // mask is checked by Ipv4::new; an out of range mask set by hand keeps the address
        broadcast_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// True when `addr` falls inside this subnet.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        cut_addr(addr, self.mask).is_ok_and(|net| net == self.lo())
    }
}

impl FromStr for Ipv4 {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

/// Split "addr/len" at the last '/'.
pub(crate) fn split_cidr(addr_cidr: &str) -> Result<(&str, &str), CidrError> {
    addr_cidr
        .rsplit_once('/')
        .ok_or(CidrError::MissingPrefix)
}

/// Parse a decimal prefix length and check it against the family width.
///
/// Only ASCII digits are accepted, so "+24" or " 24" are rejected.
pub(crate) fn parse_prefix(len: &str, max: u8) -> Result<u8, CidrError> {
    if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CidrError::InvalidPrefix(len.to_string()));
    }
    let len: u32 = len
        .parse()
        .map_err(|_| CidrError::InvalidPrefix(len.to_string()))?;
    if len > u32::from(max) {
        return Err(CidrError::PrefixTooLong { len, max });
    }
    Ok(len as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 0).unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert!(broadcast_addr(Ipv4Addr::new(255, 255, 255, 255), 24).is_ok());
    }

    #[test]
    fn test_num_hosts() {
        assert_eq!(num_hosts(0).unwrap(), 4294967294);
        assert_eq!(num_hosts(8).unwrap(), 16777214);
        assert_eq!(num_hosts(24).unwrap(), 254);
        assert_eq!(num_hosts(29).unwrap(), 6);
        assert_eq!(num_hosts(30).unwrap(), 2);
        assert_eq!(num_hosts(31).unwrap(), 0);
        assert_eq!(num_hosts(32).unwrap(), 0);
        assert!(num_hosts(33).is_err());
    }

    #[test]
    fn test_new_masks_host_bits() {
        let ip = Ipv4::new(" 10.2.3.4/16 ").unwrap();
        assert_eq!(ip.addr, Ipv4Addr::new(10, 2, 3, 4));
        assert_eq!(ip.mask, 16);
        assert_eq!(ip.lo(), Ipv4Addr::new(10, 2, 0, 0));
        assert_eq!(ip.hi(), Ipv4Addr::new(10, 2, 255, 255));
        assert_eq!(ip.to_string(), "10.2.3.4/16");
    }

    #[test]
    fn test_new_errors() {
        assert_eq!(Ipv4::new("10.0.0.0"), Err(CidrError::MissingPrefix));
        assert_eq!(
            Ipv4::new("10.0.0.0/33"),
            Err(CidrError::PrefixTooLong { len: 33, max: 32 })
        );
        assert_eq!(
            Ipv4::new("10.0.0.0/+8"),
            Err(CidrError::InvalidPrefix("+8".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0/8"),
            Err(CidrError::InvalidAddress("10.0.0".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0.0/"),
            Err(CidrError::InvalidPrefix("".to_string()))
        );
    }

    #[test]
    fn test_contains() {
        let net = Ipv4::new("10.0.10.0/24").unwrap();
        assert!(net.contains(Ipv4Addr::new(10, 0, 10, 0)));
        assert!(net.contains(Ipv4Addr::new(10, 0, 10, 255)));
        assert!(!net.contains(Ipv4Addr::new(10, 0, 11, 0)));

        let all = Ipv4::new("0.0.0.0/0").unwrap();
        assert!(all.contains(Ipv4Addr::new(255, 255, 255, 255)));
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
    }
}
