//! The range expander: CIDR text in, host addresses out.

use crate::error::CidrError;
use crate::models::Network;
use colored::Colorize;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ops::RangeInclusive;

/// Lazy, ascending walk over the host addresses of one [`Network`].
///
/// IPv4 skips both the network and the broadcast address and yields nothing for /31 and /32.
/// IPv6 only skips the network address, so the last address of the block is included,
/// and a /128 yields nothing.
///
/// Cloning gives an independent walk from the current position; [`Hosts::new`] restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hosts {
    V4(RangeInclusive<u32>),
    V6(RangeInclusive<u128>),
}

impl Hosts {
    pub fn new(network: &Network) -> Hosts {
        match network {
            Network::V4(net) => {
                let start = u32::from(net.lo());
                let broadcast = u32::from(net.hi());
                // total = broadcast - start + 1, kept in u32 by comparing against 1
                if broadcast - start > 1 {
                    Hosts::V4(start + 1..=broadcast - 1)
                } else {
                    Hosts::V4(empty_range())
                }
            }
            Network::V6(net) => {
                let start = u128::from(net.lo());
                let last = u128::from(net.hi());
                if last > start {
                    Hosts::V6(start + 1..=last)
                } else {
                    Hosts::V6(empty_range())
                }
            }
        }
    }
}

fn empty_range<T: From<u8>>() -> RangeInclusive<T> {
    T::from(1)..=T::from(0)
}

impl Iterator for Hosts {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        match self {
            Hosts::V4(range) => range.next().map(|n| IpAddr::V4(Ipv4Addr::from(n))),
            Hosts::V6(range) => range.next().map(|n| IpAddr::V6(Ipv6Addr::from(n))),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Hosts::V4(range) => range.size_hint(),
            Hosts::V6(range) => range.size_hint(),
        }
    }
}

/// Parse `cidr` and return the walk over its hosts.
///
/// Nothing is materialised, so even `::/0` returns immediately.
pub fn expand(cidr: &str) -> Result<Hosts, CidrError> {
    let network: Network = cidr.parse()?;
    log::debug!(
        "expand({cidr}) {family} network={addr} hosts={count}",
        cidr = cidr.on_blue(),
        family = network.family(),
        addr = network.network_addr(),
        count = network.host_count()
    );
    Ok(Hosts::new(&network))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(cidr: &str) -> Vec<String> {
        expand(cidr)
            .expect("valid cidr")
            .map(|ip| ip.to_string())
            .collect()
    }

    #[test]
    fn test_ipv4_slash30() {
        assert_eq!(lines("192.168.0.0/30"), vec!["192.168.0.1", "192.168.0.2"]);
    }

    #[test]
    fn test_ipv4_slash31_and_32_are_empty() {
        assert!(lines("192.168.0.0/31").is_empty());
        assert!(lines("192.168.0.7/32").is_empty());
    }

    #[test]
    fn test_ipv4_host_bits_are_masked() {
        assert_eq!(lines("10.0.0.5/29").len(), 6);
        assert_eq!(lines("10.0.0.5/29")[0], "10.0.0.1");
        assert_eq!(lines("10.0.0.5/29")[5], "10.0.0.6");
    }

    #[test]
    fn test_ipv4_counts() {
        for prefix in 20..=30u32 {
            let count = expand(&format!("172.16.0.0/{prefix}")).unwrap().count();
            assert_eq!(count, (1usize << (32 - prefix)) - 2, "prefix /{prefix}");
        }
    }

    #[test]
    fn test_ipv4_top_of_space() {
        let hosts = lines("255.255.255.252/30");
        assert_eq!(hosts, vec!["255.255.255.253", "255.255.255.254"]);
    }

    #[test]
    fn test_ipv4_slash0_is_lazy() {
        let mut hosts = expand("0.0.0.0/0").unwrap();
        assert_eq!(hosts.next(), Some("0.0.0.1".parse().unwrap()));
        assert_eq!(hosts.size_hint().0, u32::MAX as usize - 1);
    }

    #[test]
    fn test_ipv6_slash126_includes_last() {
        assert_eq!(
            lines("2001:db8::/126"),
            vec!["2001:db8::1", "2001:db8::2", "2001:db8::3"]
        );
    }

    #[test]
    fn test_ipv6_slash127_and_128() {
        assert_eq!(lines("2001:db8::/127"), vec!["2001:db8::1"]);
        assert!(lines("2001:db8::1/128").is_empty());
    }

    #[test]
    fn test_ipv6_slash0_is_lazy() {
        let mut hosts = expand("::/0").unwrap();
        assert_eq!(hosts.next(), Some("::1".parse().unwrap()));
        assert_eq!(hosts.next(), Some("::2".parse().unwrap()));
    }

    #[test]
    fn test_ipv6_top_of_space() {
        let hosts = lines("ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffc/126");
        assert_eq!(
            hosts.last().map(String::as_str),
            Some("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff")
        );
        assert_eq!(hosts.len(), 3);
    }

    #[test]
    fn test_restartable() {
        let hosts = expand("10.0.0.0/29").unwrap();
        let first: Vec<IpAddr> = hosts.clone().collect();
        let second: Vec<IpAddr> = hosts.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }

    #[test]
    fn test_hosts_stay_in_network() {
        for cidr in ["10.20.30.40/27", "2001:db8:abcd::77/121"] {
            let network: Network = cidr.parse().unwrap();
            let hosts: Vec<IpAddr> = Hosts::new(&network).collect();
            assert_eq!(hosts.len() as u128, network.host_count());
            assert!(hosts.windows(2).all(|w| w[0] < w[1]));
            for host in hosts {
                assert!(network.contains(host), "{host} outside {cidr}");
            }
        }
    }

    #[test]
    fn test_malformed() {
        assert!(expand("not-a-cidr").is_err());
        assert!(expand("10.0.0.0/33").is_err());
    }
}
