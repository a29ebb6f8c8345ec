//! Host range arithmetic for `address/prefix` blocks.

use crate::DomainError;
use std::fmt;
use std::net::Ipv4Addr;

/// Host range of an IPv4 block, computed with plain u32 arithmetic.
///
/// `first` and `last` exclude the network and broadcast addresses. For /31
/// and /32 this yields `first > last`; the values are reported unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Range {
    pub network: u32,
    pub broadcast: u32,
    pub first: u32,
    pub last: u32,
}

impl Ipv4Range {
    pub fn new(address: Ipv4Addr, prefix: u8) -> Result<Self, DomainError> {
        if prefix > 32 {
            return Err(DomainError::InvalidArgument(format!(
                "Invalid prefix length: {}",
                prefix
            )));
        }
        let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
        let network = u32::from(address) & mask;
        let broadcast = network | !mask;
        Ok(Self {
            network,
            broadcast,
            first: network.wrapping_add(1),
            last: broadcast.wrapping_sub(1),
        })
    }

    pub fn first_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.first)
    }

    pub fn last_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.last)
    }
}

impl fmt::Display for Ipv4Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "First: {} Last: {}", self.first_addr(), self.last_addr())
    }
}

/// Parsed form of a `.cidr` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CidrBlock {
    V4(Ipv4Range),
    /// IPv6 blocks are recognised but not computed.
    V6 { address: String, prefix: u8 },
}

impl CidrBlock {
    pub fn parse(argument: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidArgument(format!("Invalid CIDR: {}", argument));

        let (address, prefix) = argument.split_once('/').ok_or_else(invalid)?;
        let prefix: u8 = prefix.parse().map_err(|_| invalid())?;

        if address.contains(':') {
            if prefix > 128 {
                return Err(invalid());
            }
            return Ok(CidrBlock::V6 {
                address: address.to_string(),
                prefix,
            });
        }

        let address: Ipv4Addr = address.parse().map_err(|_| invalid())?;
        Ipv4Range::new(address, prefix)
            .map(CidrBlock::V4)
            .map_err(|_| invalid())
    }

    pub fn describe(&self) -> String {
        match self {
            CidrBlock::V4(range) => range.to_string(),
            CidrBlock::V6 { address, prefix } => {
                format!("IPv6 CIDR calculation: {}/{}", address, prefix)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_24() {
        let range = Ipv4Range::new("10.0.0.0".parse().unwrap(), 24).unwrap();
        assert_eq!(range.to_string(), "First: 10.0.0.1 Last: 10.0.0.254");
    }

    #[test]
    fn test_host_bits_are_masked() {
        let range = Ipv4Range::new("192.168.1.77".parse().unwrap(), 24).unwrap();
        assert_eq!(range.first_addr(), Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(range.last_addr(), Ipv4Addr::new(192, 168, 1, 254));
    }

    #[test]
    fn test_slash_32_reports_inverted_range() {
        let range = Ipv4Range::new("10.0.0.5".parse().unwrap(), 32).unwrap();
        assert!(range.first > range.last);
        assert_eq!(range.first_addr(), Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(range.last_addr(), Ipv4Addr::new(10, 0, 0, 4));
    }

    #[test]
    fn test_slash_0_covers_everything() {
        let range = Ipv4Range::new("1.2.3.4".parse().unwrap(), 0).unwrap();
        assert_eq!(range.first_addr(), Ipv4Addr::new(0, 0, 0, 1));
        assert_eq!(range.last_addr(), Ipv4Addr::new(255, 255, 255, 254));
    }

    #[test]
    fn test_ipv6_placeholder() {
        let block = CidrBlock::parse("2001:db8::/32").unwrap();
        assert_eq!(block.describe(), "IPv6 CIDR calculation: 2001:db8::/32");
    }

    #[test]
    fn test_malformed_input() {
        let err = CidrBlock::parse("10.0.0.0").unwrap_err();
        assert_eq!(err.to_string(), "Invalid CIDR: 10.0.0.0");
        assert!(CidrBlock::parse("10.0.0/24").is_err());
        assert!(CidrBlock::parse("10.0.0.0/33").is_err());
    }
}
