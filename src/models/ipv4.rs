//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Cidr`] for an IPv4 address with a prefix length, along with the
//! bit helpers used to derive the network, broadcast and mask of a block.

use crate::error::FormatError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Regex for the syntactic shape of a CIDR literal, ASCII digits only.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})/([0-9]{1,2})$")
            .expect("Invalid Regex")
    })
}

fn check_len(len: u8) -> Result<u8, FormatError> {
    if len > MAX_LENGTH {
        Err(FormatError::invalid(format!("/{len}")))
    } else {
        Ok(len)
    }
}

// Caller guarantees len <= MAX_LENGTH.
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    // u64 so a shift by 32 (len 0) clears everything instead of overflowing
    ((all_bits >> right_len) << right_len) as u32
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_converter::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, FormatError> {
    check_len(len).map(mask_bits)
}

/// Get the network address (all host bits zero) for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, FormatError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address (all host bits one) for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, FormatError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Number of addresses in a block, `2^(32 - len)`.
///
/// Returned as u64 because a /0 holds 2^32 addresses.
pub fn total_addresses(len: u8) -> Result<u64, FormatError> {
    let len = check_len(len)?;
    Ok(1u64 << (MAX_LENGTH - len))
}

/// IPv4 address with a prefix length in `0..=32`.
///
/// The address is kept as given, host bits included.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Cidr {
    /// Build a block from an address and prefix length.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Cidr, FormatError> {
        if prefix > MAX_LENGTH {
            return Err(FormatError::invalid(format!("{addr}/{prefix}")));
        }
        Ok(Cidr { addr, prefix })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Subnet mask with the top `prefix` bits set.
    pub fn mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.prefix))
    }

    /// Lowest address of the block, all host bits zero.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & mask_bits(self.prefix))
    }

    /// Highest address of the block, all host bits one.
    pub fn broadcast(&self) -> Ipv4Addr {
        let mask = mask_bits(self.prefix);
        Ipv4Addr::from((u32::from(self.addr) & mask) | !mask)
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }
}

/// Parse `A.B.C.D/P` with 1-3 digit octets in `0..=255` and a 1-2 digit
/// prefix in `0..=32`. Nothing may precede or follow the literal.
///
/// Octets are read as base 10, so `010.0.0.0/8` is `10.0.0.0/8`.
impl FromStr for Cidr {
    type Err = FormatError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let caps = get_cidr_regex()
            .captures(input)
            .ok_or_else(|| FormatError::invalid(input))?;

        // At most 3 digits each, so u16 can't overflow.
        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            let value: u16 = caps[i + 1]
                .parse()
                .map_err(|_| FormatError::invalid(input))?;
            *octet = u8::try_from(value).map_err(|_| FormatError::invalid(input))?;
        }
        let prefix: u8 = caps[5].parse().map_err(|_| FormatError::invalid(input))?;

        Cidr::new(Ipv4Addr::from(octets), prefix).map_err(|_| FormatError::invalid(input))
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(1).unwrap(), 0x80000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);

        assert_eq!(get_cidr_mask(33).unwrap_err(), FormatError::invalid("/33"));
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::UNSPECIFIED);

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
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(broadcast_addr(ip, 0).unwrap(), Ipv4Addr::BROADCAST);

        assert!(broadcast_addr(ip, 33).is_err());
    }

    #[test]
    fn test_total_addresses() {
        assert_eq!(total_addresses(0).unwrap(), 4294967296); // 2^32
        assert_eq!(total_addresses(8).unwrap(), 16777216);
        assert_eq!(total_addresses(24).unwrap(), 256);
        assert_eq!(total_addresses(31).unwrap(), 2);
        assert_eq!(total_addresses(32).unwrap(), 1);

        assert!(total_addresses(33).is_err());
    }

    #[test]
    fn test_cidr_accessors() {
        let cidr: Cidr = "10.2.3.4/16".parse().unwrap();
        assert_eq!(cidr.addr(), Ipv4Addr::new(10, 2, 3, 4));
        assert_eq!(cidr.prefix(), 16);
        assert_eq!(cidr.to_string(), "10.2.3.4/16");
    }

    #[test]
    fn test_cidr_derived_addresses() {
        let cidr: Cidr = "10.2.3.4/16".parse().unwrap();
        assert_eq!(cidr.network(), Ipv4Addr::new(10, 2, 0, 0));
        assert_eq!(cidr.broadcast(), Ipv4Addr::new(10, 2, 255, 255));
        assert_eq!(cidr.mask(), Ipv4Addr::new(255, 255, 0, 0));
        assert_eq!(cidr.size(), 65536);

        // same answers as the checked helpers
        assert_eq!(cidr.network(), cut_addr(cidr.addr(), 16).unwrap());
        assert_eq!(cidr.broadcast(), broadcast_addr(cidr.addr(), 16).unwrap());
        assert_eq!(u32::from(cidr.mask()), get_cidr_mask(16).unwrap());
        assert_eq!(cidr.size(), total_addresses(16).unwrap());
    }

    #[test]
    fn test_cidr_derived_addresses_edges() {
        let all: Cidr = "123.45.67.89/0".parse().unwrap();
        assert_eq!(all.network(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(all.broadcast(), Ipv4Addr::BROADCAST);
        assert_eq!(all.mask(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(all.size(), 1u64 << 32);

        let host: Cidr = "192.168.1.5/32".parse().unwrap();
        assert_eq!(host.network(), Ipv4Addr::new(192, 168, 1, 5));
        assert_eq!(host.broadcast(), Ipv4Addr::new(192, 168, 1, 5));
        assert_eq!(host.mask(), Ipv4Addr::BROADCAST);
        assert_eq!(host.size(), 1);
    }

    #[test]
    fn test_parse_leading_zeros_are_decimal() {
        let cidr: Cidr = "010.001.000.009/08".parse().unwrap();
        assert_eq!(cidr.addr(), Ipv4Addr::new(10, 1, 0, 9));
        assert_eq!(cidr.prefix(), 8);
    }

    #[test]
    fn test_parse_error_keeps_input() {
        for input in ["192.168.1.0/33", "256.0.0.0/8", "192.168.1.0", " 10.0.0.0/8"] {
            assert_eq!(
                input.parse::<Cidr>().unwrap_err(),
                FormatError::invalid(input)
            );
        }
    }

    #[test]
    fn test_cidr_new_rejects_long_prefix() {
        assert!(Cidr::new(Ipv4Addr::new(10, 0, 0, 0), 32).is_ok());
        assert_eq!(
            Cidr::new(Ipv4Addr::new(10, 0, 0, 0), 33).unwrap_err(),
            FormatError::invalid("10.0.0.0/33")
        );
    }

    #[test]
    fn test_cidr_cmp() {
        let ip1: Cidr = "10.0.0.1/24".parse().unwrap();
        let ip2: Cidr = "10.0.0.2/24".parse().unwrap();
        let ip3: Cidr = "10.0.0.1/24".parse().unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 >= ip3);
    }

    #[test]
    fn test_cidr_serde() {
        let cidr: Cidr = "192.168.1.0/24".parse().unwrap();
        let json = serde_json::to_string(&cidr).unwrap();
        assert_eq!(json, "\"192.168.1.0/24\"");

        let back: Cidr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cidr);

        let err = serde_json::from_str::<Cidr>("\"192.168.1.0/33\"").unwrap_err();
        assert!(err.to_string().contains("invalid CIDR format"));
    }
}
