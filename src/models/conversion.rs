//! Result of converting a CIDR block.

use super::Cidr;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from one CIDR block.
///
/// Built only by [`crate::convert`]; the fields cannot be changed afterwards.
/// `network_address <= first_usable <= last_usable <= broadcast_address`
/// always holds.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversionResult {
    cidr: Cidr,
    network_address: Ipv4Addr,
    broadcast_address: Ipv4Addr,
    first_usable: Ipv4Addr,
    last_usable: Ipv4Addr,
    subnet_mask: Ipv4Addr,
    total_addresses: u64,
}

impl ConversionResult {
    pub(crate) fn new(
        cidr: Cidr,
        network_address: Ipv4Addr,
        broadcast_address: Ipv4Addr,
        first_usable: Ipv4Addr,
        last_usable: Ipv4Addr,
        subnet_mask: Ipv4Addr,
        total_addresses: u64,
    ) -> Self {
        ConversionResult {
            cidr,
            network_address,
            broadcast_address,
            first_usable,
            last_usable,
            subnet_mask,
            total_addresses,
        }
    }

    /// The parsed block this result was derived from.
    pub fn cidr(&self) -> Cidr {
        self.cidr
    }

    pub fn network_address(&self) -> Ipv4Addr {
        self.network_address
    }

    pub fn broadcast_address(&self) -> Ipv4Addr {
        self.broadcast_address
    }

    pub fn first_usable(&self) -> Ipv4Addr {
        self.first_usable
    }

    pub fn last_usable(&self) -> Ipv4Addr {
        self.last_usable
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        self.subnet_mask
    }

    pub fn total_addresses(&self) -> u64 {
        self.total_addresses
    }

    /// The whole block as `"<network> - <broadcast>"`.
    pub fn ip_range(&self) -> String {
        format!("{} - {}", self.network_address, self.broadcast_address)
    }
}
