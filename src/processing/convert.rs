//! Conversion of a CIDR literal into its derived network properties.

use crate::error::FormatError;
use crate::models::{Cidr, ConversionResult};
use std::net::Ipv4Addr;

/// Convert a CIDR literal such as `192.168.1.0/24`.
///
/// Fails with [`FormatError::InvalidCidrFormat`] on any malformed input and
/// never returns a partial result.
///
/// For /31 and /32 the usable range is the whole block, network and
/// broadcast included. A /0 is accepted and covers the full address space.
///
/// # Examples
/// ```
/// let result = cidr_converter::convert("10.0.0.0/8").unwrap();
/// assert_eq!(result.broadcast_address().to_string(), "10.255.255.255");
/// assert_eq!(result.total_addresses(), 16_777_216);
/// ```
pub fn convert(input: &str) -> Result<ConversionResult, FormatError> {
    let cidr: Cidr = input.parse()?;
    let prefix = cidr.prefix();

    let network = cidr.network();
    let broadcast = cidr.broadcast();
    let mask = cidr.mask();
    log::trace!(
        "convert({input}) addr={:#010x} mask={:#010x}",
        u32::from(cidr.addr()),
        u32::from(mask)
    );

    // prefix < 31 leaves at least 2 host bits, so +1/-1 stays inside the block
    let (first, last) = if prefix < 31 {
        (
            Ipv4Addr::from(u32::from(network) + 1),
            Ipv4Addr::from(u32::from(broadcast) - 1),
        )
    } else {
        (network, broadcast)
    };

    let total = cidr.size();
    log::debug!("convert({input}) network={network} broadcast={broadcast} total={total}");

    Ok(ConversionResult::new(
        cidr,
        network,
        broadcast,
        first,
        last,
        mask,
        total,
    ))
}
