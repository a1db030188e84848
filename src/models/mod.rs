//! Domain models for the CIDR converter.
//!
//! - [`Cidr`] - IPv4 address with a prefix length
//! - [`ConversionResult`] - the values derived from one block

mod conversion;
mod ipv4;

// Re-export public types
pub use conversion::ConversionResult;
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, total_addresses, Cidr, MAX_LENGTH};
