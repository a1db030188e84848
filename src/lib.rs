//! IPv4 CIDR converter.
//!
//! Turns a literal such as `192.168.1.0/24` into its network address,
//! broadcast address, usable host range, subnet mask and address count.
//!
//! ```
//! use cidr_converter::{convert, validate};
//!
//! assert!(validate("192.168.1.0/24"));
//! let result = convert("192.168.1.0/24").unwrap();
//! assert_eq!(result.first_usable().to_string(), "192.168.1.1");
//! assert_eq!(result.last_usable().to_string(), "192.168.1.254");
//! ```
//!
//! Both functions are pure and hold no state between calls.

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::FormatError;
pub use models::{Cidr, ConversionResult};
pub use processing::{convert, validate};
