//! CIDR processing logic.
//!
//! - [`validate`] - syntactic and range checks of a CIDR literal
//! - [`convert`] - derivation of network, broadcast, usable range, mask and size

mod convert;
mod validate;

// Re-export public functions
pub use convert::convert;
pub use validate::validate;
