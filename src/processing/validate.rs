//! Validation of CIDR literals.
//!
//! Accepts exactly `A.B.C.D/P` with 1-3 digit octets in `0..=255` and a
//! 1-2 digit prefix in `0..=32`. Nothing may precede or follow the literal.

use crate::models::Cidr;

/// Check whether `input` is a fully well formed IPv4 CIDR literal.
pub fn validate(input: &str) -> bool {
    input.parse::<Cidr>().is_ok()
}
