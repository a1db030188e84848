//! Error type for CIDR parsing and conversion.

/// The only failure the engine reports: the input is not a well formed
/// IPv4 CIDR block (bad shape, octet above 255 or prefix above 32).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid CIDR format {input:?}, use a block such as 192.168.1.0/24")]
    InvalidCidrFormat { input: String },
}

impl FormatError {
    pub fn invalid(input: impl Into<String>) -> Self {
        FormatError::InvalidCidrFormat {
            input: input.into(),
        }
    }

    /// The rejected text. For a parsed literal this is the input exactly as
    /// given; values checked outside parsing report `addr/prefix` or `/len`.
    pub fn input(&self) -> &str {
        match self {
            FormatError::InvalidCidrFormat { input } => input,
        }
    }
}
