//! Error types for bitpair operations

/// Errors that can occur during bitpair operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitpairError {
    /// Table queried before construction completed
    TableNotBuilt,
}

impl core::fmt::Display for BitpairError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BitpairError::TableNotBuilt => "Lookup table queried before it was built",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for BitpairError {}

/// Result type for bitpair operations
pub type Result<T> = core::result::Result<T, BitpairError>;
