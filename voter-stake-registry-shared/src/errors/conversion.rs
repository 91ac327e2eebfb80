use thiserror::Error;

/// Errors raised while decoding accounts or deriving position metadata.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unknown voting mint config index: {0}")]
    UnknownVotingMint(u8),

    #[error("Account discriminator mismatch for {0}")]
    DiscriminatorMismatch(&'static str),

    #[error("Failed to decode account data: {0}")]
    Decode(String),

    #[error("Voting power overflow")]
    Overflow,
}
