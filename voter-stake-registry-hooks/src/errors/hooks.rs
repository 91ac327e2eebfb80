use thiserror::Error;
use voter_stake_registry_shared::ConversionError;

use crate::errors::ProviderError;

/// Message returned when voting without a wallet or positions.
pub const NO_POSITIONS_MESSAGE: &str =
    "Unable to vote without positions. Please stake tokens first.";

/// Message returned when transferring a position that still has votes.
pub const ACTIVE_VOTES_MESSAGE: &str = "Unable to Transfer Position, position has active votes";

/// Errors surfaced by the hooks' asynchronous actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HooksError {
    /// The caller's input or session cannot be acted upon.
    #[error("{0}")]
    Validation(String),

    /// A previous invocation of the same action is still in flight.
    #[error("Action already in progress")]
    AlreadyPending,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Failed to encode instruction {name}: {reason}")]
    Encoding { name: &'static str, reason: String },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl HooksError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn no_positions() -> Self {
        Self::validation(NO_POSITIONS_MESSAGE)
    }

    pub fn active_votes() -> Self {
        Self::validation(ACTIVE_VOTES_MESSAGE)
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }
}
