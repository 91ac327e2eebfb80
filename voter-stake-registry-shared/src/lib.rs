//! # Voter Stake Registry Shared
//! This crate defines the on-chain account shapes used by the voter stake registry
//! hooks: registrars, positions, vote markers, delegations and proposals.
//! Positions are extended with client-facing derived fields such as voting power
//! and delegation flags.
pub mod errors;
pub mod types;
pub mod voting_power;

pub use errors::ConversionError;
pub use voting_power::calc_position_voting_power;
