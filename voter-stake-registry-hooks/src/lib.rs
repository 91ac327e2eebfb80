//! # Voter Stake Registry Hooks
//! This crate wraps the voter stake registry's on-chain instructions for client
//! use. It derives vote weights and eligibility from vote markers, assembles
//! vote and position transfer instructions, and hands them to a
//! [`GovernanceProvider`] for submission.
//!
//! The `sdk` module holds program ids, address derivation and instruction
//! encoding; `vote` and `transfer` hold the hooks built on top of it.
pub mod action;
pub mod errors;
pub mod mock;
pub mod provider;
pub mod sdk;
pub mod state;
pub mod transfer;
pub mod vote;

pub use action::AsyncAction;
pub use errors::{HooksError, ProviderError};
pub use mock::MockGovernanceProvider;
pub use provider::{GovernanceProvider, InstructionSink};
pub use state::VsrState;
pub use transfer::{TransferPositionArgs, UseTransferPosition};
pub use vote::UseVote;
