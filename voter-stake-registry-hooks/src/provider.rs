//! Interfaces to the chain and wallet.
//!
//! The hooks never talk to an RPC node or sign anything themselves. Account
//! lookups and transaction submission go through a [`GovernanceProvider`], so
//! the same hooks run against a live connection or a mock.
use async_trait::async_trait;
use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use voter_stake_registry_shared::types::VoteMarker;

use crate::{HooksError, ProviderError};

/// Connection, wallet and transaction sender used by the hooks.
#[async_trait]
pub trait GovernanceProvider: Send + Sync {
    /// Public key of the connected wallet, `None` without an active session.
    fn wallet(&self) -> Option<Pubkey>;

    /// Whether an account exists at `address`.
    async fn account_exists(&self, address: &Pubkey) -> Result<bool, ProviderError>;

    /// Decimals of an SPL token mint.
    async fn mint_decimals(&self, mint: &Pubkey) -> Result<u8, ProviderError>;

    /// Fetches vote markers, returning one entry per address in order.
    ///
    /// Missing accounts are `None`.
    async fn fetch_vote_markers(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<VoteMarker>>, ProviderError>;

    /// Signs and sends `instructions`, packing them into as few transactions
    /// as possible while keeping their order.
    async fn send_instructions(&self, instructions: Vec<Instruction>) -> Result<(), ProviderError>;

    /// Signs and sends independent `instructions` as parallel transactions.
    async fn batch_parallel_instructions(
        &self,
        instructions: Vec<Instruction>,
    ) -> Result<(), ProviderError>;
}

/// Caller-supplied handler that takes assembled instructions instead of having
/// the hook submit them.
#[async_trait]
pub trait InstructionSink: Send + Sync {
    async fn handle(&self, instructions: Vec<Instruction>) -> Result<(), HooksError>;
}
