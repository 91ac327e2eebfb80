//! Mock governance provider for testing and local development.
//!
//! The `MockGovernanceProvider` is pre-populated with accounts, mint decimals
//! and vote markers, and records every instruction batch it is asked to send.
//!
//! # Example
//!
//! ```ignore
//! use voter_stake_registry_hooks::{MockGovernanceProvider, UseTransferPosition};
//!
//! let provider = Arc::new(MockGovernanceProvider::with_wallet(wallet));
//! provider.register_mint(deposit_mint, 6);
//! let hook = UseTransferPosition::new(provider.clone());
//! hook.transfer_position(args).await?;
//! assert_eq!(provider.sent().len(), 1);
//! ```
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use voter_stake_registry_shared::types::VoteMarker;

use crate::{GovernanceProvider, ProviderError};

/// Mock provider that answers from pre-configured state.
#[derive(Default)]
pub struct MockGovernanceProvider {
    wallet: Option<Pubkey>,
    accounts: RwLock<HashSet<Pubkey>>,
    mint_decimals: RwLock<HashMap<Pubkey, u8>>,
    markers: RwLock<HashMap<Pubkey, VoteMarker>>,
    sent: RwLock<Vec<Vec<Instruction>>>,
    batched: RwLock<Vec<Vec<Instruction>>>,
    submission_error: RwLock<Option<ProviderError>>,
    submission_delay: Option<Duration>,
    rpc_calls: AtomicUsize,
}

impl MockGovernanceProvider {
    /// Create a provider without a wallet session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wallet(wallet: Pubkey) -> Self {
        Self {
            wallet: Some(wallet),
            ..Self::default()
        }
    }

    /// Make every submission wait `delay` before completing.
    pub fn with_submission_delay(mut self, delay: Duration) -> Self {
        self.submission_delay = Some(delay);
        self
    }

    pub fn register_account(&self, address: Pubkey) {
        write(&self.accounts).insert(address);
    }

    pub fn register_mint(&self, mint: Pubkey, decimals: u8) {
        write(&self.mint_decimals).insert(mint, decimals);
        self.register_account(mint);
    }

    pub fn register_marker(&self, address: Pubkey, marker: VoteMarker) {
        write(&self.markers).insert(address, marker);
    }

    /// Make the following submissions fail with `error`.
    pub fn fail_submissions(&self, error: ProviderError) {
        *write(&self.submission_error) = Some(error);
    }

    /// Batches passed to `send_instructions`.
    pub fn sent(&self) -> Vec<Vec<Instruction>> {
        read(&self.sent).clone()
    }

    /// Batches passed to `batch_parallel_instructions`.
    pub fn batched(&self) -> Vec<Vec<Instruction>> {
        read(&self.batched).clone()
    }

    /// Number of account queries answered so far.
    pub fn rpc_calls(&self) -> usize {
        self.rpc_calls.load(Ordering::SeqCst)
    }

    async fn submit(
        &self,
        target: &RwLock<Vec<Vec<Instruction>>>,
        instructions: Vec<Instruction>,
    ) -> Result<(), ProviderError> {
        if let Some(delay) = self.submission_delay {
            tokio::time::sleep(delay).await;
        }
        let error = read(&self.submission_error).clone();
        if let Some(error) = error {
            return Err(error);
        }
        write(target).push(instructions);
        Ok(())
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl GovernanceProvider for MockGovernanceProvider {
    fn wallet(&self) -> Option<Pubkey> {
        self.wallet
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, ProviderError> {
        self.rpc_calls.fetch_add(1, Ordering::SeqCst);
        Ok(read(&self.accounts).contains(address))
    }

    async fn mint_decimals(&self, mint: &Pubkey) -> Result<u8, ProviderError> {
        self.rpc_calls.fetch_add(1, Ordering::SeqCst);
        read(&self.mint_decimals)
            .get(mint)
            .copied()
            .ok_or_else(|| ProviderError::AccountNotFound(mint.to_string()))
    }

    async fn fetch_vote_markers(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<VoteMarker>>, ProviderError> {
        self.rpc_calls.fetch_add(1, Ordering::SeqCst);
        let markers = read(&self.markers);
        Ok(addresses
            .iter()
            .map(|address| markers.get(address).cloned())
            .collect())
    }

    async fn send_instructions(&self, instructions: Vec<Instruction>) -> Result<(), ProviderError> {
        self.submit(&self.sent, instructions).await
    }

    async fn batch_parallel_instructions(
        &self,
        instructions: Vec<Instruction>,
    ) -> Result<(), ProviderError> {
        self.submit(&self.batched, instructions).await
    }
}
