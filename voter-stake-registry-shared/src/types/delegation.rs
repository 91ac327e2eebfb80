use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

/// Delegation of a position's voting rights.
///
/// Delegations form a chain per position; `index` grows with each hop, so a
/// higher index is a more recent delegate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Delegation {
    pub owner: Pubkey,
    pub next_owner: Pubkey,
    pub asset: Pubkey,
    pub index: u16,
    pub expiration_time: i64,
    pub rent_refund: Pubkey,
    pub bump_seed: u8,
}

/// A delegation together with its account address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingDelegation {
    pub address: Pubkey,
    pub delegation: Delegation,
}

impl VotingDelegation {
    pub fn index(&self) -> u16 {
        self.delegation.index
    }
}
