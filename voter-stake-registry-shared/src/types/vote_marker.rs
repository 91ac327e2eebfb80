use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

use crate::types::AnchorAccount;

/// Record of how a position voted on a proposal.
///
/// One marker exists per (position mint, proposal) pair. It prevents a position
/// from voting the same choice twice and carries the weight it contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct VoteMarker {
    pub voter: Pubkey,
    pub registrar: Pubkey,
    pub proposal: Pubkey,
    pub mint: Pubkey,
    pub choices: Vec<u16>,
    pub weight: u128,
    pub bump_seed: u8,
    /// Delegation index of the voter at the time of voting.
    pub delegation_index: u16,
    pub rent_refund: Pubkey,
}

impl VoteMarker {
    pub fn has_choice(&self, choice: u16) -> bool {
        self.choices.contains(&choice)
    }

    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }
}

impl AnchorAccount for VoteMarker {
    const ACCOUNT_NAME: &'static str = "VoteMarkerV0";
}
