use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

use crate::types::{Lockup, Registrar, VotingDelegation, VotingMintConfig};
use crate::{calc_position_voting_power, ConversionError};

/// A staked deposit held by a position NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Position {
    pub registrar: Pubkey,
    /// Mint of the position NFT, not of the deposited tokens.
    pub mint: Pubkey,
    pub lockup: Lockup,
    pub amount_deposited_native: u64,
    pub voting_mint_config_idx: u8,
    pub num_active_votes: u16,
    pub genesis_end: i64,
    pub bump_seed: u8,
}

/// A position together with the fields the client derives for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionWithMeta {
    pub pubkey: Pubkey,
    pub position: Position,
    pub is_delegated: bool,
    /// Set when the position may belong to someone else but its voting rights
    /// were delegated to the current wallet.
    pub is_voting_delegated_to_me: bool,
    pub delegated_sub_dao: Option<Pubkey>,
    pub has_rewards: bool,
    pub has_genesis_multiplier: bool,
    pub voting_power: u128,
    pub voting_mint: VotingMintConfig,
    pub voting_delegation: Option<VotingDelegation>,
    /// Enrolled in the position voting rewards tracker.
    pub is_enrolled: bool,
}

impl PositionWithMeta {
    /// Derives the metadata of `position` against its registrar.
    ///
    /// `unix_now` is the cluster time; the registrar's time offset is applied
    /// before computing voting power and the genesis flag.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::UnknownVotingMint` if the position refers to a
    /// mint config the registrar does not have.
    pub fn new(
        pubkey: Pubkey,
        position: Position,
        registrar: &Registrar,
        unix_now: i64,
    ) -> Result<Self, ConversionError> {
        let voting_mint = registrar
            .voting_mint(position.voting_mint_config_idx)
            .cloned()
            .ok_or(ConversionError::UnknownVotingMint(position.voting_mint_config_idx))?;
        let now = registrar.clock_unix_timestamp(unix_now);
        let voting_power = calc_position_voting_power(&position, &voting_mint, now)?;

        Ok(Self {
            pubkey,
            has_genesis_multiplier: position.genesis_end > now,
            position,
            is_delegated: false,
            is_voting_delegated_to_me: false,
            delegated_sub_dao: None,
            has_rewards: false,
            voting_power,
            voting_mint,
            voting_delegation: None,
            is_enrolled: false,
        })
    }

    /// Marks the position as delegated to a sub-DAO.
    pub fn with_delegated_sub_dao(mut self, sub_dao: Pubkey) -> Self {
        self.is_delegated = true;
        self.delegated_sub_dao = Some(sub_dao);
        self
    }

    pub fn with_rewards(mut self, has_rewards: bool) -> Self {
        self.has_rewards = has_rewards;
        self
    }

    pub fn with_enrollment(mut self, is_enrolled: bool) -> Self {
        self.is_enrolled = is_enrolled;
        self
    }

    /// Attaches the position's current voting delegation.
    ///
    /// The index 0 record belongs to the position owner, so voting counts as
    /// delegated to `wallet` only past the root of the chain.
    pub fn with_voting_delegation(mut self, delegation: VotingDelegation, wallet: &Pubkey) -> Self {
        self.is_voting_delegated_to_me =
            delegation.index() > 0 && &delegation.delegation.owner == wallet;
        self.voting_delegation = Some(delegation);
        self
    }

    pub fn has_active_votes(&self) -> bool {
        self.position.num_active_votes > 0
    }

    /// Deposit mint backing this position.
    pub fn deposit_mint(&self) -> &Pubkey {
        &self.voting_mint.mint
    }

    pub fn delegation_index(&self) -> u16 {
        self.voting_delegation
            .as_ref()
            .map(VotingDelegation::index)
            .unwrap_or(0)
    }
}
