use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

/// Voting configuration of a mint accepted by a registrar.
///
/// Scaled factors are expressed against a base of `1e9`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct VotingMintConfig {
    pub mint: Pubkey,
    pub baseline_vote_weight_scaled_factor: u64,
    pub max_extra_lockup_vote_weight_scaled_factor: u64,
    pub genesis_vote_power_multiplier: u8,
    pub genesis_vote_power_multiplier_expiration_ts: i64,
    pub lockup_saturation_secs: u64,
    /// Decimal shift applied to deposited amounts before weighting.
    pub digit_shift: i8,
}

/// Registrar account with its voting mints materialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registrar {
    pub pubkey: Pubkey,
    pub governance_program_id: Pubkey,
    pub realm: Pubkey,
    pub realm_governing_token_mint: Pubkey,
    pub realm_authority: Pubkey,
    /// Offset added to the cluster clock, used for testing lockups.
    pub time_offset: i64,
    pub position_update_authority: Option<Pubkey>,
    pub collection: Pubkey,
    pub voting_mints: Vec<VotingMintConfig>,
}

impl Registrar {
    pub fn voting_mint(&self, idx: u8) -> Option<&VotingMintConfig> {
        self.voting_mints.get(idx as usize)
    }

    /// Registrar clock: the cluster timestamp shifted by `time_offset`.
    pub fn clock_unix_timestamp(&self, unix_now: i64) -> i64 {
        unix_now.saturating_add(self.time_offset)
    }
}
