//! Fixtures shared by the hook integration tests.
#![allow(dead_code)]

use solana_pubkey::Pubkey;
use voter_stake_registry_shared::types::{
    Choice, Delegation, Lockup, LockupKind, Position, PositionWithMeta, Proposal,
    ProposalConfig, Registrar, VoteMarker, VotingDelegation, VotingMintConfig,
};

pub fn voting_mint(mint: Pubkey) -> VotingMintConfig {
    VotingMintConfig {
        mint,
        baseline_vote_weight_scaled_factor: 1_000_000_000,
        max_extra_lockup_vote_weight_scaled_factor: 0,
        genesis_vote_power_multiplier: 0,
        genesis_vote_power_multiplier_expiration_ts: 0,
        lockup_saturation_secs: 1,
        digit_shift: 0,
    }
}

pub fn registrar(deposit_mint: Pubkey) -> Registrar {
    Registrar {
        pubkey: Pubkey::new_unique(),
        governance_program_id: Pubkey::new_unique(),
        realm: Pubkey::new_unique(),
        realm_governing_token_mint: deposit_mint,
        realm_authority: Pubkey::new_unique(),
        time_offset: 0,
        position_update_authority: None,
        collection: Pubkey::new_unique(),
        voting_mints: vec![voting_mint(deposit_mint)],
    }
}

/// Position of `amount` native units of `deposit_mint` under `registrar`.
pub fn position(registrar: &Registrar, amount: u64) -> PositionWithMeta {
    PositionWithMeta {
        pubkey: Pubkey::new_unique(),
        position: Position {
            registrar: registrar.pubkey,
            mint: Pubkey::new_unique(),
            lockup: Lockup {
                start_ts: 0,
                end_ts: 0,
                kind: LockupKind::None,
            },
            amount_deposited_native: amount,
            voting_mint_config_idx: 0,
            num_active_votes: 0,
            genesis_end: 0,
            bump_seed: 255,
        },
        is_delegated: false,
        is_voting_delegated_to_me: false,
        delegated_sub_dao: None,
        has_rewards: false,
        has_genesis_multiplier: false,
        voting_power: amount as u128,
        voting_mint: registrar.voting_mints[0].clone(),
        voting_delegation: None,
        is_enrolled: false,
    }
}

/// Marks `position` as delegated to `wallet` at delegation `index`.
pub fn delegate_to(position: PositionWithMeta, wallet: &Pubkey, index: u16) -> PositionWithMeta {
    let delegation = VotingDelegation {
        address: Pubkey::new_unique(),
        delegation: Delegation {
            owner: *wallet,
            next_owner: Pubkey::default(),
            asset: position.position.mint,
            index,
            expiration_time: i64::MAX,
            rent_refund: *wallet,
            bump_seed: 255,
        },
    };
    position.with_voting_delegation(delegation, wallet)
}

pub fn proposal(num_choices: usize, max_choices_per_voter: u16) -> (Proposal, ProposalConfig) {
    let config = ProposalConfig {
        pubkey: Pubkey::new_unique(),
        vote_controller: Pubkey::new_unique(),
        state_controller: Pubkey::new_unique(),
        on_vote_hook: Pubkey::new_unique(),
    };
    let proposal = Proposal {
        pubkey: Pubkey::new_unique(),
        owner: Pubkey::new_unique(),
        name: "Adopt HIP".to_string(),
        uri: "https://example.org/proposal.json".to_string(),
        proposal_config: config.pubkey,
        max_choices_per_voter,
        choices: (0..num_choices)
            .map(|idx| Choice {
                name: format!("choice-{idx}"),
                uri: None,
                weight: 0,
            })
            .collect(),
    };
    (proposal, config)
}

pub fn marker(
    position: &PositionWithMeta,
    proposal: &Proposal,
    choices: Vec<u16>,
    weight: u128,
    delegation_index: u16,
) -> VoteMarker {
    VoteMarker {
        voter: Pubkey::new_unique(),
        registrar: position.position.registrar,
        proposal: proposal.pubkey,
        mint: position.position.mint,
        choices,
        weight,
        bump_seed: 255,
        delegation_index,
        rent_refund: Pubkey::new_unique(),
    }
}
