//! Instruction builders for the voter stake registry programs.
//!
//! Each builder derives the accounts it needs from the client-side position
//! and proposal types, so callers only provide the signing wallet.
use borsh::BorshSerialize;
use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use voter_stake_registry_shared::types::{PositionWithMeta, Proposal, ProposalConfig};

use crate::sdk::accounts::{
    ClosePositionV0Accounts, DaoTransferV0Accounts, DelegatedVoteV0Accounts, EnrollmentAccounts,
    TransferV0Accounts, VoteV0Accounts,
};
use crate::sdk::pda::{
    associated_token_address, enrolled_position_key, vetoken_tracker_key, vote_marker_key,
};
use crate::sdk::{
    anchor_instruction, InstructionArgs, ASSOCIATED_TOKEN_PROGRAM_ID, PROPOSAL_PROGRAM_ID,
    PVR_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID, VSR_PROGRAM_ID,
};
use crate::HooksError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize)]
pub struct VoteArgsV0 {
    pub choice: u16,
}

impl InstructionArgs for VoteArgsV0 {
    const NAME: &'static str = "vote_v0";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize)]
pub struct DelegatedVoteArgsV0 {
    pub choice: u16,
}

impl InstructionArgs for DelegatedVoteArgsV0 {
    const NAME: &'static str = "delegated_vote_v0";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize)]
pub struct TransferArgsV0 {
    /// Amount in native units of the deposit mint.
    pub amount: u64,
}

impl InstructionArgs for TransferArgsV0 {
    const NAME: &'static str = "transfer_v0";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize)]
pub struct ClosePositionArgsV0;

impl InstructionArgs for ClosePositionArgsV0 {
    const NAME: &'static str = "close_position_v0";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize)]
pub struct EnrollArgsV0;

impl InstructionArgs for EnrollArgsV0 {
    const NAME: &'static str = "enroll_v0";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize)]
pub struct UnenrollArgsV0;

impl InstructionArgs for UnenrollArgsV0 {
    const NAME: &'static str = "unenroll_v0";
}

/// Direct vote for `choice` with a position held by `voter`.
pub fn vote_v0(
    voter: &Pubkey,
    position: &PositionWithMeta,
    proposal: &Proposal,
    config: &ProposalConfig,
    choice: u16,
) -> Result<Instruction, HooksError> {
    let mint = position.position.mint;
    let accounts = VoteV0Accounts {
        payer: *voter,
        marker: vote_marker_key(&mint, &proposal.pubkey).0,
        registrar: position.position.registrar,
        voter: *voter,
        position: position.pubkey,
        mint,
        token_account: associated_token_address(voter, &mint),
        proposal: proposal.pubkey,
        proposal_config: config.pubkey,
        state_controller: config.state_controller,
        on_vote_hook: config.on_vote_hook,
        proposal_program: PROPOSAL_PROGRAM_ID,
        system_program: SYSTEM_PROGRAM_ID,
    };
    anchor_instruction(VSR_PROGRAM_ID, &VoteArgsV0 { choice }, &accounts)
}

/// Vote for `choice` by `owner`, the current delegate of `position`.
///
/// # Errors
///
/// Returns `HooksError::Validation` if the position carries no delegation.
pub fn delegated_vote_v0(
    owner: &Pubkey,
    position: &PositionWithMeta,
    registrar: &Pubkey,
    proposal: &Proposal,
    config: &ProposalConfig,
    choice: u16,
) -> Result<Instruction, HooksError> {
    let delegation = position
        .voting_delegation
        .as_ref()
        .ok_or_else(|| HooksError::validation("Position has no voting delegation"))?;
    let mint = position.position.mint;
    let accounts = DelegatedVoteV0Accounts {
        payer: *owner,
        marker: vote_marker_key(&mint, &proposal.pubkey).0,
        registrar: *registrar,
        owner: *owner,
        position: position.pubkey,
        mint,
        delegation: delegation.address,
        proposal: proposal.pubkey,
        proposal_config: config.pubkey,
        state_controller: config.state_controller,
        on_vote_hook: config.on_vote_hook,
        proposal_program: PROPOSAL_PROGRAM_ID,
        system_program: SYSTEM_PROGRAM_ID,
    };
    anchor_instruction(VSR_PROGRAM_ID, &DelegatedVoteArgsV0 { choice }, &accounts)
}

fn transfer_accounts(
    authority: &Pubkey,
    source: &PositionWithMeta,
    target: &PositionWithMeta,
) -> TransferV0Accounts {
    let deposit_mint = *source.deposit_mint();
    TransferV0Accounts {
        registrar: source.position.registrar,
        position_authority: *authority,
        source_position: source.pubkey,
        source_mint: source.position.mint,
        source_token_account: associated_token_address(authority, &source.position.mint),
        target_position: target.pubkey,
        target_mint: target.position.mint,
        target_token_account: associated_token_address(authority, &target.position.mint),
        deposit_mint,
        source_vault: associated_token_address(&source.pubkey, &deposit_mint),
        target_vault: associated_token_address(&target.pubkey, &deposit_mint),
        token_program: TOKEN_PROGRAM_ID,
        associated_token_program: ASSOCIATED_TOKEN_PROGRAM_ID,
        system_program: SYSTEM_PROGRAM_ID,
    }
}

/// Registry transfer of `amount` native units between two positions.
pub fn transfer_v0(
    authority: &Pubkey,
    source: &PositionWithMeta,
    target: &PositionWithMeta,
    amount: u64,
) -> Result<Instruction, HooksError> {
    anchor_instruction(
        VSR_PROGRAM_ID,
        &TransferArgsV0 { amount },
        &transfer_accounts(authority, source, target),
    )
}

/// Transfer through the sub-DAOs program `program_id` for DAO-registered mints.
pub fn dao_transfer_v0(
    program_id: &Pubkey,
    dao: &Pubkey,
    authority: &Pubkey,
    source: &PositionWithMeta,
    target: &PositionWithMeta,
    amount: u64,
) -> Result<Instruction, HooksError> {
    let accounts = DaoTransferV0Accounts {
        transfer: transfer_accounts(authority, source, target),
        dao: *dao,
        vsr_program: VSR_PROGRAM_ID,
    };
    anchor_instruction(*program_id, &TransferArgsV0 { amount }, &accounts)
}

pub fn close_position_v0(
    authority: &Pubkey,
    position: &PositionWithMeta,
) -> Result<Instruction, HooksError> {
    let mint = position.position.mint;
    let accounts = ClosePositionV0Accounts {
        sol_destination: *authority,
        position_authority: *authority,
        registrar: position.position.registrar,
        position: position.pubkey,
        mint,
        position_token_account: associated_token_address(authority, &mint),
        token_program: TOKEN_PROGRAM_ID,
    };
    anchor_instruction(VSR_PROGRAM_ID, &ClosePositionArgsV0, &accounts)
}

fn enrollment_accounts(authority: &Pubkey, position: &PositionWithMeta) -> EnrollmentAccounts {
    let mint = position.position.mint;
    EnrollmentAccounts {
        payer: *authority,
        position_authority: *authority,
        position: position.pubkey,
        mint,
        position_token_account: associated_token_address(authority, &mint),
        registrar: position.position.registrar,
        vetoken_tracker: vetoken_tracker_key(&position.position.registrar).0,
        enrolled_position: enrolled_position_key(&position.pubkey).0,
        system_program: SYSTEM_PROGRAM_ID,
    }
}

/// Enrolls a position in its registrar's vetoken tracker.
pub fn enroll_v0(authority: &Pubkey, position: &PositionWithMeta) -> Result<Instruction, HooksError> {
    anchor_instruction(
        PVR_PROGRAM_ID,
        &EnrollArgsV0,
        &enrollment_accounts(authority, position),
    )
}

pub fn unenroll_v0(
    authority: &Pubkey,
    position: &PositionWithMeta,
) -> Result<Instruction, HooksError> {
    anchor_instruction(
        PVR_PROGRAM_ID,
        &UnenrollArgsV0,
        &enrollment_accounts(authority, position),
    )
}
