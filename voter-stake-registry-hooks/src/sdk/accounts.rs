//! Account lists of the instructions the hooks emit.
//!
//! Field order is the order in which accounts are passed to the program.
use solana_instruction::AccountMeta;
use solana_pubkey::Pubkey;

use crate::sdk::ToAccountMetas;

/// Accounts of `vote_v0`, a direct vote by the position holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteV0Accounts {
    pub payer: Pubkey,
    pub marker: Pubkey,
    pub registrar: Pubkey,
    pub voter: Pubkey,
    pub position: Pubkey,
    pub mint: Pubkey,
    /// Voter's token account holding the position NFT.
    pub token_account: Pubkey,
    pub proposal: Pubkey,
    pub proposal_config: Pubkey,
    pub state_controller: Pubkey,
    pub on_vote_hook: Pubkey,
    pub proposal_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for VoteV0Accounts {
    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new(self.marker, false),
            AccountMeta::new_readonly(self.registrar, false),
            AccountMeta::new_readonly(self.voter, true),
            AccountMeta::new(self.position, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new_readonly(self.token_account, false),
            AccountMeta::new(self.proposal, false),
            AccountMeta::new_readonly(self.proposal_config, false),
            AccountMeta::new(self.state_controller, false),
            AccountMeta::new_readonly(self.on_vote_hook, false),
            AccountMeta::new_readonly(self.proposal_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Accounts of `delegated_vote_v0`, a vote cast by a delegate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatedVoteV0Accounts {
    pub payer: Pubkey,
    pub marker: Pubkey,
    pub registrar: Pubkey,
    /// Current delegate, signing in place of the position holder.
    pub owner: Pubkey,
    pub position: Pubkey,
    pub mint: Pubkey,
    pub delegation: Pubkey,
    pub proposal: Pubkey,
    pub proposal_config: Pubkey,
    pub state_controller: Pubkey,
    pub on_vote_hook: Pubkey,
    pub proposal_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for DelegatedVoteV0Accounts {
    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new(self.marker, false),
            AccountMeta::new_readonly(self.registrar, false),
            AccountMeta::new_readonly(self.owner, true),
            AccountMeta::new(self.position, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new_readonly(self.delegation, false),
            AccountMeta::new(self.proposal, false),
            AccountMeta::new_readonly(self.proposal_config, false),
            AccountMeta::new(self.state_controller, false),
            AccountMeta::new_readonly(self.on_vote_hook, false),
            AccountMeta::new_readonly(self.proposal_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Accounts of the registry's `transfer_v0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferV0Accounts {
    pub registrar: Pubkey,
    pub position_authority: Pubkey,
    pub source_position: Pubkey,
    pub source_mint: Pubkey,
    pub source_token_account: Pubkey,
    pub target_position: Pubkey,
    pub target_mint: Pubkey,
    pub target_token_account: Pubkey,
    pub deposit_mint: Pubkey,
    pub source_vault: Pubkey,
    pub target_vault: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for TransferV0Accounts {
    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.registrar, false),
            AccountMeta::new(self.position_authority, true),
            AccountMeta::new(self.source_position, false),
            AccountMeta::new_readonly(self.source_mint, false),
            AccountMeta::new_readonly(self.source_token_account, false),
            AccountMeta::new(self.target_position, false),
            AccountMeta::new_readonly(self.target_mint, false),
            AccountMeta::new_readonly(self.target_token_account, false),
            AccountMeta::new_readonly(self.deposit_mint, false),
            AccountMeta::new(self.source_vault, false),
            AccountMeta::new(self.target_vault, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Accounts of the sub-DAOs `transfer_v0`, which wraps the registry transfer
/// and checks the DAO of the deposit mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaoTransferV0Accounts {
    pub transfer: TransferV0Accounts,
    pub dao: Pubkey,
    pub vsr_program: Pubkey,
}

impl ToAccountMetas for DaoTransferV0Accounts {
    fn to_account_metas(&self) -> Vec<AccountMeta> {
        let mut metas = self.transfer.to_account_metas();
        metas.push(AccountMeta::new_readonly(self.dao, false));
        metas.push(AccountMeta::new_readonly(self.vsr_program, false));
        metas
    }
}

/// Accounts of `close_position_v0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosePositionV0Accounts {
    pub sol_destination: Pubkey,
    pub position_authority: Pubkey,
    pub registrar: Pubkey,
    pub position: Pubkey,
    pub mint: Pubkey,
    pub position_token_account: Pubkey,
    pub token_program: Pubkey,
}

impl ToAccountMetas for ClosePositionV0Accounts {
    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.sol_destination, false),
            AccountMeta::new(self.position_authority, true),
            AccountMeta::new_readonly(self.registrar, false),
            AccountMeta::new(self.position, false),
            AccountMeta::new(self.mint, false),
            AccountMeta::new(self.position_token_account, false),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}

/// Accounts shared by `enroll_v0` and `unenroll_v0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentAccounts {
    pub payer: Pubkey,
    pub position_authority: Pubkey,
    pub position: Pubkey,
    pub mint: Pubkey,
    pub position_token_account: Pubkey,
    pub registrar: Pubkey,
    pub vetoken_tracker: Pubkey,
    pub enrolled_position: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for EnrollmentAccounts {
    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.position_authority, true),
            AccountMeta::new_readonly(self.position, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new_readonly(self.position_token_account, false),
            AccountMeta::new_readonly(self.registrar, false),
            AccountMeta::new(self.vetoken_tracker, false),
            AccountMeta::new(self.enrolled_position, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}
