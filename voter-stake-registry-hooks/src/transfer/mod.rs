//! Transfer hook: moves deposited tokens between two positions.
use std::fmt;
use std::sync::Arc;

use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use tracing::{debug, info, instrument};
use voter_stake_registry_shared::types::PositionWithMeta;

use crate::sdk::instructions::{
    close_position_v0, dao_transfer_v0, enroll_v0, transfer_v0, unenroll_v0,
};
use crate::sdk::pda::dao_key;
use crate::sdk::{ui_amount_to_native, HSD_PROGRAM_ID};
use crate::{AsyncAction, GovernanceProvider, HooksError, InstructionSink};

/// Arguments of [`UseTransferPosition::transfer_position`].
pub struct TransferPositionArgs<'a> {
    pub source_position: &'a PositionWithMeta,
    pub target_position: &'a PositionWithMeta,
    /// Amount in UI units of the deposit mint.
    pub amount: f64,
    /// Sub-DAOs program handling DAO-registered mints.
    pub program_id: Option<Pubkey>,
    /// Receives the instructions instead of the provider submitting them.
    pub on_instructions: Option<&'a dyn InstructionSink>,
}

impl<'a> TransferPositionArgs<'a> {
    pub fn new(
        source_position: &'a PositionWithMeta,
        target_position: &'a PositionWithMeta,
        amount: f64,
    ) -> Self {
        Self {
            source_position,
            target_position,
            amount,
            program_id: None,
            on_instructions: None,
        }
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = Some(program_id);
        self
    }

    pub fn with_instruction_sink(mut self, sink: &'a dyn InstructionSink) -> Self {
        self.on_instructions = Some(sink);
        self
    }
}

impl fmt::Debug for TransferPositionArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferPositionArgs")
            .field("source_position", &self.source_position.pubkey)
            .field("target_position", &self.target_position.pubkey)
            .field("amount", &self.amount)
            .field("program_id", &self.program_id)
            .field("on_instructions", &self.on_instructions.is_some())
            .finish()
    }
}

pub struct UseTransferPosition<P: ?Sized> {
    provider: Arc<P>,
    action: AsyncAction,
}

impl<P: GovernanceProvider + ?Sized> UseTransferPosition<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            action: AsyncAction::new(),
        }
    }

    /// Transfers `amount` from the source to the target position, closing the
    /// source when its whole deposit moves.
    ///
    /// Returns the assembled instructions once they were handed to the
    /// caller's sink or submitted.
    ///
    /// # Errors
    ///
    /// Fails without a wallet session or when either position has active
    /// votes, before any account is queried. Provider and sink errors are
    /// passed through unchanged.
    #[instrument(skip(self), fields(source = %args.source_position.pubkey, target = %args.target_position.pubkey))]
    pub async fn transfer_position(
        &self,
        args: TransferPositionArgs<'_>,
    ) -> Result<Vec<Instruction>, HooksError> {
        self.action.execute(self.run(args)).await
    }

    async fn run(&self, args: TransferPositionArgs<'_>) -> Result<Vec<Instruction>, HooksError> {
        let source = args.source_position;
        let target = args.target_position;
        let wallet = match self.provider.wallet() {
            Some(wallet) if !source.has_active_votes() && !target.has_active_votes() => wallet,
            _ => return Err(HooksError::active_votes()),
        };

        let program_id = args.program_id.unwrap_or(HSD_PROGRAM_ID);
        let mint = *source.deposit_mint();
        let (dao, _) = dao_key(&mint);
        let is_dao = self.provider.account_exists(&dao).await?;
        let decimals = self.provider.mint_decimals(&mint).await?;
        let amount = ui_amount_to_native(args.amount, decimals)?;
        debug!(%mint, is_dao, amount, "Resolved transfer parameters");

        let instructions = transfer_instructions(
            &wallet,
            source,
            target,
            amount,
            is_dao.then_some((&program_id, &dao)),
        )?;

        match args.on_instructions {
            Some(sink) => sink.handle(instructions.clone()).await?,
            None => {
                info!(instructions = instructions.len(), "Submitting transfer");
                self.provider
                    .send_instructions(instructions.clone())
                    .await?
            }
        }
        Ok(instructions)
    }

    pub fn loading(&self) -> bool {
        self.action.loading()
    }

    pub fn error(&self) -> Option<HooksError> {
        self.action.error()
    }
}

/// Ordered transfer instructions: unenroll the source, enroll the target,
/// transfer, then close the source when it is emptied.
///
/// `dao` carries the sub-DAOs program id and DAO account for DAO-registered
/// mints.
pub fn transfer_instructions(
    authority: &Pubkey,
    source: &PositionWithMeta,
    target: &PositionWithMeta,
    amount: u64,
    dao: Option<(&Pubkey, &Pubkey)>,
) -> Result<Vec<Instruction>, HooksError> {
    let mut instructions = Vec::with_capacity(4);
    if source.is_enrolled {
        instructions.push(unenroll_v0(authority, source)?);
    }
    if target.is_enrolled {
        instructions.push(enroll_v0(authority, target)?);
    }
    instructions.push(match dao {
        Some((program_id, dao)) => {
            dao_transfer_v0(program_id, dao, authority, source, target, amount)?
        }
        None => transfer_v0(authority, source, target, amount)?,
    });
    if amount == source.position.amount_deposited_native {
        instructions.push(close_position_v0(authority, source)?);
    }
    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::instructions::{
        ClosePositionArgsV0, EnrollArgsV0, TransferArgsV0, UnenrollArgsV0,
    };
    use crate::sdk::{instruction_discriminator, InstructionArgs, PVR_PROGRAM_ID, VSR_PROGRAM_ID};
    use voter_stake_registry_shared::types::{Lockup, Position, VotingMintConfig};

    fn position(amount: u64, enrolled: bool) -> PositionWithMeta {
        PositionWithMeta {
            pubkey: Pubkey::new_unique(),
            position: Position {
                registrar: Pubkey::new_unique(),
                mint: Pubkey::new_unique(),
                lockup: Lockup::default(),
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
            voting_mint: VotingMintConfig {
                mint: Pubkey::new_unique(),
                baseline_vote_weight_scaled_factor: 1_000_000_000,
                max_extra_lockup_vote_weight_scaled_factor: 0,
                genesis_vote_power_multiplier: 0,
                genesis_vote_power_multiplier_expiration_ts: 0,
                lockup_saturation_secs: 1,
                digit_shift: 0,
            },
            voting_delegation: None,
            is_enrolled: enrolled,
        }
    }

    fn names(instructions: &[Instruction]) -> Vec<[u8; 8]> {
        instructions
            .iter()
            .map(|ix| {
                let mut discriminator = [0u8; 8];
                discriminator.copy_from_slice(&ix.data[..8]);
                discriminator
            })
            .collect()
    }

    fn disc<A: InstructionArgs>() -> [u8; 8] {
        instruction_discriminator(A::NAME)
    }

    #[test]
    fn test_partial_transfer_is_single_instruction() {
        let source = position(1_000, false);
        let target = position(0, false);
        let authority = Pubkey::new_unique();

        let ixs = transfer_instructions(&authority, &source, &target, 400, None).unwrap();

        assert_eq!(names(&ixs), vec![disc::<TransferArgsV0>()]);
        assert_eq!(ixs[0].program_id, VSR_PROGRAM_ID);
    }

    #[test]
    fn test_full_transfer_closes_source() {
        let source = position(1_000, false);
        let target = position(0, false);
        let authority = Pubkey::new_unique();

        let ixs = transfer_instructions(&authority, &source, &target, 1_000, None).unwrap();

        assert_eq!(
            names(&ixs),
            vec![disc::<TransferArgsV0>(), disc::<ClosePositionArgsV0>()]
        );
    }

    #[test]
    fn test_enrollment_wraps_transfer() {
        let source = position(1_000, true);
        let target = position(0, true);
        let authority = Pubkey::new_unique();

        let ixs = transfer_instructions(&authority, &source, &target, 10, None).unwrap();

        assert_eq!(
            names(&ixs),
            vec![
                disc::<UnenrollArgsV0>(),
                disc::<EnrollArgsV0>(),
                disc::<TransferArgsV0>()
            ]
        );
        assert_eq!(ixs[0].program_id, PVR_PROGRAM_ID);
        assert!(ixs[0].accounts.iter().any(|meta| meta.pubkey == source.pubkey));
        assert!(ixs[1].accounts.iter().any(|meta| meta.pubkey == target.pubkey));
    }

    #[test]
    fn test_dao_transfer_uses_sub_daos_program() {
        let source = position(1_000, false);
        let target = position(0, false);
        let authority = Pubkey::new_unique();
        let (dao, _) = dao_key(source.deposit_mint());

        let ixs = transfer_instructions(
            &authority,
            &source,
            &target,
            10,
            Some((&HSD_PROGRAM_ID, &dao)),
        )
        .unwrap();

        assert_eq!(ixs.len(), 1);
        assert_eq!(ixs[0].program_id, HSD_PROGRAM_ID);
        assert!(ixs[0].accounts.iter().any(|meta| meta.pubkey == dao));
    }
}
