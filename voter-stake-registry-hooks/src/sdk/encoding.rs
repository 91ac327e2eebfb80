//! Anchor instruction encoding.
//!
//! Instruction data is an 8-byte discriminator, `sha256("global:{name}")[..8]`,
//! followed by the borsh-encoded arguments.
use borsh::BorshSerialize;
use sha2::{Digest, Sha256};
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::HooksError;

/// Computes the Anchor instruction discriminator for `name` (snake case).
pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    let hash = Sha256::digest(format!("global:{name}").as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}

/// Ordered account list of an instruction.
pub trait ToAccountMetas {
    fn to_account_metas(&self) -> Vec<AccountMeta>;
}

/// Arguments of an Anchor instruction.
pub trait InstructionArgs: BorshSerialize {
    /// Instruction name as declared in the program.
    const NAME: &'static str;
}

/// Builds an Anchor instruction from its arguments and accounts.
pub fn anchor_instruction<A, M>(
    program_id: Pubkey,
    args: &A,
    accounts: &M,
) -> Result<Instruction, HooksError>
where
    A: InstructionArgs,
    M: ToAccountMetas,
{
    let mut data = instruction_discriminator(A::NAME).to_vec();
    args.serialize(&mut data).map_err(|e| HooksError::Encoding {
        name: A::NAME,
        reason: e.to_string(),
    })?;
    Ok(Instruction {
        program_id,
        accounts: accounts.to_account_metas(),
        data,
    })
}
