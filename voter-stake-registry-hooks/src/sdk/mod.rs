//! Client side of the voter stake registry programs.
//!
//! Program ids, address derivation and Anchor-style instruction encoding for
//! the programs the hooks talk to:
//! - voter-stake-registry (positions, votes, transfers)
//! - helium-sub-daos (DAO-aware transfers)
//! - position-voting-rewards (vetoken tracker enrollment)
use solana_pubkey::Pubkey;

pub mod accounts;
pub mod amount;
pub mod encoding;
pub mod instructions;
pub mod pda;

pub use amount::ui_amount_to_native;
pub use encoding::{anchor_instruction, instruction_discriminator, InstructionArgs, ToAccountMetas};

/// Voter stake registry program.
pub const VSR_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("hvsrNC3NKbcryqDs2DocYHZ9yPKEVzdSjQG6RVtK1s8");

/// Helium sub-DAOs program, owner of DAO-registered deposit mints.
pub const HSD_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("hdaoVTCqhfHHo75XdAMxBKdUqvq1i5bF23sisBqVgGR");

/// Position voting rewards program.
pub const PVR_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("pvr1pJdeAcW6tzFyPRSmkL5Xwysi1Tq79f7KF2XB4zM");

/// Modular governance proposal program.
pub const PROPOSAL_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("propFYxqmVcufMhk5esNMrexq2ogHbbC2kP9PU1qxKs");

pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

pub const SYSTEM_PROGRAM_ID: Pubkey = solana_pubkey::pubkey!("11111111111111111111111111111111");
