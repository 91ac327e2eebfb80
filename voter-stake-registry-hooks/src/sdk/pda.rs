//! Program derived addresses used by the hooks.
use solana_pubkey::Pubkey;

use crate::sdk::{
    ASSOCIATED_TOKEN_PROGRAM_ID, HSD_PROGRAM_ID, PVR_PROGRAM_ID, TOKEN_PROGRAM_ID, VSR_PROGRAM_ID,
};

const MARKER_PREFIX: &[u8] = b"marker";
const POSITION_PREFIX: &[u8] = b"position";
const REGISTRAR_PREFIX: &[u8] = b"registrar";
const DAO_PREFIX: &[u8] = b"dao";
const VETOKEN_TRACKER_PREFIX: &[u8] = b"vetoken_tracker";
const ENROLLED_POSITION_PREFIX: &[u8] = b"enrolled_position";

/// Vote marker of a position (by NFT mint) on a proposal.
pub fn vote_marker_key(mint: &Pubkey, proposal: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[MARKER_PREFIX, mint.as_ref(), proposal.as_ref()],
        &VSR_PROGRAM_ID,
    )
}

/// Position account held by a position NFT mint.
pub fn position_key(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POSITION_PREFIX, mint.as_ref()], &VSR_PROGRAM_ID)
}

pub fn registrar_key(realm: &Pubkey, realm_governing_token_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            realm.as_ref(),
            REGISTRAR_PREFIX,
            realm_governing_token_mint.as_ref(),
        ],
        &VSR_PROGRAM_ID,
    )
}

/// DAO account of a deposit mint. It only exists for DAO-registered mints.
pub fn dao_key(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DAO_PREFIX, mint.as_ref()], &HSD_PROGRAM_ID)
}

pub fn vetoken_tracker_key(registrar: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VETOKEN_TRACKER_PREFIX, registrar.as_ref()],
        &PVR_PROGRAM_ID,
    )
}

pub fn enrolled_position_key(position: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ENROLLED_POSITION_PREFIX, position.as_ref()],
        &PVR_PROGRAM_ID,
    )
}

/// Associated token account of `owner` for `mint`.
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[owner.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .0
}
