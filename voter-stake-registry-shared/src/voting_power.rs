//! Voting power of a position.
//!
//! Power is a baseline weight on the deposited amount plus an extra weight that
//! grows with the remaining lockup, saturating at `lockup_saturation_secs`.
//! While a position's genesis period lasts, the locked part is multiplied by
//! the mint's genesis multiplier.
use crate::types::{Lockup, Position, VotingMintConfig};
use crate::ConversionError;

/// Base of all scaled vote weight factors.
pub const SCALED_FACTOR_BASE: u128 = 1_000_000_000;

/// Computes the voting power of `position` at registrar time `now`.
///
/// # Errors
///
/// Returns `ConversionError::Overflow` if an intermediate value overflows.
pub fn calc_position_voting_power(
    position: &Position,
    voting_mint: &VotingMintConfig,
    now: i64,
) -> Result<u128, ConversionError> {
    let amount = apply_digit_shift(position.amount_deposited_native, voting_mint.digit_shift)?;
    let baseline = scale(amount, voting_mint.baseline_vote_weight_scaled_factor)?;
    let max_locked = scale(amount, voting_mint.max_extra_lockup_vote_weight_scaled_factor)?;
    let locked = locked_vote_weight(
        &position.lockup,
        now,
        max_locked,
        voting_mint.lockup_saturation_secs,
    )?;
    let multiplier = genesis_multiplier(position, voting_mint, now);

    locked
        .checked_mul(multiplier)
        .and_then(|locked| baseline.checked_add(locked))
        .ok_or(ConversionError::Overflow)
}

fn apply_digit_shift(amount: u64, digit_shift: i8) -> Result<u128, ConversionError> {
    let amount = amount as u128;
    let exponent = digit_shift.unsigned_abs() as u32;
    if digit_shift >= 0 {
        10u128
            .checked_pow(exponent)
            .and_then(|factor| amount.checked_mul(factor))
            .ok_or(ConversionError::Overflow)
    } else {
        // a shift past u128 range leaves nothing
        Ok(10u128.checked_pow(exponent).map(|factor| amount / factor).unwrap_or(0))
    }
}

fn scale(amount: u128, scaled_factor: u64) -> Result<u128, ConversionError> {
    amount
        .checked_mul(scaled_factor as u128)
        .map(|value| value / SCALED_FACTOR_BASE)
        .ok_or(ConversionError::Overflow)
}

fn locked_vote_weight(
    lockup: &Lockup,
    now: i64,
    max_locked: u128,
    saturation_secs: u64,
) -> Result<u128, ConversionError> {
    let remaining = lockup.seconds_remaining(now) as u128;
    if remaining == 0 || max_locked == 0 {
        return Ok(0);
    }
    if saturation_secs == 0 {
        return Ok(max_locked);
    }
    let saturation = saturation_secs as u128;
    max_locked
        .checked_mul(remaining.min(saturation))
        .map(|value| value / saturation)
        .ok_or(ConversionError::Overflow)
}

fn genesis_multiplier(position: &Position, voting_mint: &VotingMintConfig, now: i64) -> u128 {
    if position.genesis_end > now && voting_mint.genesis_vote_power_multiplier > 0 {
        voting_mint.genesis_vote_power_multiplier as u128
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LockupKind;
    use solana_pubkey::Pubkey;

    fn config(max_extra: u64, multiplier: u8, digit_shift: i8) -> VotingMintConfig {
        VotingMintConfig {
            mint: Pubkey::new_unique(),
            baseline_vote_weight_scaled_factor: 1_000_000_000,
            max_extra_lockup_vote_weight_scaled_factor: max_extra,
            genesis_vote_power_multiplier: multiplier,
            genesis_vote_power_multiplier_expiration_ts: 0,
            lockup_saturation_secs: 100,
            digit_shift,
        }
    }

    fn position(kind: LockupKind, genesis_end: i64) -> Position {
        Position {
            registrar: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            lockup: Lockup {
                start_ts: 0,
                end_ts: 200,
                kind,
            },
            amount_deposited_native: 1_000,
            voting_mint_config_idx: 0,
            num_active_votes: 0,
            genesis_end,
            bump_seed: 0,
        }
    }

    #[test]
    fn test_baseline_only_without_lockup() {
        let power =
            calc_position_voting_power(&position(LockupKind::None, 0), &config(2_000_000_000, 0, 0), 10)
                .unwrap();
        assert_eq!(power, 1_000);
    }

    #[test]
    fn test_cliff_scales_with_remaining_time() {
        let position = position(LockupKind::Cliff, 0);
        let config = config(2_000_000_000, 0, 0);

        // 150s left, saturated at 100s
        assert_eq!(calc_position_voting_power(&position, &config, 50).unwrap(), 3_000);
        // 50s left, half of max extra weight
        assert_eq!(calc_position_voting_power(&position, &config, 150).unwrap(), 2_000);
        // expired
        assert_eq!(calc_position_voting_power(&position, &config, 250).unwrap(), 1_000);
    }

    #[test]
    fn test_constant_lockup_stays_saturated() {
        let position = position(LockupKind::Constant, 0);
        let config = config(2_000_000_000, 0, 0);
        assert_eq!(calc_position_voting_power(&position, &config, 10_000).unwrap(), 3_000);
    }

    #[test]
    fn test_genesis_multiplier_applies_to_locked_weight() {
        let position = position(LockupKind::Constant, 500);
        let config = config(2_000_000_000, 3, 0);
        assert_eq!(calc_position_voting_power(&position, &config, 100).unwrap(), 7_000);
        assert_eq!(calc_position_voting_power(&position, &config, 500).unwrap(), 3_000);
    }

    #[test]
    fn test_digit_shift() {
        let position = position(LockupKind::None, 0);
        assert_eq!(
            calc_position_voting_power(&position, &config(0, 0, -1), 0).unwrap(),
            100
        );
        assert_eq!(
            calc_position_voting_power(&position, &config(0, 0, 2), 0).unwrap(),
            100_000
        );
    }
}
