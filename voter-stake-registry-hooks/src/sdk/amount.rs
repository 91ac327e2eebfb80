use crate::HooksError;

/// Converts a UI token amount into native units for a mint with `decimals`.
///
/// The scaled value is rounded to the nearest native unit.
///
/// # Errors
///
/// Returns `HooksError::InvalidAmount` for negative or non-finite amounts and
/// for amounts that do not fit in a `u64`.
pub fn ui_amount_to_native(amount: f64, decimals: u8) -> Result<u64, HooksError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(HooksError::invalid_amount(format!("{amount}")));
    }
    let scaled = (amount * 10f64.powi(decimals as i32)).round();
    if scaled >= u64::MAX as f64 {
        return Err(HooksError::invalid_amount(format!(
            "{amount} with {decimals} decimals overflows"
        )));
    }
    Ok(scaled as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_to_native_units() {
        assert_eq!(ui_amount_to_native(1.5, 6).unwrap(), 1_500_000);
        assert_eq!(ui_amount_to_native(0.1 + 0.2, 9).unwrap(), 300_000_000);
        assert_eq!(ui_amount_to_native(42.0, 0).unwrap(), 42);
        assert_eq!(ui_amount_to_native(0.0, 8).unwrap(), 0);
    }

    #[test]
    fn test_rejects_invalid_amounts() {
        assert!(matches!(
            ui_amount_to_native(-1.0, 6),
            Err(HooksError::InvalidAmount(_))
        ));
        assert!(matches!(
            ui_amount_to_native(f64::NAN, 6),
            Err(HooksError::InvalidAmount(_))
        ));
        assert!(matches!(
            ui_amount_to_native(1e30, 9),
            Err(HooksError::InvalidAmount(_))
        ));
    }
}
