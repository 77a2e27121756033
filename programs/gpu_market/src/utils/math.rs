use anchor_lang::prelude::*;

use crate::constants::UNIT_SCALE;
use crate::errors::ErrorCode;

/// Calculates the lamport settlement for a fill using the formula:
/// total = (price × amount) / 10^9
///
/// Price is quoted per whole GPU credit, amount is in smallest units, so
/// the product is scaled back down by the unit scale. Uses u128 for the
/// intermediate multiplication to prevent overflow, then floors on the
/// division.
pub fn settlement_total(price: u64, amount: u64) -> Result<u64> {
    let total = (price as u128)
        .checked_mul(amount as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(UNIT_SCALE as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(total).map_err(|_| ErrorCode::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_credit_fill() {
        // 0.1 SOL per credit, 3 credits -> 0.3 SOL
        assert_eq!(
            settlement_total(100_000_000, 3_000_000_000).unwrap(),
            300_000_000
        );
    }

    #[test]
    fn fractional_fill_floors() {
        // 1 lamport per credit, half a smallest unit of value rounds down
        assert_eq!(settlement_total(1, 1_500_000_000).unwrap(), 1);
        assert_eq!(settlement_total(1, 999_999_999).unwrap(), 0);
    }

    #[test]
    fn large_inputs_do_not_overflow() {
        // u64::MAX price times a full-credit amount overflows u64 but not u128
        assert_eq!(
            settlement_total(u64::MAX, 1_000_000_000).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn result_exceeding_u64_errors() {
        assert!(settlement_total(u64::MAX, u64::MAX).is_err());
    }

    #[test]
    fn zero_amount_settles_zero() {
        assert_eq!(settlement_total(100_000_000, 0).unwrap(), 0);
    }
}
