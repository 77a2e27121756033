use anchor_lang::prelude::*;

use crate::constants::MIN_LISTING_AMOUNT;
use crate::errors::ErrorCode;

/// Validates that a listing price is non-zero
pub fn validate_price(price: u64) -> Result<()> {
    require!(price > 0, ErrorCode::InvalidPrice);
    Ok(())
}

/// Validates that a listing amount is non-zero and at least the minimum
pub fn validate_listing_amount(amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(amount >= MIN_LISTING_AMOUNT, ErrorCode::AmountTooSmall);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_rejected() {
        assert!(validate_price(0).is_err());
        assert!(validate_price(1).is_ok());
    }

    #[test]
    fn zero_amount_rejected() {
        assert!(validate_listing_amount(0).is_err());
    }

    #[test]
    fn sub_minimum_amount_rejected() {
        assert!(validate_listing_amount(MIN_LISTING_AMOUNT - 1).is_err());
        assert!(validate_listing_amount(MIN_LISTING_AMOUNT).is_ok());
    }
}
