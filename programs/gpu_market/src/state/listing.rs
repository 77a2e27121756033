use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// A fixed-price sell order for GPU credits
#[account]
pub struct Listing {
    /// Listing owner; only this identity may cancel or close
    pub seller: Pubkey,

    /// Unique ID assigned from the marketplace counter at creation
    pub listing_id: u64,

    /// Price in lamports per whole GPU credit (per 10^9 smallest units)
    pub price: u64,

    /// Remaining tradable quantity in smallest units
    pub amount: u64,

    /// True from creation until fully filled or cancelled
    pub is_active: bool,

    /// PDA bump
    pub bump: u8,
}

impl Listing {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + 8 + 1 + 1;

    /// Applies a fill: decrements the remaining amount and deactivates the
    /// listing once it reaches zero. The caller drains escrow by the same
    /// quantity in the same instruction.
    pub fn record_fill(&mut self, fill: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_sub(fill)
            .ok_or(ErrorCode::MathOverflow)?;
        if self.amount == 0 {
            self.is_active = false;
        }
        Ok(())
    }

    /// Terminal cancel state. The caller returns the full escrow balance to
    /// the seller in the same instruction.
    pub fn deactivate(&mut self) {
        self.amount = 0;
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_listing(amount: u64) -> Listing {
        Listing {
            seller: Pubkey::new_unique(),
            listing_id: 0,
            price: 100_000_000,
            amount,
            is_active: true,
            bump: 255,
        }
    }

    #[test]
    fn listing_size_matches_layout() {
        // discriminator + seller + listing_id + price + amount + is_active + bump
        assert_eq!(Listing::SIZE, 8 + 32 + 8 + 8 + 8 + 1 + 1);
    }

    #[test]
    fn partial_fill_keeps_listing_active() {
        let mut listing = active_listing(10_000_000_000);
        listing.record_fill(3_000_000_000).unwrap();
        assert_eq!(listing.amount, 7_000_000_000);
        assert!(listing.is_active);
    }

    #[test]
    fn fills_summing_to_amount_deactivate() {
        let mut listing = active_listing(10_000_000_000);
        listing.record_fill(3_000_000_000).unwrap();
        listing.record_fill(7_000_000_000).unwrap();
        assert_eq!(listing.amount, 0);
        assert!(!listing.is_active);
    }

    #[test]
    fn overfill_errors_and_leaves_state_unchanged() {
        let mut listing = active_listing(5_000_000_000);
        assert!(listing.record_fill(5_000_000_001).is_err());
        assert_eq!(listing.amount, 5_000_000_000);
        assert!(listing.is_active);
    }

    #[test]
    fn deactivate_is_terminal() {
        let mut listing = active_listing(2_000_000_000);
        listing.deactivate();
        assert_eq!(listing.amount, 0);
        assert!(!listing.is_active);
    }
}
