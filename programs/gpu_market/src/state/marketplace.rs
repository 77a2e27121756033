use anchor_lang::prelude::*;

/// Global marketplace singleton (one per deployment)
#[account]
pub struct Marketplace {
    /// Identity that initialized the marketplace
    pub authority: Pubkey,

    /// Counter for assigning unique listing IDs, never reused
    pub listing_count: u64,

    /// PDA bump
    pub bump: u8,
}

impl Marketplace {
    pub const SIZE: usize = 8 + 32 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marketplace_size_matches_layout() {
        // discriminator + authority + listing_count + bump
        assert_eq!(Marketplace::SIZE, 8 + 32 + 8 + 1);
    }
}
