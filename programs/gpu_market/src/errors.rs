use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid price (must be > 0)")]
    InvalidPrice,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Listing amount below the 0.001 credit minimum")]
    AmountTooSmall,

    #[msg("Listing is not active")]
    ListingNotActive,

    #[msg("Listing is still active")]
    ListingStillActive,

    #[msg("Insufficient amount remaining in listing")]
    InsufficientAmount,

    #[msg("Escrow still holds tokens")]
    EscrowNotEmpty,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Unauthorized access")]
    UnauthorizedAccess,
}
