//! Seeds and limits shared across instructions.

pub const MARKETPLACE_SEED: &[u8] = b"marketplace";
pub const GPU_MINT_SEED: &[u8] = b"gpu-mint";
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint-authority";
pub const LISTING_SEED: &[u8] = b"listing";
pub const ESCROW_SEED: &[u8] = b"escrow";

/// GPU credit mint decimals.
pub const GPU_CREDIT_DECIMALS: u8 = 9;

/// Smallest units per whole GPU credit (10^9).
pub const UNIT_SCALE: u64 = 1_000_000_000;

/// Smallest listable amount: 0.001 GPU credit.
pub const MIN_LISTING_AMOUNT: u64 = 1_000_000;
