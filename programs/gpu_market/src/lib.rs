use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("BRpDctiHbH3jC19VpcSBbKgKUJEnAqiuGWNwQEYv8Nzf");

#[program]
pub mod gpu_market {
    use super::*;

    pub fn initialize_marketplace(ctx: Context<InitializeMarketplace>) -> Result<()> {
        instructions::initialize_marketplace::handler(ctx)
    }

    pub fn initialize_gpu_mint(ctx: Context<InitializeGpuMint>) -> Result<()> {
        instructions::initialize_gpu_mint::handler(ctx)
    }

    pub fn mint_gpu_tokens(ctx: Context<MintGpuTokens>, amount: u64) -> Result<()> {
        instructions::mint_gpu_tokens::handler(ctx, amount)
    }

    pub fn create_listing(ctx: Context<CreateListing>, price: u64, amount: u64) -> Result<()> {
        instructions::create_listing::handler(ctx, price, amount)
    }

    pub fn buy_listing(ctx: Context<BuyListing>, amount: u64) -> Result<()> {
        instructions::buy_listing::handler(ctx, amount)
    }

    pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
        instructions::cancel_listing::handler(ctx)
    }

    pub fn close_listing(ctx: Context<CloseListing>) -> Result<()> {
        instructions::close_listing::handler(ctx)
    }
}
