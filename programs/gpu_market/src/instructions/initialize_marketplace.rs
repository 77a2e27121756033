use anchor_lang::prelude::*;

use crate::constants::MARKETPLACE_SEED;
use crate::state::marketplace::Marketplace;

#[derive(Accounts)]
pub struct InitializeMarketplace<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Marketplace::SIZE,
        seeds = [MARKETPLACE_SEED],
        bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeMarketplace>) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.authority = ctx.accounts.authority.key();
    marketplace.listing_count = 0;
    marketplace.bump = ctx.bumps.marketplace;

    msg!("Marketplace created by {}", marketplace.authority);

    Ok(())
}
