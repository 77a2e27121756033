use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

use crate::constants::{GPU_CREDIT_DECIMALS, GPU_MINT_SEED, MINT_AUTHORITY_SEED};

#[derive(Accounts)]
pub struct InitializeGpuMint<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [GPU_MINT_SEED],
        bump,
        mint::decimals = GPU_CREDIT_DECIMALS,
        mint::authority = mint_authority
    )]
    pub gpu_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: mint-authority PDA; only ever used as a CPI signer
    #[account(seeds = [MINT_AUTHORITY_SEED], bump)]
    pub mint_authority: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeGpuMint>) -> Result<()> {
    msg!("GPU credit mint created: {}", ctx.accounts.gpu_mint.key());
    Ok(())
}
