use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, MintTo, TokenAccount, TokenInterface};

use crate::constants::{GPU_MINT_SEED, MINT_AUTHORITY_SEED};

#[derive(Accounts)]
pub struct MintGpuTokens<'info> {
    #[account(mut, seeds = [GPU_MINT_SEED], bump)]
    pub gpu_mint: InterfaceAccount<'info, Mint>,

    #[account(mut, token::mint = gpu_mint)]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: mint-authority PDA; only ever used as a CPI signer
    #[account(seeds = [MINT_AUTHORITY_SEED], bump)]
    pub mint_authority: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<MintGpuTokens>, amount: u64) -> Result<()> {
    let signer_seeds: &[&[&[u8]]] = &[&[MINT_AUTHORITY_SEED, &[ctx.bumps.mint_authority]]];

    token_interface::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.gpu_mint.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.mint_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("Minted {} credits to {}", amount, ctx.accounts.user_token_account.key());

    Ok(())
}
