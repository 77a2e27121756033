use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::{ESCROW_SEED, GPU_MINT_SEED, LISTING_SEED};
use crate::errors::ErrorCode;
use crate::state::listing::Listing;

#[derive(Accounts)]
pub struct CancelListing<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
        has_one = seller @ ErrorCode::UnauthorizedAccess,
        seeds = [
            LISTING_SEED,
            seller.key().as_ref(),
            listing.listing_id.to_le_bytes().as_ref()
        ],
        bump = listing.bump
    )]
    pub listing: Account<'info, Listing>,

    #[account(mut, seeds = [ESCROW_SEED, listing.key().as_ref()], bump)]
    pub escrow_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(seeds = [GPU_MINT_SEED], bump)]
    pub gpu_mint: InterfaceAccount<'info, Mint>,

    #[account(mut, token::mint = gpu_mint)]
    pub seller_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<CancelListing>) -> Result<()> {
    let listing = &ctx.accounts.listing;

    require!(listing.is_active, ErrorCode::ListingNotActive);

    // Return the remaining escrow balance, listing PDA signs
    let seller_key = listing.seller;
    let listing_id_bytes = listing.listing_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        LISTING_SEED,
        seller_key.as_ref(),
        listing_id_bytes.as_ref(),
        &[listing.bump],
    ]];

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.escrow_token_account.to_account_info(),
                mint: ctx.accounts.gpu_mint.to_account_info(),
                to: ctx.accounts.seller_token_account.to_account_info(),
                authority: ctx.accounts.listing.to_account_info(),
            },
            signer_seeds,
        ),
        listing.amount,
        ctx.accounts.gpu_mint.decimals,
    )?;

    let listing = &mut ctx.accounts.listing;
    listing.deactivate();

    msg!("Listing {} cancelled", listing.listing_id);

    Ok(())
}
