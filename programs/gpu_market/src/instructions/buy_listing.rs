use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::{ESCROW_SEED, GPU_MINT_SEED, LISTING_SEED};
use crate::errors::ErrorCode;
use crate::state::listing::Listing;
use crate::utils::math::settlement_total;

#[derive(Accounts)]
pub struct BuyListing<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [
            LISTING_SEED,
            listing.seller.as_ref(),
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
    pub buyer_token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: lamport payment destination; must match the stored seller
    #[account(mut, address = listing.seller)]
    pub seller: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<BuyListing>, amount: u64) -> Result<()> {
    let listing = &ctx.accounts.listing;

    require!(listing.is_active, ErrorCode::ListingNotActive);
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(amount <= listing.amount, ErrorCode::InsufficientAmount);

    let total = settlement_total(listing.price, amount)?;

    // Pay the seller in lamports; an underfunded buyer fails here
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.seller.to_account_info(),
            },
        ),
        total,
    )?;

    // Release the purchased credits from escrow, listing PDA signs
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
                to: ctx.accounts.buyer_token_account.to_account_info(),
                authority: ctx.accounts.listing.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.gpu_mint.decimals,
    )?;

    let listing = &mut ctx.accounts.listing;
    listing.record_fill(amount)?;

    msg!(
        "Listing {} filled: {} units for {} lamports",
        listing.listing_id,
        amount,
        total
    );

    Ok(())
}
