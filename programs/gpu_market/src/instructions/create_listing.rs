use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::{ESCROW_SEED, GPU_MINT_SEED, LISTING_SEED, MARKETPLACE_SEED};
use crate::errors::ErrorCode;
use crate::state::listing::Listing;
use crate::state::marketplace::Marketplace;
use crate::utils::validation::{validate_listing_amount, validate_price};

#[derive(Accounts)]
pub struct CreateListing<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(mut, seeds = [MARKETPLACE_SEED], bump = marketplace.bump)]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        init,
        payer = seller,
        space = Listing::SIZE,
        seeds = [
            LISTING_SEED,
            seller.key().as_ref(),
            marketplace.listing_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub listing: Account<'info, Listing>,

    #[account(seeds = [GPU_MINT_SEED], bump)]
    pub gpu_mint: InterfaceAccount<'info, Mint>,

    /// Listing escrow (PDA owned by the listing)
    #[account(
        init,
        payer = seller,
        seeds = [ESCROW_SEED, listing.key().as_ref()],
        bump,
        token::mint = gpu_mint,
        token::authority = listing
    )]
    pub escrow_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut, token::mint = gpu_mint)]
    pub seller_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateListing>, price: u64, amount: u64) -> Result<()> {
    validate_price(price)?;
    validate_listing_amount(amount)?;

    let marketplace = &ctx.accounts.marketplace;
    let listing_id = marketplace.listing_count;

    // Move the full listed amount into escrow
    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.seller_token_account.to_account_info(),
                mint: ctx.accounts.gpu_mint.to_account_info(),
                to: ctx.accounts.escrow_token_account.to_account_info(),
                authority: ctx.accounts.seller.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.gpu_mint.decimals,
    )?;

    let listing = &mut ctx.accounts.listing;
    listing.seller = ctx.accounts.seller.key();
    listing.listing_id = listing_id;
    listing.price = price;
    listing.amount = amount;
    listing.is_active = true;
    listing.bump = ctx.bumps.listing;

    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.listing_count = marketplace
        .listing_count
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    msg!("Listing {} created: {} units @ {}", listing_id, amount, price);

    Ok(())
}
