use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, CloseAccount, TokenAccount, TokenInterface};

use crate::constants::{ESCROW_SEED, LISTING_SEED};
use crate::errors::ErrorCode;
use crate::state::listing::Listing;

#[derive(Accounts)]
pub struct CloseListing<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
        close = seller,
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

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<CloseListing>) -> Result<()> {
    let listing = &ctx.accounts.listing;

    require!(!listing.is_active, ErrorCode::ListingStillActive);
    // Every deactivating path drains escrow in the same instruction, so a
    // funded escrow here cannot be reached through this program
    require!(
        ctx.accounts.escrow_token_account.amount == 0,
        ErrorCode::EscrowNotEmpty
    );

    // Close the empty escrow, rent goes back to the seller
    let seller_key = listing.seller;
    let listing_id_bytes = listing.listing_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        LISTING_SEED,
        seller_key.as_ref(),
        listing_id_bytes.as_ref(),
        &[listing.bump],
    ]];

    token_interface::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.escrow_token_account.to_account_info(),
            destination: ctx.accounts.seller.to_account_info(),
            authority: ctx.accounts.listing.to_account_info(),
        },
        signer_seeds,
    ))?;

    msg!("Listing {} closed", listing.listing_id);

    Ok(())
}
