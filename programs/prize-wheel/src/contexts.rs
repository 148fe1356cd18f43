use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::{constants::*, errors::*, states::*};

/// ========================================
/// Account Structs
/// ========================================

/// Accounts required for initializing a new prize wheel
#[derive(Accounts)]
pub struct InitializeWheel<'info> {
    /// The wheel state account (PDA)
    #[account(
        init,
        payer = admin,
        space = WheelState::space_for_winners(0),
        seeds = [PRIZE_WHEEL, admin.key().as_ref()],
        bump
    )]
    pub wheel: Account<'info, WheelState>,
    /// The operator account that will own the wheel
    #[account(mut)]
    pub admin: Signer<'info>,
    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Accounts required for roster, ledger and prize management
#[derive(Accounts)]
pub struct AdminAction<'info> {
    /// The wheel state to modify
    #[account(
        mut,
        has_one = admin @ WheelError::Unauthorized,
        seeds = [PRIZE_WHEEL, admin.key().as_ref()],
        bump = wheel.bump
    )]
    pub wheel: Account<'info, WheelState>,

    /// Admin account (must match wheel.admin)
    pub admin: Signer<'info>,
}

/// Accounts required for starting a draw
#[derive(Accounts)]
pub struct StartDraw<'info> {
    /// The wheel state
    #[account(
        mut,
        has_one = admin @ WheelError::Unauthorized,
        seeds = [PRIZE_WHEEL, admin.key().as_ref()],
        bump = wheel.bump
    )]
    pub wheel: Account<'info, WheelState>,

    /// Operator spinning the wheel
    pub admin: Signer<'info>,

    /// SlotHashes sysvar used to seed the draw
    /// CHECK: Address is pinned to the sysvar id; data is parsed in helpers
    #[account(address = slot_hashes::ID @ WheelError::InvalidSlotHashes)]
    pub slot_hashes: UncheckedAccount<'info>,
}

/// Accounts required for moving a draw through reveal or reject
#[derive(Accounts)]
pub struct Draw<'info> {
    /// The wheel state
    #[account(
        mut,
        has_one = admin @ WheelError::Unauthorized,
        seeds = [PRIZE_WHEEL, admin.key().as_ref()],
        bump = wheel.bump
    )]
    pub wheel: Account<'info, WheelState>,

    /// Operator running the draw
    pub admin: Signer<'info>,
}

/// Accounts required for confirming a draw
#[derive(Accounts)]
pub struct ConfirmDraw<'info> {
    /// The wheel state
    #[account(
        mut,
        has_one = admin @ WheelError::Unauthorized,
        seeds = [PRIZE_WHEEL, admin.key().as_ref()],
        bump = wheel.bump,
        // Reallocate to fit the winner record this confirmation appends
        realloc = WheelState::space_for_winners(wheel.winners.len() + 1),
        realloc::payer = admin,
        realloc::zero = false,
    )]
    pub wheel: Account<'info, WheelState>,

    /// Operator running the draw, pays for the ledger growth
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for reallocation
    pub system_program: Program<'info, System>,
}

/// Accounts required for recovering a wheel whose data no longer decodes
#[derive(Accounts)]
pub struct RecoverWheel<'info> {
    /// The wheel state account (PDA), loaded by hand
    /// CHECK: Seeds and owner are checked here; the data is validated in the handler
    #[account(
        mut,
        seeds = [PRIZE_WHEEL, admin.key().as_ref()],
        bump,
        owner = crate::ID @ WheelError::Unauthorized
    )]
    pub wheel: UncheckedAccount<'info>,

    /// Admin account (must match the admin stored in the wheel)
    pub admin: Signer<'info>,
}
