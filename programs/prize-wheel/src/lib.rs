//! Prize Wheel Program
//!
//! A Solana program that runs a weighted prize wheel for a live event:
//! - Participants hold tickets; every ticket is one equal chance on the wheel
//! - A draw picks its winner up front, spins for a fixed number of slots, then
//!   waits for the operator to confirm (one ticket consumed, win recorded) or
//!   reject it
//! - Winners are recorded against the prize round active at confirmation
//!
//! The wheel account is the single durable record; events are the signal for
//! clients to re-render.

#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod engine;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod ledger;
pub mod persistence;
pub mod roster;
pub mod session;
pub mod states;

pub use contexts::*;

declare_id!("6JwKSfFo1H3gHzq8tuAGzUHB5nmrNAgwmT7nHG8Ecxjm");

#[program]
pub mod prize_wheel {
    use super::*;

    // ========================================
    // Admin Instructions
    // ========================================

    pub fn initialize_wheel(
        ctx: Context<InitializeWheel>,
        roster_csv: Option<String>,
    ) -> Result<()> {
        instructions::admin::initialize_wheel(ctx, roster_csv)
    }

    pub fn add_participant(
        ctx: Context<AdminAction>,
        name: String,
        tickets: Option<u32>,
    ) -> Result<()> {
        instructions::admin::add_participant(ctx, name, tickets)
    }

    pub fn remove_participant(ctx: Context<AdminAction>, participant_id: u32) -> Result<()> {
        instructions::admin::remove_participant(ctx, participant_id)
    }

    pub fn adjust_tickets(
        ctx: Context<AdminAction>,
        participant_id: u32,
        delta: i32,
    ) -> Result<()> {
        instructions::admin::adjust_tickets(ctx, participant_id, delta)
    }

    pub fn import_participants(ctx: Context<AdminAction>, roster_csv: String) -> Result<()> {
        instructions::admin::import_participants(ctx, roster_csv)
    }

    pub fn set_prize(ctx: Context<AdminAction>, prize: String) -> Result<()> {
        instructions::admin::set_prize(ctx, prize)
    }

    pub fn remove_winner(ctx: Context<AdminAction>, index: u32) -> Result<()> {
        instructions::admin::remove_winner(ctx, index)
    }

    pub fn clear_winners(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::clear_winners(ctx)
    }

    pub fn reset_wheel(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::reset_wheel(ctx)
    }

    pub fn export_state(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::export_state(ctx)
    }

    pub fn recover_wheel(ctx: Context<RecoverWheel>) -> Result<()> {
        instructions::admin::recover_wheel(ctx)
    }

    // ========================================
    // Draw Instructions
    // ========================================

    pub fn start_draw(ctx: Context<StartDraw>) -> Result<()> {
        instructions::user::start_draw(ctx)
    }

    pub fn reveal_draw(ctx: Context<Draw>) -> Result<()> {
        instructions::user::reveal_draw(ctx)
    }

    pub fn confirm_draw(ctx: Context<ConfirmDraw>) -> Result<()> {
        instructions::user::confirm_draw(ctx)
    }

    pub fn reject_draw(ctx: Context<Draw>) -> Result<()> {
        instructions::user::reject_draw(ctx)
    }
}
