use anchor_lang::prelude::*;

use crate::{
    contexts::*,
    engine::total_tickets,
    errors::WheelError,
    events::*,
    helpers::{derive_entropy, recent_slot_hash},
    session::prize_display_name,
};

/// ========================================
/// Draw Instructions
/// ========================================

/// Start a draw
///
/// The winner is picked here, before any animation runs, from a seed mixing
/// the most recent slot hash with the clock and the draw counter.
///
/// Process:
/// 1. Validate the wheel is idle and has tickets left
/// 2. Derive entropy from SlotHashes and the clock
/// 3. Pick one ticket from the weighted pool
/// 4. Move the session to Spinning
///
/// Args:
/// - ctx: Context containing the wheel, operator and SlotHashes sysvar
///
/// Returns: Result indicating success or failure
pub fn start_draw(ctx: Context<StartDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    // Preconditions first so a busy or empty wheel never touches the sysvar
    wheel.ensure_idle()?;
    let pool_size = total_tickets(&wheel.participants);
    require!(pool_size > 0, WheelError::TicketsExhausted);

    let slot_hash = recent_slot_hash(&ctx.accounts.slot_hashes.try_borrow_data()?)?;
    let entropy = derive_entropy(&slot_hash, clock.slot, clock.unix_timestamp, wheel.draw_count);
    msg!("Draw entropy: {}", entropy);
    msg!("Pool size: {}", pool_size);

    let ticket_index = wheel.start_draw(entropy, clock.slot)?.ticket_index;

    emit!(DrawStarted {
        ticket_index,
        pool_size,
        spin_slot: clock.slot,
        reveal_slot: wheel.session.reveal_slot(),
        wheel: wheel_key,
    });
    Ok(())
}

/// Stop the wheel and show the winner
///
/// Only valid once SPIN_PRESENTATION_SLOTS slots have passed since the spin.
pub fn reveal_draw(ctx: Context<Draw>) -> Result<()> {
    let clock = Clock::get()?;
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    let pending = wheel.reveal_draw(clock.slot)?.clone();

    emit!(DrawRevealed {
        participant_id: pending.participant_id,
        name: pending.name,
        prize: wheel.current_prize.clone(),
        wheel: wheel_key,
    });
    Ok(())
}

/// Confirm the revealed winner
///
/// Deducts one ticket from the winner (if they are still listed with tickets)
/// and records the win against the current prize.
pub fn confirm_draw(ctx: Context<ConfirmDraw>) -> Result<()> {
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    let confirmed = wheel.confirm_draw()?;
    msg!("{} won {}", confirmed.record.name, confirmed.record.prize);

    emit!(WinnerConfirmed {
        participant_id: confirmed.participant_id,
        display_name: prize_display_name(&confirmed.record.prize),
        name: confirmed.record.name,
        prize: confirmed.record.prize,
        tickets_left: confirmed.tickets_left,
        draw_count: wheel.draw_count,
        wheel: wheel_key,
    });
    Ok(())
}

/// Forfeit the revealed winner; roster and ledger stay as they were
pub fn reject_draw(ctx: Context<Draw>) -> Result<()> {
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    let rejected = wheel.reject_draw()?;

    emit!(DrawRejected {
        participant_id: rejected.participant_id,
        name: rejected.name,
        wheel: wheel_key,
    });
    Ok(())
}
