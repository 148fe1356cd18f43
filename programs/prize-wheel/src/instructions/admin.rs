use anchor_lang::prelude::*;

use crate::{
    contexts::*,
    engine::total_tickets,
    errors::WheelError,
    events::*,
    persistence::{load_wheel, seed_participants, stored_admin, write_wheel, StoredWheel},
    roster::parse_roster,
    session::prize_display_name,
    states::WheelState,
};

/// ========================================
/// Admin Instructions
/// ========================================

/// Initialize a new prize wheel
///
/// Creates the wheel PDA with the caller as admin. The roster comes from
/// `roster_csv` when given (header line first, one name per line), otherwise
/// from the built-in seed list.
///
/// Args:
/// - ctx: Context containing the wheel PDA and admin accounts
/// - roster_csv: Optional participant list
///
/// Returns: Result indicating success or failure
pub fn initialize_wheel(ctx: Context<InitializeWheel>, roster_csv: Option<String>) -> Result<()> {
    let participants = match roster_csv {
        Some(text) => parse_roster(&text)?,
        None => seed_participants(),
    };

    let wheel = &mut ctx.accounts.wheel;
    wheel.set_inner(WheelState::new(
        ctx.accounts.admin.key(),
        ctx.bumps.wheel,
        participants,
    ));

    emit!(WheelInitialized {
        admin: ctx.accounts.admin.key(),
        participant_count: wheel.participants.len() as u32,
        total_tickets: total_tickets(&wheel.participants),
        wheel: wheel.key(),
    });
    Ok(())
}

/// Add a participant to the roster
///
/// Args:
/// - ctx: Context containing the wheel and admin
/// - name: Display name, trimmed, non-empty
/// - tickets: Starting tickets, one when omitted
///
/// Returns: Result indicating success or failure
pub fn add_participant(
    ctx: Context<AdminAction>,
    name: String,
    tickets: Option<u32>,
) -> Result<()> {
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    let added =
        wheel.add_participant(&name, tickets.unwrap_or(crate::constants::DEFAULT_TICKETS))?;

    emit!(ParticipantAdded {
        participant_id: added.id,
        name: added.name,
        tickets: added.tickets,
        wheel: wheel_key,
    });
    Ok(())
}

/// Remove a participant from the roster by id
pub fn remove_participant(ctx: Context<AdminAction>, participant_id: u32) -> Result<()> {
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    let removed = wheel.remove_participant(participant_id)?;

    emit!(ParticipantRemoved {
        participant_id: removed.id,
        name: removed.name,
        wheel: wheel_key,
    });
    Ok(())
}

/// Add or take away tickets
///
/// Constraints:
/// - No draw on the wheel
/// - Result must stay within 0..=MAX_TICKETS_PER_PARTICIPANT
pub fn adjust_tickets(ctx: Context<AdminAction>, participant_id: u32, delta: i32) -> Result<()> {
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    let tickets = wheel.adjust_tickets(participant_id, delta)?;

    emit!(TicketsAdjusted {
        participant_id,
        delta,
        tickets,
        wheel: wheel_key,
    });
    Ok(())
}

/// Replace the roster with an imported list
///
/// Every participant comes back with one ticket. Winner records are kept.
/// An import without any participant is rejected and the roster stays as is.
pub fn import_participants(ctx: Context<AdminAction>, roster_csv: String) -> Result<()> {
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    let participants = parse_roster(&roster_csv)?;
    wheel.replace_participants(participants)?;

    emit!(ParticipantsImported {
        participant_count: wheel.participants.len() as u32,
        wheel: wheel_key,
    });
    Ok(())
}

/// Switch the prize round; locked while a draw is on the wheel
pub fn set_prize(ctx: Context<AdminAction>, prize: String) -> Result<()> {
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    wheel.set_prize(&prize)?;

    emit!(PrizeChanged {
        prize: wheel.current_prize.clone(),
        display_name: prize_display_name(&wheel.current_prize),
        wheel: wheel_key,
    });
    Ok(())
}

/// Delete one winner record by storage index
pub fn remove_winner(ctx: Context<AdminAction>, index: u32) -> Result<()> {
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    let removed = wheel.remove_winner(index)?;

    emit!(WinnerRemoved {
        index,
        name: removed.name,
        prize: removed.prize,
        wheel: wheel_key,
    });
    Ok(())
}

/// Empty the winner ledger
pub fn clear_winners(ctx: Context<AdminAction>) -> Result<()> {
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    let cleared = wheel.clear_winners()?;

    emit!(WinnersCleared {
        cleared,
        wheel: wheel_key,
    });
    Ok(())
}

/// Put the wheel back to the seed roster, no winners, default prize
pub fn reset_wheel(ctx: Context<AdminAction>) -> Result<()> {
    let wheel = &mut ctx.accounts.wheel;
    let wheel_key = wheel.key();

    wheel.reset()?;

    emit!(WheelReset {
        admin: wheel.admin,
        wheel: wheel_key,
    });
    Ok(())
}

/// Emit the durable state for inspection or backup
pub fn export_state(ctx: Context<AdminAction>) -> Result<()> {
    let wheel = &ctx.accounts.wheel;

    emit!(StateExported {
        snapshot: wheel.snapshot(),
        wheel: wheel.key(),
    });
    Ok(())
}

/// Rewrite a wheel whose data no longer decodes
///
/// A readable wheel is left untouched. An unreadable one is replaced by the
/// seed state, keeping the admin stored at the head of the record.
///
/// Constraints:
/// - Signer must match the admin bytes stored in the account
pub fn recover_wheel(ctx: Context<RecoverWheel>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let wheel_info = ctx.accounts.wheel.to_account_info();
    let mut data = wheel_info.try_borrow_mut_data()?;

    require!(
        stored_admin(&data) == Some(admin),
        WheelError::Unauthorized
    );

    let reseeded = match load_wheel(&data) {
        StoredWheel::Loaded(_) => {
            msg!("Wheel record decodes, nothing to recover");
            false
        }
        StoredWheel::Absent | StoredWheel::Malformed => {
            msg!("Wheel record unreadable, reseeding");
            let seeded = WheelState::new(admin, ctx.bumps.wheel, seed_participants());
            write_wheel(&seeded, &mut data)?;
            true
        }
    };

    emit!(StateRecovered {
        reseeded,
        wheel: wheel_info.key(),
    });
    Ok(())
}
