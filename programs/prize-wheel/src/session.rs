//! Draw session state machine
//!
//! Idle -> Spinning -> AwaitingConfirmation -> Idle. The winner is fixed when
//! the spin starts; the slots spent spinning are presentation only.
use anchor_lang::prelude::*;

use crate::{
    constants::*,
    engine::{build_weighted_pool, draw_winner, total_tickets},
    errors::WheelError,
    states::{DrawPhase, DrawSession, PendingWinner, WheelState, WinnerRecord},
};

/// Outcome of a confirmed draw
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmedDraw {
    pub record: WinnerRecord,
    pub participant_id: u32,
    /// Tickets left after the deduction, `None` when nothing was deducted
    /// because the winner left the roster or holds no ticket any more
    pub tickets_left: Option<u32>,
}

impl DrawSession {
    pub fn is_idle(&self) -> bool {
        self.phase == DrawPhase::Idle
    }

    /// Slot from which the result may be revealed
    pub fn reveal_slot(&self) -> u64 {
        self.spin_slot.saturating_add(SPIN_PRESENTATION_SLOTS)
    }
}

impl WheelState {
    pub fn ensure_idle(&self) -> Result<()> {
        require!(self.session.is_idle(), WheelError::DrawInProgress);
        Ok(())
    }

    /// Pick the winner and start spinning
    pub fn start_draw(&mut self, entropy: u64, slot: u64) -> Result<&PendingWinner> {
        self.ensure_idle()?;
        require!(
            total_tickets(&self.participants) > 0,
            WheelError::TicketsExhausted
        );

        let pool = build_weighted_pool(&self.participants);
        let drawn = draw_winner(&pool, entropy)?;
        let pending = PendingWinner {
            participant_id: drawn.participant.id,
            name: drawn.participant.name.clone(),
            ticket_index: drawn.index,
        };

        self.session.phase = DrawPhase::Spinning;
        self.session.spin_slot = slot;
        Ok(&*self.session.pending_winner.insert(pending))
    }

    /// Stop the wheel once the presentation delay has elapsed
    pub fn reveal_draw(&mut self, slot: u64) -> Result<&PendingWinner> {
        match self.session.phase {
            DrawPhase::Spinning => {}
            DrawPhase::AwaitingConfirmation | DrawPhase::Idle => {
                return err!(WheelError::NoPendingDraw)
            }
        }
        require!(
            slot >= self.session.reveal_slot(),
            WheelError::SpinInProgress
        );

        self.session.phase = DrawPhase::AwaitingConfirmation;
        self.session
            .pending_winner
            .as_ref()
            .ok_or_else(|| error!(WheelError::NoPendingDraw))
    }

    /// Commit the revealed winner: one ticket off, one ledger entry on
    pub fn confirm_draw(&mut self) -> Result<ConfirmedDraw> {
        let pending = self.revealed_winner()?.clone();
        let record = WinnerRecord {
            prize: self.current_prize.clone(),
            name: pending.name,
        };
        self.record_winner(record.clone())?;

        // The roster may have changed since the spin; only deduct a ticket
        // that is still there.
        let tickets_left = self
            .participants
            .iter_mut()
            .find(|p| p.id == pending.participant_id && p.tickets > 0)
            .map(|winner| {
                winner.tickets -= 1;
                winner.tickets
            });

        self.draw_count = self.draw_count.saturating_add(1);
        self.session = DrawSession::default();

        Ok(ConfirmedDraw {
            record,
            participant_id: pending.participant_id,
            tickets_left,
        })
    }

    /// Discard the revealed winner without touching roster or ledger
    pub fn reject_draw(&mut self) -> Result<PendingWinner> {
        let pending = self.revealed_winner()?.clone();
        self.session = DrawSession::default();
        Ok(pending)
    }

    /// Change the active prize round; locked while a draw is on the wheel
    pub fn set_prize(&mut self, prize: &str) -> Result<()> {
        self.ensure_idle()?;
        self.current_prize = validate_prize(prize)?.to_string();
        Ok(())
    }

    fn revealed_winner(&self) -> Result<&PendingWinner> {
        require!(
            self.session.phase == DrawPhase::AwaitingConfirmation,
            WheelError::NoPendingDraw
        );
        self.session
            .pending_winner
            .as_ref()
            .ok_or_else(|| error!(WheelError::NoPendingDraw))
    }
}

pub fn validate_prize(prize: &str) -> Result<&str> {
    let prize = prize.trim();
    require!(!prize.is_empty(), WheelError::EmptyPrize);
    require!(prize.len() <= MAX_PRIZE_LEN, WheelError::PrizeTooLong);
    Ok(prize)
}

/// Label shown to the audience: the catalog's English name appended when known
pub fn prize_display_name(prize: &str) -> String {
    match PRIZE_CATALOG.iter().find(|(label, _)| *label == prize) {
        Some((label, english)) => format!("{label} {english}"),
        None => prize.to_string(),
    }
}
