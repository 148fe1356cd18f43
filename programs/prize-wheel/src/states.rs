/// States module for the Prize Wheel program
///
/// Contains all account structures and the records stored inside them.
use anchor_lang::prelude::*;

use crate::constants::*;

/// Main state account for a prize wheel
///
/// Holds the roster, the winner ledger, the active prize and the draw
/// session. Everything except `session` is the durable part of the wheel
/// (see [`WheelSnapshot`]).
///
/// The account starts with room for a full roster and an empty ledger, and
/// grows by one [`WinnerRecord`] slot on every confirmed draw
/// (see [`WheelState::space_for_winners`]).
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct WheelState {
    /// Public key of the operator who controls this wheel
    pub admin: Pubkey,
    /// PDA bump seed for this account
    pub bump: u8,
    /// Prize round that confirmed winners are recorded against
    pub current_prize: String,
    /// Total number of confirmed draws
    pub draw_count: u64,
    /// Id handed to the next added participant; never decreases
    pub next_participant_id: u32,
    /// Lifecycle of the draw currently on the wheel, if any
    pub session: DrawSession,
    /// Participants in roster order, at most [`MAX_PARTICIPANTS`]
    pub participants: Vec<Participant>,
    /// Confirmed wins in insertion order
    pub winners: Vec<WinnerRecord>,
}

impl WheelState {
    /// Account size (discriminator included) holding a full roster and
    /// `winners` ledger entries
    pub const fn space_for_winners(winners: usize) -> usize {
        8 + 32
            + 1
            + (4 + MAX_PRIZE_LEN)
            + 8
            + 4
            + DrawSession::INIT_SPACE
            + (4 + MAX_PARTICIPANTS * Participant::INIT_SPACE)
            + (4 + winners * WinnerRecord::INIT_SPACE)
    }
}

/// A person on the wheel and the number of tickets they hold
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Participant {
    /// Stable identifier, unique within the wheel
    pub id: u32,
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    /// Remaining draw tickets; zero keeps the participant listed but out of the pool
    pub tickets: u32,
}

/// A confirmed win
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct WinnerRecord {
    #[max_len(MAX_PRIZE_LEN)]
    pub prize: String,
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum DrawPhase {
    #[default]
    Idle,
    Spinning,
    AwaitingConfirmation,
}

/// Winner picked when the draw started, kept until confirm or reject
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct PendingWinner {
    pub participant_id: u32,
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    /// Position of the winning ticket in the weighted pool
    pub ticket_index: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct DrawSession {
    pub phase: DrawPhase,
    pub pending_winner: Option<PendingWinner>,
    /// Slot in which the wheel started spinning
    pub spin_slot: u64,
}

/// The durable part of a wheel, as exported to clients
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct WheelSnapshot {
    pub participants: Vec<Participant>,
    pub winners: Vec<WinnerRecord>,
    pub current_prize: String,
}
