/// Events module for the Prize Wheel program
/// Contains all event structures that are emitted by the program instructions.
/// Clients re-render the wheel, roster and winner list from these.
use anchor_lang::prelude::*;

use crate::states::WheelSnapshot;

/// Emitted when a new wheel is initialized
#[event]
pub struct WheelInitialized {
    pub admin: Pubkey,
    pub participant_count: u32,
    pub total_tickets: u64,
    pub wheel: Pubkey,
}

/// Emitted when a participant is added to the roster
#[event]
pub struct ParticipantAdded {
    pub participant_id: u32,
    pub name: String,
    pub tickets: u32,
    pub wheel: Pubkey,
}

/// Emitted when a participant is removed from the roster
#[event]
pub struct ParticipantRemoved {
    pub participant_id: u32,
    pub name: String,
    pub wheel: Pubkey,
}

/// Emitted when a participant's ticket count changes
#[event]
pub struct TicketsAdjusted {
    pub participant_id: u32,
    pub delta: i32,
    pub tickets: u32,
    pub wheel: Pubkey,
}

/// Emitted when the roster is replaced by an import
#[event]
pub struct ParticipantsImported {
    pub participant_count: u32,
    pub wheel: Pubkey,
}

/// Emitted when the active prize round changes
#[event]
pub struct PrizeChanged {
    pub prize: String,
    pub display_name: String,
    pub wheel: Pubkey,
}

/// Emitted when the wheel starts spinning
///
/// `ticket_index` and `pool_size` let the client stop the animation on the
/// winning slice.
#[event]
pub struct DrawStarted {
    pub ticket_index: u64,
    pub pool_size: u64,
    pub spin_slot: u64,
    pub reveal_slot: u64,
    pub wheel: Pubkey,
}

/// Emitted when the spin ends and the winner is shown
#[event]
pub struct DrawRevealed {
    pub participant_id: u32,
    pub name: String,
    pub prize: String,
    pub wheel: Pubkey,
}

/// Emitted when a revealed winner is confirmed
#[event]
pub struct WinnerConfirmed {
    pub participant_id: u32,
    pub name: String,
    pub prize: String,
    pub display_name: String,
    pub tickets_left: Option<u32>,
    pub draw_count: u64,
    pub wheel: Pubkey,
}

/// Emitted when a revealed winner is forfeited
#[event]
pub struct DrawRejected {
    pub participant_id: u32,
    pub name: String,
    pub wheel: Pubkey,
}

/// Emitted when a single winner record is deleted
#[event]
pub struct WinnerRemoved {
    pub index: u32,
    pub name: String,
    pub prize: String,
    pub wheel: Pubkey,
}

/// Emitted when the winner ledger is emptied
#[event]
pub struct WinnersCleared {
    pub cleared: u32,
    pub wheel: Pubkey,
}

/// Emitted when the wheel is put back to its seed state
#[event]
pub struct WheelReset {
    pub admin: Pubkey,
    pub wheel: Pubkey,
}

/// Emitted on request with the full durable state
#[event]
pub struct StateExported {
    pub snapshot: WheelSnapshot,
    pub wheel: Pubkey,
}

/// Emitted by a recovery attempt; `reseeded` is true when the stored record
/// was unreadable and has been replaced by the seed state
#[event]
pub struct StateRecovered {
    pub reseeded: bool,
    pub wheel: Pubkey,
}
