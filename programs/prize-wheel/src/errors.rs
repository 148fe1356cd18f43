/// Error definitions for the Prize Wheel program
///
/// Contains all custom error types that can be returned by the program instructions.
use anchor_lang::prelude::*;

/// Custom error codes for the prize wheel program
#[error_code]
pub enum WheelError {
    #[msg("A draw is already in progress.")]
    DrawInProgress,
    #[msg("All tickets are exhausted.")]
    TicketsExhausted,
    #[msg("There is no draw awaiting confirmation.")]
    NoPendingDraw,
    #[msg("The wheel is still spinning. Wait for the presentation delay to pass.")]
    SpinInProgress,
    #[msg("Ticket count cannot be negative.")]
    NegativeTickets,
    #[msg("Ticket count exceeds the per-participant limit.")]
    TicketLimitExceeded,
    #[msg("Participant not found.")]
    ParticipantNotFound,
    #[msg("Winner record not found.")]
    WinnerNotFound,
    #[msg("There are no winner records to clear.")]
    NoWinnerRecords,
    #[msg("Participant name cannot be empty.")]
    EmptyName,
    #[msg("Participant name is too long.")]
    NameTooLong,
    #[msg("Prize label cannot be empty.")]
    EmptyPrize,
    #[msg("Prize label is too long.")]
    PrizeTooLong,
    #[msg("The participant roster has reached its maximum capacity.")]
    RosterFull,
    #[msg("The winner ledger has reached its maximum capacity.")]
    LedgerFull,
    #[msg("The import did not contain any participants.")]
    EmptyImport,
    #[msg("The weighted pool is empty.")]
    EmptyPool,
    #[msg("The selected ticket index was out of bounds. This should not happen.")]
    PoolIndexOutOfBounds,
    #[msg("The slot hashes sysvar could not be read.")]
    InvalidSlotHashes,
    #[msg("The signer is not the admin of this wheel.")]
    Unauthorized,
}
