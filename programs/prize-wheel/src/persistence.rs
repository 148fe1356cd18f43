//! Persistence of the wheel record
//!
//! The wheel PDA is the only durable store. This module seeds it, snapshots
//! it, and reads or rewrites its raw bytes when the layout cannot be trusted.
use anchor_lang::prelude::*;

use crate::{
    constants::*,
    roster::next_id_after,
    states::{DrawSession, Participant, WheelSnapshot, WheelState},
};

/// What was found in a wheel account's data
#[derive(Debug, PartialEq, Eq)]
pub enum StoredWheel {
    /// Never written
    Absent,
    /// Bytes that do not decode as a wheel
    Malformed,
    Loaded(WheelState),
}

/// Roster used when no other list is available, one ticket each
pub fn seed_participants() -> Vec<Participant> {
    SEED_PARTICIPANTS
        .iter()
        .zip(1u32..)
        .map(|(name, id)| Participant {
            id,
            name: name.to_string(),
            tickets: DEFAULT_TICKETS,
        })
        .collect()
}

impl WheelState {
    pub fn new(admin: Pubkey, bump: u8, participants: Vec<Participant>) -> Self {
        Self {
            admin,
            bump,
            current_prize: DEFAULT_PRIZE.to_string(),
            draw_count: 0,
            next_participant_id: next_id_after(&participants),
            session: DrawSession::default(),
            participants,
            winners: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> WheelSnapshot {
        WheelSnapshot {
            participants: self.participants.clone(),
            winners: self.winners.clone(),
            current_prize: self.current_prize.clone(),
        }
    }

    /// Back to the seed roster with no winners and the default prize
    ///
    /// The id counter keeps its position.
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_idle()?;
        let next_participant_id = self.next_participant_id;
        *self = Self::new(self.admin, self.bump, seed_participants());
        self.next_participant_id = self.next_participant_id.max(next_participant_id);
        Ok(())
    }
}

/// Decode a wheel account's data without trusting it
pub fn load_wheel(data: &[u8]) -> StoredWheel {
    let discriminator = &data[..data.len().min(WheelState::DISCRIMINATOR.len())];
    if discriminator.iter().all(|b| *b == 0) {
        return StoredWheel::Absent;
    }

    match WheelState::try_deserialize(&mut &data[..]) {
        Ok(wheel) => StoredWheel::Loaded(wheel),
        Err(_) => StoredWheel::Malformed,
    }
}

/// Admin key at its fixed offset, readable even when the rest of the record
/// is damaged
pub fn stored_admin(data: &[u8]) -> Option<Pubkey> {
    let start = WheelState::DISCRIMINATOR.len();
    let bytes: [u8; 32] = data.get(start..start + 32)?.try_into().ok()?;
    Some(Pubkey::new_from_array(bytes))
}

/// Overwrite the account data with `wheel`, zeroing whatever was there
pub fn write_wheel(wheel: &WheelState, data: &mut [u8]) -> Result<()> {
    data.fill(0);
    let mut cursor: &mut [u8] = data;
    wheel.try_serialize(&mut cursor)
}
