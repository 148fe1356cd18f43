//! Participant store: roster mutations and participant import
use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::WheelError,
    states::{Participant, WheelState},
};

impl WheelState {
    pub fn participant(&self, id: u32) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Append a participant under the next unused id
    ///
    /// Ids come from a counter that only moves forward, so an id freed by a
    /// removal is never handed to somebody else.
    pub fn add_participant(&mut self, name: &str, tickets: u32) -> Result<Participant> {
        let name = validate_name(name)?;
        require!(
            tickets <= MAX_TICKETS_PER_PARTICIPANT,
            WheelError::TicketLimitExceeded
        );
        require!(
            self.participants.len() < MAX_PARTICIPANTS,
            WheelError::RosterFull
        );

        let participant = Participant {
            id: self.next_participant_id,
            name: name.to_string(),
            tickets,
        };
        self.next_participant_id = self.next_participant_id.saturating_add(1);
        self.participants.push(participant.clone());
        Ok(participant)
    }

    pub fn remove_participant(&mut self, id: u32) -> Result<Participant> {
        let index = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or(WheelError::ParticipantNotFound)?;

        Ok(self.participants.remove(index))
    }

    /// Apply `delta` to a participant's tickets and return the new count
    ///
    /// Refused while a draw is on the wheel, and when the result would drop
    /// below zero or above [`MAX_TICKETS_PER_PARTICIPANT`].
    pub fn adjust_tickets(&mut self, id: u32, delta: i32) -> Result<u32> {
        self.ensure_idle()?;

        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(WheelError::ParticipantNotFound)?;

        let updated = i64::from(participant.tickets) + i64::from(delta);
        require!(updated >= 0, WheelError::NegativeTickets);
        require!(
            updated <= i64::from(MAX_TICKETS_PER_PARTICIPANT),
            WheelError::TicketLimitExceeded
        );

        participant.tickets = updated as u32;
        Ok(participant.tickets)
    }

    /// Swap the whole roster for an imported one. Winner records are kept.
    pub fn replace_participants(&mut self, participants: Vec<Participant>) -> Result<()> {
        self.ensure_idle()?;
        require!(!participants.is_empty(), WheelError::EmptyImport);
        require!(
            participants.len() <= MAX_PARTICIPANTS,
            WheelError::RosterFull
        );

        self.next_participant_id = self
            .next_participant_id
            .max(next_id_after(&participants));
        self.participants = participants;
        Ok(())
    }
}

/// Smallest id above every id in `participants`, starting at 1
pub(crate) fn next_id_after(participants: &[Participant]) -> u32 {
    participants
        .iter()
        .map(|p| p.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Trim a participant name and check it fits the account layout
pub fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    require!(!name.is_empty(), WheelError::EmptyName);
    require!(name.len() <= MAX_NAME_LEN, WheelError::NameTooLong);
    Ok(name)
}

/// Parse a one-column participant list
///
/// The first line is a header. Blank lines are skipped; every other line
/// becomes a participant holding [`DEFAULT_TICKETS`], identified by its line
/// number.
pub fn parse_roster(text: &str) -> Result<Vec<Participant>> {
    let mut participants = Vec::new();

    for (line_number, line) in text.split('\n').enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        require!(
            participants.len() < MAX_PARTICIPANTS,
            WheelError::RosterFull
        );

        participants.push(Participant {
            id: line_number as u32,
            name: validate_name(line)?.to_string(),
            tickets: DEFAULT_TICKETS,
        });
    }

    require!(!participants.is_empty(), WheelError::EmptyImport);
    Ok(participants)
}
