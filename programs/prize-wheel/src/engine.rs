//! Weighted draw engine
//!
//! Every ticket is one entry in the pool, so sampling an entry uniformly gives
//! each participant a chance proportional to their ticket count.
use anchor_lang::prelude::*;

use crate::{errors::WheelError, states::Participant};

/// Sum of all tickets on the wheel
pub fn total_tickets(participants: &[Participant]) -> u64 {
    participants.iter().map(|p| u64::from(p.tickets)).sum()
}

/// The flattened ticket sequence: each participant repeated `tickets` times,
/// in roster order.
///
/// Entries are resolved on demand instead of being copied into a vector, so a
/// pool with thousands of tickets costs no heap.
#[derive(Clone, Copy, Debug)]
pub struct WeightedPool<'a> {
    participants: &'a [Participant],
    len: u64,
}

pub fn build_weighted_pool(participants: &[Participant]) -> WeightedPool<'_> {
    WeightedPool {
        participants,
        len: total_tickets(participants),
    }
}

impl<'a> WeightedPool<'a> {
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Participant holding the ticket at `index`
    pub fn get(&self, index: u64) -> Option<&'a Participant> {
        if index >= self.len {
            return None;
        }
        let mut remaining = index;
        for participant in self.participants {
            let tickets = u64::from(participant.tickets);
            if remaining < tickets {
                return Some(participant);
            }
            remaining -= tickets;
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Participant> + 'a {
        self.participants
            .iter()
            .flat_map(|p| std::iter::repeat(p).take(p.tickets as usize))
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().map(|p| p.name.as_str())
    }
}

/// Ticket chosen by a draw
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawnTicket<'a> {
    pub index: u64,
    pub participant: &'a Participant,
}

/// Pick one ticket uniformly from the pool
///
/// `entropy` is reduced modulo the pool size; callers gate on
/// [`total_tickets`] first, an empty pool is still reported as an error.
pub fn draw_winner<'a>(pool: &WeightedPool<'a>, entropy: u64) -> Result<DrawnTicket<'a>> {
    require!(!pool.is_empty(), WheelError::EmptyPool);

    let index = entropy % pool.len();
    let participant = pool.get(index).ok_or(WheelError::PoolIndexOutOfBounds)?;

    Ok(DrawnTicket { index, participant })
}
