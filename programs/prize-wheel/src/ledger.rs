//! Winner ledger
//!
//! Stored in insertion order. Display is latest-first, but every index taken
//! by these methods is a storage index. The ledger grows with the account;
//! it only fills up at the runtime's account size limit.
use anchor_lang::prelude::*;

use crate::{
    constants::MAX_WHEEL_ACCOUNT_LEN,
    errors::WheelError,
    states::{WheelState, WinnerRecord},
};

impl WheelState {
    pub(crate) fn record_winner(&mut self, record: WinnerRecord) -> Result<()> {
        require!(
            Self::space_for_winners(self.winners.len() + 1) <= MAX_WHEEL_ACCOUNT_LEN,
            WheelError::LedgerFull
        );
        self.winners.push(record);
        Ok(())
    }

    pub fn remove_winner(&mut self, index: u32) -> Result<WinnerRecord> {
        let index = index as usize;
        require!(index < self.winners.len(), WheelError::WinnerNotFound);
        Ok(self.winners.remove(index))
    }

    /// Drop every record, returning how many were removed
    pub fn clear_winners(&mut self) -> Result<u32> {
        require!(!self.winners.is_empty(), WheelError::NoWinnerRecords);
        let cleared = self.winners.len() as u32;
        self.winners.clear();
        Ok(cleared)
    }

    /// Records most recent first, each paired with its storage index
    pub fn winners_latest_first(&self) -> impl Iterator<Item = (usize, &WinnerRecord)> + '_ {
        self.winners.iter().enumerate().rev()
    }
}
