use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::errors::WheelError;

/// ========================================
/// Randomness Helper Functions
/// ========================================

/// Most recent hash recorded in the SlotHashes sysvar
///
/// Layout: u64 entry count, then (slot: u64, hash: [u8; 32]) pairs, newest
/// first.
pub fn recent_slot_hash(slot_hashes_data: &[u8]) -> Result<[u8; 32]> {
    let count_bytes: [u8; 8] = slot_hashes_data
        .get(..8)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(WheelError::InvalidSlotHashes)?;
    require!(
        u64::from_le_bytes(count_bytes) > 0,
        WheelError::InvalidSlotHashes
    );

    let hash: [u8; 32] = slot_hashes_data
        .get(16..48)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(WheelError::InvalidSlotHashes)?;
    Ok(hash)
}

/// Mix the recent slot hash with clock and wheel state into a draw seed
///
/// Not verifiable randomness: a leader could bias it. Good enough for a
/// party wheel, not for anything with money on it.
pub fn derive_entropy(
    slot_hash: &[u8; 32],
    slot: u64,
    unix_timestamp: i64,
    draw_count: u64,
) -> u64 {
    let digest = hashv(&[
        slot_hash.as_ref(),
        &slot.to_le_bytes(),
        &unix_timestamp.to_le_bytes(),
        &draw_count.to_le_bytes(),
    ])
    .to_bytes();

    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_hashes(entries: &[(u64, [u8; 32])]) -> Vec<u8> {
        let mut data = (entries.len() as u64).to_le_bytes().to_vec();
        for (slot, hash) in entries {
            data.extend_from_slice(&slot.to_le_bytes());
            data.extend_from_slice(hash);
        }
        data
    }

    #[test]
    fn reads_newest_entry() {
        let data = slot_hashes(&[(99, [7u8; 32]), (98, [3u8; 32])]);
        assert_eq!(recent_slot_hash(&data).unwrap(), [7u8; 32]);
    }

    #[test]
    fn rejects_empty_or_truncated_sysvar() {
        assert!(recent_slot_hash(&slot_hashes(&[])).is_err());
        assert!(recent_slot_hash(&[1, 0, 0, 0, 0, 0, 0, 0, 5]).is_err());
        assert!(recent_slot_hash(&[]).is_err());
    }

    #[test]
    fn entropy_changes_with_every_input() {
        let hash = [9u8; 32];
        let base = derive_entropy(&hash, 10, 1_700_000_000, 0);

        assert_eq!(base, derive_entropy(&hash, 10, 1_700_000_000, 0));
        assert_ne!(base, derive_entropy(&[8u8; 32], 10, 1_700_000_000, 0));
        assert_ne!(base, derive_entropy(&hash, 11, 1_700_000_000, 0));
        assert_ne!(base, derive_entropy(&hash, 10, 1_700_000_001, 0));
        assert_ne!(base, derive_entropy(&hash, 10, 1_700_000_000, 1));
    }
}
