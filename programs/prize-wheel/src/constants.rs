use anchor_lang::prelude::*;
/// Constants module for the Prize Wheel program
///
/// Contains all program-wide constants and configuration values.

/// Maximum number of participants a wheel can hold
#[constant]
pub const MAX_PARTICIPANTS: usize = 80;

/// Largest size the runtime lets the wheel account grow to (10 MiB); the
/// ledger is full once another record would not fit
pub const MAX_WHEEL_ACCOUNT_LEN: usize = 10 * 1024 * 1024;

/// Maximum length of a participant name, in bytes
#[constant]
pub const MAX_NAME_LEN: usize = 32;

/// Maximum length of a prize label, in bytes
#[constant]
pub const MAX_PRIZE_LEN: usize = 48;

/// Upper bound for a single participant's ticket count
#[constant]
pub const MAX_TICKETS_PER_PARTICIPANT: u32 = 1_000;

/// Tickets handed out when no explicit count is given
#[constant]
pub const DEFAULT_TICKETS: u32 = 1;

/// Prize label active on a fresh wheel
#[constant]
pub const DEFAULT_PRIZE: &str = "特獎（四）";

/// Slots the wheel spins before the result may be revealed
/// (~7.5s of animation at 400ms per slot)
#[constant]
pub const SPIN_PRESENTATION_SLOTS: u64 = 18;

/// Seeds for PDA derivation

/// Seed for the wheel state PDA
#[constant]
pub const PRIZE_WHEEL: &[u8] = b"prize_wheel";

/// Participants loaded when no roster is supplied at initialization
pub const SEED_PARTICIPANTS: [&str; 10] = [
    "Amy", "John", "Emily", "David", "Sarah", "Michael", "Lisa", "Kevin", "Jessica", "Chris",
];

/// Known prize labels and their English display names
pub const PRIZE_CATALOG: [(&str, &str); 10] = [
    ("首獎", "First Prize"),
    ("大獎", "Grand Prize"),
    ("二獎", "Second Prize"),
    ("三獎", "Third Prize"),
    ("四獎", "Fourth Prize"),
    ("五獎", "Fifth Prize"),
    ("特獎（一）", "Special Prize (1)"),
    ("特獎（二）", "Special Prize (2)"),
    ("特獎（三）", "Special Prize (3)"),
    ("特獎（四）", "Special Prize (4)"),
];
