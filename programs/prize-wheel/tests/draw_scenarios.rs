use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use prize_wheel::{
    constants::SPIN_PRESENTATION_SLOTS,
    engine::{build_weighted_pool, total_tickets},
    errors::WheelError,
    states::{DrawPhase, Participant, WheelState, WinnerRecord},
};

fn wheel(participants: &[(u32, &str, u32)]) -> WheelState {
    let roster = participants
        .iter()
        .map(|&(id, name, tickets)| Participant {
            id,
            name: name.to_string(),
            tickets,
        })
        .collect();
    WheelState::new(Pubkey::new_unique(), 253, roster)
}

/// Spin, wait out the presentation delay and reveal
fn spin_and_reveal(wheel: &mut WheelState, entropy: u64, slot: u64) -> String {
    let name = wheel.start_draw(entropy, slot).unwrap().name.clone();
    wheel.reveal_draw(slot + SPIN_PRESENTATION_SLOTS).unwrap();
    name
}

fn durable_bytes(wheel: &WheelState) -> Vec<u8> {
    let mut bytes = Vec::new();
    wheel.snapshot().serialize(&mut bytes).unwrap();
    bytes
}

#[test]
fn two_to_one_wheel_confirms_a_win_for_a() {
    let mut wheel = wheel(&[(1, "A", 2), (2, "B", 1)]);
    wheel.set_prize("X").unwrap();

    assert_eq!(total_tickets(&wheel.participants), 3);
    let pool: Vec<&str> = build_weighted_pool(&wheel.participants).names().collect();
    assert_eq!(pool, ["A", "A", "B"]);

    // Entropy 4 lands on pool index 1, an A ticket.
    assert_eq!(spin_and_reveal(&mut wheel, 4, 10), "A");
    let confirmed = wheel.confirm_draw().unwrap();

    assert_eq!(confirmed.tickets_left, Some(1));
    assert_eq!(wheel.participant(1).unwrap().tickets, 1);
    assert_eq!(wheel.participant(2).unwrap().tickets, 1);
    assert_eq!(
        wheel.winners,
        [WinnerRecord {
            prize: "X".to_string(),
            name: "A".to_string(),
        }]
    );
    assert_eq!(wheel.session.phase, DrawPhase::Idle);
}

#[test]
fn exhausted_wheel_refuses_to_spin() {
    let mut wheel = wheel(&[(1, "A", 0), (2, "B", 0)]);

    assert_eq!(
        wheel.start_draw(123, 1).unwrap_err(),
        Error::from(WheelError::TicketsExhausted)
    );
    assert_eq!(wheel.session.phase, DrawPhase::Idle);
    assert_eq!(wheel.session.pending_winner, None);
}

#[test]
fn rejecting_leaves_durable_state_identical() {
    let mut wheel = wheel(&[(1, "A", 2), (2, "B", 1), (3, "C", 0)]);
    wheel.set_prize("首獎").unwrap();
    let before = durable_bytes(&wheel);

    spin_and_reveal(&mut wheel, 2, 40);
    let rejected = wheel.reject_draw().unwrap();

    assert_eq!(rejected.name, "B");
    assert_eq!(durable_bytes(&wheel), before);
    assert_eq!(wheel.session.phase, DrawPhase::Idle);
    assert_eq!(wheel.draw_count, 0);
}

#[test]
fn confirm_moves_exactly_one_ticket_and_one_record() {
    let mut wheel = wheel(&[(1, "A", 3), (2, "B", 2), (3, "C", 1)]);

    for (round, entropy) in [0u64, 3, 5, 1, 4].into_iter().enumerate() {
        let tickets_before = total_tickets(&wheel.participants);
        let winners_before = wheel.winners.len();
        let roster_before = wheel.participants.clone();

        spin_and_reveal(&mut wheel, entropy, round as u64 * 100);
        let confirmed = wheel.confirm_draw().unwrap();

        assert_eq!(total_tickets(&wheel.participants), tickets_before - 1);
        assert_eq!(wheel.winners.len(), winners_before + 1);
        let changed: Vec<(u32, u32)> = roster_before
            .iter()
            .zip(&wheel.participants)
            .filter(|(old, new)| old.tickets != new.tickets)
            .map(|(old, new)| (old.tickets, new.tickets))
            .collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].0 - 1, changed[0].1);
        assert_eq!(
            wheel.participant(confirmed.participant_id).unwrap().tickets,
            changed[0].1
        );
    }
}

#[test]
fn single_ticket_winner_drops_out_of_the_next_pool() {
    let mut wheel = wheel(&[(1, "Solo", 1), (2, "Pair", 2)]);

    assert_eq!(spin_and_reveal(&mut wheel, 0, 0), "Solo");
    wheel.confirm_draw().unwrap();

    let pool: Vec<&str> = build_weighted_pool(&wheel.participants).names().collect();
    assert_eq!(pool, ["Pair", "Pair"]);
    for entropy in 0..10 {
        let mut next = wheel.clone();
        assert_eq!(spin_and_reveal(&mut next, entropy, 500), "Pair");
    }
    // Still listed with zero tickets.
    assert_eq!(wheel.participant(1).unwrap().tickets, 0);
}

#[test]
fn ticket_adjustment_waits_for_the_draw_to_finish() {
    let mut wheel = wheel(&[(1, "A", 0), (2, "B", 1)]);

    assert_eq!(
        wheel.adjust_tickets(1, -1).unwrap_err(),
        Error::from(WheelError::NegativeTickets)
    );

    spin_and_reveal(&mut wheel, 0, 0);
    assert_eq!(
        wheel.adjust_tickets(1, 1).unwrap_err(),
        Error::from(WheelError::DrawInProgress)
    );

    wheel.confirm_draw().unwrap();
    assert_eq!(wheel.adjust_tickets(1, 1).unwrap(), 1);
}

#[test]
fn prize_recorded_is_the_one_active_at_confirmation() {
    let mut wheel = wheel(&[(1, "A", 5)]);

    wheel.set_prize("五獎").unwrap();
    spin_and_reveal(&mut wheel, 0, 0);
    wheel.confirm_draw().unwrap();

    wheel.set_prize("四獎").unwrap();
    spin_and_reveal(&mut wheel, 0, 100);
    wheel.confirm_draw().unwrap();

    let prizes: Vec<&str> = wheel
        .winners_latest_first()
        .map(|(_, record)| record.prize.as_str())
        .collect();
    assert_eq!(prizes, ["四獎", "五獎"]);
}

#[test]
fn roster_churn_during_a_draw_only_charges_the_winner() {
    let mut wheel = wheel(&[(1, "Amy", 0), (2, "John", 1), (3, "Emily", 2)]);
    assert_eq!(spin_and_reveal(&mut wheel, 0, 0), "John");

    // John leaves and two people join before the operator confirms.
    wheel.remove_participant(2).unwrap();
    let eve = wheel.add_participant("Eve", 3).unwrap();
    let zoe = wheel.add_participant("Zoe", 1).unwrap();
    let tickets_before = total_tickets(&wheel.participants);

    let confirmed = wheel.confirm_draw().unwrap();

    assert_eq!((eve.id, zoe.id), (4, 5));
    assert_eq!(confirmed.participant_id, 2);
    assert_eq!(confirmed.tickets_left, None);
    assert_eq!(total_tickets(&wheel.participants), tickets_before);
    assert_eq!(wheel.winners.last().unwrap().name, "John");
    assert_eq!(wheel.session.phase, DrawPhase::Idle);
}

#[test]
fn import_and_reset_wait_for_the_draw_to_finish() {
    let mut wheel = wheel(&[(1, "A", 2), (2, "B", 1)]);

    wheel.start_draw(0, 0).unwrap();
    let imported = prize_wheel::roster::parse_roster("name\nC\n").unwrap();
    assert_eq!(
        wheel.replace_participants(imported.clone()).unwrap_err(),
        Error::from(WheelError::DrawInProgress)
    );

    wheel.reveal_draw(SPIN_PRESENTATION_SLOTS).unwrap();
    assert_eq!(wheel.reset().unwrap_err(), Error::from(WheelError::DrawInProgress));
    assert_eq!(wheel.participants.len(), 2);

    wheel.reject_draw().unwrap();
    wheel.replace_participants(imported).unwrap();
    assert_eq!(wheel.participants[0].name, "C");
}
