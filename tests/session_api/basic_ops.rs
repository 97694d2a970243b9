//! Basic Operations Tests
//!
//! The request flows a single well-behaved client produces:
//! - read on page load (lazy creation)
//! - toggle / step / reset
//! - the recoverable error paths

use crate::*;

/// First read of an unseen session returns a blank grid
#[test]
fn test_read_grid_creates_blank_session() {
    let synth = create_synth();

    let snap = synth.read_grid(Some("session_a")).unwrap();
    assert_eq!(snap.step_counter, 0);
    assert_eq!(snap.grid.live_count(), 0);
    assert_eq!(snap.grid.size(), 16);
}

/// Reading twice observes the same session, not a fresh one
#[test]
fn test_read_grid_is_stable() {
    let synth = create_synth();

    synth
        .mutate(Some("session_a"), &MutateRequest::toggle(4, 4))
        .unwrap();
    let first = synth.read_grid(Some("session_a")).unwrap();
    let second = synth.read_grid(Some("session_a")).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.grid.get(4, 4), CellState::Alive);
}

/// Toggle flips a cell on and back off
#[test]
fn test_toggle_roundtrip() {
    let synth = create_synth();

    let on = synth
        .mutate(Some("s"), &MutateRequest::toggle(2, 3))
        .unwrap();
    assert_eq!(on.grid.get(2, 3), CellState::Alive);

    let off = synth
        .mutate(Some("s"), &MutateRequest::toggle(2, 3))
        .unwrap();
    assert_eq!(off.grid.get(2, 3), CellState::Dead);
    assert_eq!(off.grid.live_count(), 0);
}

/// Out-of-range toggle coordinates are absorbed as a no-op
#[test]
fn test_toggle_out_of_range_is_noop() {
    let synth = create_synth();

    let before = synth.read_grid(Some("s")).unwrap();
    let after = synth
        .mutate(Some("s"), &MutateRequest::toggle(99, 99))
        .unwrap();
    assert_eq!(after, before);
}

/// Step increments the counter; reset zeroes grid and counter
#[test]
fn test_step_and_reset() {
    let synth = create_synth();

    synth
        .mutate(Some("s"), &MutateRequest::toggle(8, 8))
        .unwrap();
    synth.mutate(Some("s"), &MutateRequest::step()).unwrap();
    let stepped = synth.mutate(Some("s"), &MutateRequest::step()).unwrap();
    assert_eq!(stepped.step_counter, 2);

    let reset = synth.mutate(Some("s"), &MutateRequest::reset()).unwrap();
    assert_eq!(reset.step_counter, 0);
    assert_eq!(reset.grid.live_count(), 0);
}

/// The blinker oscillates through the facade exactly as in the engine
#[test]
fn test_blinker_oscillates_end_to_end() {
    let synth = create_synth();
    seed_blinker(&synth, "s", 7, 7);

    let vertical = synth.mutate(Some("s"), &MutateRequest::step()).unwrap();
    assert_eq!(vertical.grid.get(6, 7), CellState::Born);
    assert_eq!(vertical.grid.get(7, 7), CellState::Alive);
    assert_eq!(vertical.grid.get(8, 7), CellState::Born);
    assert_eq!(vertical.grid.get(7, 6), CellState::Dying);
    assert_eq!(vertical.grid.get(7, 8), CellState::Dying);

    let horizontal = synth.mutate(Some("s"), &MutateRequest::step()).unwrap();
    assert_eq!(horizontal.grid.get(7, 6), CellState::Born);
    assert_eq!(horizontal.grid.get(7, 7), CellState::Alive);
    assert_eq!(horizontal.grid.get(7, 8), CellState::Born);
    assert_eq!(horizontal.step_counter, 2);
}

/// Unknown actions are rejected and leave stored state untouched
#[test]
fn test_invalid_action_leaves_state_unchanged() {
    let synth = create_synth();

    synth
        .mutate(Some("s"), &MutateRequest::toggle(1, 1))
        .unwrap();
    let before = synth.read_grid(Some("s")).unwrap();

    let bad = MutateRequest {
        action: "fly".to_string(),
        cell: None,
    };
    let err = synth.mutate(Some("s"), &bad).unwrap_err();
    assert_eq!(err, Error::InvalidAction("fly".to_string()));

    let after = synth.read_grid(Some("s")).unwrap();
    assert_eq!(after, before);
}

/// Per-session scope rejects requests without an identifier
#[test]
fn test_missing_session_id() {
    let synth = create_synth();

    assert_eq!(synth.read_grid(None).unwrap_err(), Error::MissingSessionId);
    assert_eq!(
        synth.mutate(None, &MutateRequest::step()).unwrap_err(),
        Error::MissingSessionId
    );
    assert!(synth.store().is_empty());
}
