//! Session Isolation Tests
//!
//! Operations on one session must never change the grid or counter stored
//! under any other session.

use crate::*;

/// Mutating A leaves B exactly as it was
#[test]
fn test_mutations_do_not_leak_across_sessions() {
    let synth = create_synth();

    synth
        .mutate(Some("b"), &MutateRequest::toggle(3, 3))
        .unwrap();
    let b_before = synth.read_grid(Some("b")).unwrap();

    // A busy life in session A
    seed_blinker(&synth, "a", 7, 7);
    for _ in 0..5 {
        synth.mutate(Some("a"), &MutateRequest::step()).unwrap();
    }
    synth.mutate(Some("a"), &MutateRequest::reset()).unwrap();

    let b_after = synth.read_grid(Some("b")).unwrap();
    assert_eq!(b_after, b_before);
}

/// Step counters are per-session, not shared
#[test]
fn test_step_counter_is_per_session() {
    let synth = create_synth();

    for _ in 0..4 {
        synth.mutate(Some("a"), &MutateRequest::step()).unwrap();
    }
    synth.mutate(Some("b"), &MutateRequest::step()).unwrap();

    assert_eq!(synth.read_grid(Some("a")).unwrap().step_counter, 4);
    assert_eq!(synth.read_grid(Some("b")).unwrap().step_counter, 1);
}

/// Resetting one session does not reset another
#[test]
fn test_reset_is_scoped() {
    let synth = create_synth();

    synth
        .mutate(Some("a"), &MutateRequest::toggle(0, 0))
        .unwrap();
    synth
        .mutate(Some("b"), &MutateRequest::toggle(0, 0))
        .unwrap();

    synth.mutate(Some("a"), &MutateRequest::reset()).unwrap();

    assert_eq!(synth.read_grid(Some("a")).unwrap().grid.live_count(), 0);
    assert_eq!(
        synth.read_grid(Some("b")).unwrap().grid.get(0, 0),
        CellState::Alive
    );
}

/// Snapshots are owned copies, not views into live state
#[test]
fn test_snapshots_are_detached() {
    let synth = create_synth();

    synth
        .mutate(Some("a"), &MutateRequest::toggle(5, 5))
        .unwrap();
    let snapshot = synth.read_grid(Some("a")).unwrap();

    synth.mutate(Some("a"), &MutateRequest::reset()).unwrap();

    // The snapshot still shows the pre-reset state
    assert_eq!(snapshot.grid.get(5, 5), CellState::Alive);
}
