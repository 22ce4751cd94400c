//! Pause Generator Tests.

use axil2ahb_core::common::CYCLE_PAUSE;
use axil2ahb_core::sim::PauseGenerator;

#[test]
fn cycle_pause_sequence() {
    let g = PauseGenerator::cycle_pause();
    let seq: Vec<bool> = g.take(22).collect();
    let expected: Vec<bool> = CYCLE_PAUSE.iter().chain(CYCLE_PAUSE.iter()).map(|&p| p == 1).collect();
    assert_eq!(seq, expected);
}

#[test]
fn from_pattern_none_never_pauses() {
    let mut g = PauseGenerator::from_pattern(None);
    assert!(!g.is_active());
    assert!((0..100).all(|_| !g.next_pause()));
}

#[test]
fn all_zero_pattern_is_inactive() {
    let g = PauseGenerator::cyclic(&[0, 0, 0]);
    assert!(!g.is_active());
}

#[test]
fn rewind_restarts_pattern() {
    let mut g = PauseGenerator::cyclic(&[1, 0, 0]);
    assert!(g.next_pause());
    assert!(!g.next_pause());
    g.rewind();
    assert!(g.next_pause());
}

#[test]
fn generators_are_independent() {
    let mut a = PauseGenerator::cycle_pause();
    let mut b = PauseGenerator::cycle_pause();
    for _ in 0..3 {
        let _ = a.next_pause();
    }
    assert!(b.next_pause(), "b starts at the head of the pattern");
    assert!(!a.next_pause(), "a is at index 3");
}
