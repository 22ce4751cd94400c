//! Bridge Reset Tests.
//!
//! Reset is asserted immediately from any state and released at the next edge.
//! An interrupted transaction never produces a response.

use axil2ahb_core::bridge::BridgeState;
use axil2ahb_core::bus::{AhbMasterSignals, AxiLiteSlaveSignals, HTrans};
use rstest::rstest;

use crate::common::harness::{BridgeBench, idle_master, read_master, slave_ready, write_master};

/// Brings a fresh bench to `state` with a write in flight.
fn bench_in(state: BridgeState) -> BridgeBench {
    let mut b = BridgeBench::new(0);
    let _ = b.step(&write_master(0x8, 3, 0xF), &slave_ready(0));
    while b.bridge.state() != state {
        let _ = b.step(&idle_master(), &slave_ready(0));
    }
    b
}

#[rstest]
#[case(BridgeState::AddrPhase)]
#[case(BridgeState::DataPhase)]
#[case(BridgeState::Respond)]
fn reset_returns_to_idle_and_silences_outputs(#[case] state: BridgeState) {
    let mut b = bench_in(state);
    b.bridge.assert_reset();

    assert_eq!(b.bridge.state(), BridgeState::Idle);
    assert!(b.bridge.in_reset());
    assert!(!b.bridge.is_idle());
    assert!(b.bridge.current_request().is_none());
    assert!(b.bridge.current_transfer().is_none());
    assert_eq!(b.bridge.axi_outputs(&write_master(0, 0, 0xF)), AxiLiteSlaveSignals::default());
    assert_eq!(b.bridge.ahb_outputs(), AhbMasterSignals::default());
    assert_eq!(b.bridge.stats.aborted_by_reset, 1);
}

#[test]
fn held_reset_ignores_requests() {
    let mut b = BridgeBench::new(0);
    b.bridge.assert_reset();
    for _ in 0..10 {
        let out = b.step(&write_master(0, 1, 0xF), &slave_ready(0));
        assert!(!out.axi.any_ready());
        assert_eq!(b.bridge.state(), BridgeState::Idle);
    }
    assert_eq!(b.bridge.stats.cycles, 0);
}

#[test]
fn release_takes_effect_at_next_edge() {
    let mut b = BridgeBench::new(0);
    b.bridge.assert_reset();
    b.bridge.release_reset();
    assert!(b.bridge.in_reset());

    // The releasing edge itself accepts nothing.
    let out = b.step(&read_master(0), &slave_ready(0));
    assert!(!out.axi.arready);
    assert!(!b.bridge.in_reset());
    assert!(b.bridge.is_idle());

    let out = b.step(&read_master(0), &slave_ready(0));
    assert!(out.axi.arready);
    assert_eq!(b.bridge.state(), BridgeState::AddrPhase);
}

#[test]
fn interrupted_transaction_never_responds() {
    let mut b = bench_in(BridgeState::DataPhase);
    b.bridge.assert_reset();
    b.bridge.release_reset();
    for _ in 0..8 {
        let out = b.step(&idle_master(), &slave_ready(0));
        assert!(!out.axi.bvalid && !out.axi.rvalid);
        assert_eq!(out.ahb.htrans, HTrans::Idle);
    }
    assert_eq!(b.bridge.stats.writes, 0);
}

#[test]
fn reset_discards_half_received_write() {
    let mut b = BridgeBench::new(0);
    let mut aw_only = write_master(0x4, 0, 0);
    aw_only.wvalid = false;
    let _ = b.step(&aw_only, &slave_ready(0));
    b.bridge.assert_reset();
    b.bridge.release_reset();
    let _ = b.step(&idle_master(), &slave_ready(0));

    // A lone W after reset must not pair with the discarded AW.
    let mut w_only = write_master(0, 0x99, 0xF);
    w_only.awvalid = false;
    let _ = b.step(&w_only, &slave_ready(0));
    assert_eq!(b.bridge.state(), BridgeState::Idle);
    assert_eq!(b.bridge.stats.aborted_by_reset, 0);
}

#[test]
fn bridge_works_after_reset() {
    let mut b = bench_in(BridgeState::Respond);
    b.bridge.assert_reset();
    b.bridge.release_reset();
    let _ = b.step(&idle_master(), &slave_ready(0));

    let _ = b.step(&read_master(0x8), &slave_ready(0));
    let _ = b.step(&idle_master(), &slave_ready(0));
    let _ = b.step(&idle_master(), &slave_ready(3));
    let out = b.step(&idle_master(), &slave_ready(0));
    assert!(out.axi.rvalid);
    assert_eq!(out.axi.rdata, 3);
}
