//! Scenario Matrix Tests.
//!
//! Runs the read/write scenarios over every combination of size selection,
//! idle insertion, backpressure, and slave wait states.

use axil2ahb_core::common::{AxiAddr, SimError, TransferSize};
use axil2ahb_core::sim::scenario::{self, SEQUENCE_LEN};
use rstest::rstest;

use crate::common::harness::{TestContext, config};

#[rstest]
fn read_write_matrix(
    #[values(0, 1, 2)] size_sel_addr_bits: u32,
    #[values(false, true)] idle: bool,
    #[values(false, true)] backpressure: bool,
    #[values(false, true)] slave_waits: bool,
) {
    let mut ctx =
        TestContext::with_config(&config(size_sel_addr_bits, idle, backpressure, slave_waits));
    scenario::run_all(&mut ctx.sim).unwrap();

    let stats = ctx.sim.stats();
    let regions = match size_sel_addr_bits {
        0 => 1,
        1 => 2,
        _ => 3,
    };
    let expected = 1 + regions * u64::from(SEQUENCE_LEN);
    assert_eq!(stats.writes, expected);
    assert_eq!(stats.reads, expected);
    assert_eq!(stats.resp_slverr, 0);
    assert_eq!(stats.aborted_by_reset, 0);
    // With size selection the zero word at address 0 lands in the byte region.
    let mismatches = u64::from(size_sel_addr_bits > 0);
    assert_eq!(stats.strobe_mismatches, mismatches);
    if slave_waits {
        assert!(stats.ahb_data_wait_cycles > 0);
    } else {
        assert_eq!(stats.ahb_data_wait_cycles, 0);
    }
    if backpressure {
        assert!(stats.resp_wait_cycles > 0);
    }
}

#[test]
fn write_then_read_zero() {
    let mut ctx = TestContext::new();
    scenario::write_then_read_zero(&mut ctx.sim).unwrap();
    assert_eq!(ctx.sim.stats().transactions(), 2);
}

#[test]
fn dword_sequence_without_size_selection() {
    let mut ctx = TestContext::with_config(&config(0, true, false, false));
    scenario::dword_sequence(&mut ctx.sim, SEQUENCE_LEN).unwrap();
    for n in 0..SEQUENCE_LEN {
        assert_eq!(ctx.sim.read_dword(u64::from(n) * 4).unwrap(), n);
    }
}

#[test]
fn byte_region_uses_byte_transfers() {
    let mut ctx = TestContext::with_config(&config(2, false, false, false));
    scenario::byte_region_sequence(&mut ctx.sim, SEQUENCE_LEN).unwrap();
    let stats = ctx.sim.stats();
    assert_eq!(stats.transfers_byte, 20);
    assert_eq!(stats.transfers_word, 0);
    // Bytes 0..9 hold 0..9, so the first word reads back 0x03020100.
    assert_eq!(ctx.sim.read_dword(2 << 32).unwrap(), 0x0302_0100);
}

#[test]
fn halfword_region_uses_halfword_transfers() {
    let mut ctx = TestContext::with_config(&config(2, false, true, true));
    scenario::halfword_region_sequence(&mut ctx.sim, SEQUENCE_LEN).unwrap();
    assert_eq!(ctx.sim.stats().transfers_halfword, 20);
    assert_eq!(ctx.sim.read_dword((2 << 32) + 4).unwrap(), 0x0003_0002);
}

#[test]
fn dword_region_uses_word_transfers() {
    let mut ctx = TestContext::with_config(&config(2, true, true, false));
    scenario::dword_region_sequence(&mut ctx.sim, SEQUENCE_LEN).unwrap();
    assert_eq!(ctx.sim.stats().transfers_word, 20);
}

#[test]
fn sequence_past_memory_end_reports_slave_error() {
    let mut cfg = config(0, false, false, false);
    cfg.memory.size_bytes = 16;
    let mut ctx = TestContext::with_config(&cfg);
    assert_eq!(
        scenario::dword_sequence(&mut ctx.sim, SEQUENCE_LEN),
        Err(SimError::SlaveError {
            addr: AxiAddr::new(16)
        })
    );
}

#[test]
fn one_bit_field_skips_the_word_region() {
    let mut ctx = TestContext::with_config(&config(1, false, false, false));
    scenario::run_all(&mut ctx.sim).unwrap();

    let stats = ctx.sim.stats();
    // The zero word at address 0 goes out as a byte, next to the byte region's 20.
    assert_eq!(stats.transfers_byte, 22);
    assert_eq!(stats.transfers_halfword, 20);
    assert_eq!(stats.transfers_word, 0);
    assert_eq!(stats.strobe_mismatches, 1);
}

#[test]
fn word_sequence_without_word_region_is_refused() {
    let mut ctx = TestContext::with_config(&config(1, false, false, false));
    assert_eq!(
        scenario::dword_region_sequence(&mut ctx.sim, SEQUENCE_LEN),
        Err(SimError::NoRegion {
            size: TransferSize::Word
        })
    );
    assert_eq!(ctx.sim.stats().transactions(), 0);

    // The would-be word base decodes as a byte access, so a full word does not survive.
    ctx.sim.write_dword(2 << 32, 0x1234_5678).unwrap();
    assert_eq!(ctx.sim.read_dword(2 << 32).unwrap(), 0x78);
}

#[test]
fn byte_sequence_without_size_selection_is_refused() {
    let mut ctx = TestContext::new();
    assert_eq!(
        scenario::byte_region_sequence(&mut ctx.sim, SEQUENCE_LEN),
        Err(SimError::NoRegion {
            size: TransferSize::Byte
        })
    );
}
