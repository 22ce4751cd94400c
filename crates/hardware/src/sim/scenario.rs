//! Read/write scenarios run against a reset system.
//!
//! Every scenario interleaves a write with an immediate read-back of the same location and
//! stops at the first response error or data mismatch.

use tracing::info;

use crate::common::{AxiAddr, SimError, TransferSize};
use crate::sim::simulator::Simulator;

/// Number of locations each sequence visits.
pub const SEQUENCE_LEN: u32 = 10;

/// Writes a zero word at address 0 and reads it back.
///
/// # Errors
///
/// Returns the first transaction failure or [`SimError::DataMismatch`].
pub fn write_then_read_zero(sim: &mut Simulator) -> Result<(), SimError> {
    sim.write_dword(0, 0)?;
    let actual = sim.read_dword(0)?;
    check_value(AxiAddr::new(0), 0, actual)
}

/// Writes and reads back `n` at word address `4n` for `n` in `0..count`.
///
/// # Errors
///
/// Returns the first transaction failure or [`SimError::DataMismatch`].
pub fn dword_sequence(sim: &mut Simulator, count: u32) -> Result<(), SimError> {
    info!(count, "dword sequence");
    for n in 0..count {
        let addr = u64::from(n) * 4;
        sim.write_dword(addr, n)?;
        let actual = sim.read_dword(addr)?;
        check_value(AxiAddr::new(addr), n, actual)?;
    }
    Ok(())
}

/// Writes and reads back `n` at byte-region offset `n`.
///
/// # Errors
///
/// Returns [`SimError::NoRegion`] without a byte region, then the first transaction failure
/// or [`SimError::DataMismatch`].
pub fn byte_region_sequence(sim: &mut Simulator, count: u32) -> Result<(), SimError> {
    region_sequence(sim, TransferSize::Byte, count)
}

/// Writes and reads back `n` at halfword-region offset `2n`.
///
/// # Errors
///
/// Returns [`SimError::NoRegion`] without a halfword region, then the first transaction
/// failure or [`SimError::DataMismatch`].
pub fn halfword_region_sequence(sim: &mut Simulator, count: u32) -> Result<(), SimError> {
    region_sequence(sim, TransferSize::Halfword, count)
}

/// Writes and reads back `n` at word-region offset `4n`.
///
/// # Errors
///
/// Returns [`SimError::NoRegion`] without a word region, then the first transaction failure
/// or [`SimError::DataMismatch`].
pub fn dword_region_sequence(sim: &mut Simulator, count: u32) -> Result<(), SimError> {
    region_sequence(sim, TransferSize::Word, count)
}

/// Runs the scenario set that matches the bridge's size-selection setting.
///
/// Without size selection every access is a word access, so only the word sequence applies;
/// otherwise each size region the field can encode is exercised in turn.
///
/// # Errors
///
/// Returns the first failure of any scenario.
pub fn run_all(sim: &mut Simulator) -> Result<(), SimError> {
    write_then_read_zero(sim)?;
    if sim.system.bridge.config().size_sel_addr_bits == 0 {
        dword_sequence(sim, SEQUENCE_LEN)
    } else {
        for size in [TransferSize::Byte, TransferSize::Halfword, TransferSize::Word] {
            if sim.system.bridge.config().region_base(size).is_none() {
                info!(%size, "no region; skipped");
                continue;
            }
            region_sequence(sim, size, SEQUENCE_LEN)?;
        }
        Ok(())
    }
}

fn region_sequence(sim: &mut Simulator, size: TransferSize, count: u32) -> Result<(), SimError> {
    let base = sim
        .system
        .bridge
        .config()
        .region_base(size)
        .ok_or(SimError::NoRegion { size })?;
    info!(%size, %base, count, "region sequence");
    for n in 0..count {
        let addr = AxiAddr::new(base.val() + u64::from(n) * u64::from(size.bytes()));
        sim.write(addr, size, n)?;
        let actual = sim.read(addr, size)?;
        check_value(addr, n, actual)?;
    }
    Ok(())
}

const fn check_value(addr: AxiAddr, expected: u32, actual: u32) -> Result<(), SimError> {
    if actual == expected {
        Ok(())
    } else {
        Err(SimError::DataMismatch {
            addr,
            expected,
            actual,
        })
    }
}
