//! AHB-Lite signals.
//!
//! AHB-Lite is a two-phase protocol: the address phase (`HADDR`, `HTRANS`, `HWRITE`, `HSIZE`)
//! of a transfer is followed by its data phase (`HWDATA` or `HRDATA`). Either phase completes
//! on a rising edge where `HREADY` is high; the slave stretches the data phase with wait
//! states by holding `HREADY` low.

use crate::common::constants::{AXPROT_INSTRUCTION, AXPROT_PRIVILEGED, HPROT_DATA, HPROT_PRIVILEGED};
use crate::common::{AhbAddr, TransferSize};

/// Maps AXI `AxPROT` onto AHB `HPROT`.
///
/// Only the data/opcode and privileged bits carry over; the transfer is always reported as
/// non-bufferable and non-cacheable.
pub const fn hprot_from_axprot(axprot: u8) -> u8 {
    let mut hprot = 0;
    if axprot & AXPROT_INSTRUCTION == 0 {
        hprot |= HPROT_DATA;
    }
    if axprot & AXPROT_PRIVILEGED != 0 {
        hprot |= HPROT_PRIVILEGED;
    }
    hprot
}

/// Transfer type driven on `HTRANS`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HTrans {
    /// No transfer (`0b00`).
    #[default]
    Idle = 0b00,
    /// Burst in progress but no transfer this cycle (`0b01`).
    Busy = 0b01,
    /// First or single transfer (`0b10`).
    NonSeq = 0b10,
    /// Remaining transfers of a burst (`0b11`).
    Seq = 0b11,
}

impl HTrans {
    /// Returns `true` when this cycle carries an address phase the slave must accept.
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::NonSeq | Self::Seq)
    }
}

/// Burst type driven on `HBURST`. The bridge only issues single transfers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HBurst {
    /// Single transfer (`0b000`).
    #[default]
    Single = 0b000,
}

/// Transfer response driven on `HRESP`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HResp {
    /// Transfer completed successfully.
    #[default]
    Okay,
    /// Transfer failed; signalled over two cycles, first with `HREADY` low.
    Error,
}

/// Signals driven by the AHB-Lite master (the bridge's initiator).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AhbMasterSignals {
    /// Transfer address.
    pub haddr: AhbAddr,
    /// Transfer type.
    pub htrans: HTrans,
    /// Transfer direction, high for writes.
    pub hwrite: bool,
    /// Transfer size.
    pub hsize: TransferSize,
    /// Burst type.
    pub hburst: HBurst,
    /// Protection control.
    pub hprot: u8,
    /// Write data, valid during a write data phase.
    pub hwdata: u32,
}

/// Signals driven by the AHB-Lite slave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AhbSlaveSignals {
    /// High when the current data phase (if any) completes this cycle.
    pub hready: bool,
    /// Response of the current data phase.
    pub hresp: HResp,
    /// Read data, valid when `hready` is high in a read data phase.
    pub hrdata: u32,
}

impl Default for AhbSlaveSignals {
    /// An idle slave is ready with an `OKAY` response.
    fn default() -> Self {
        Self {
            hready: true,
            hresp: HResp::Okay,
            hrdata: 0,
        }
    }
}
