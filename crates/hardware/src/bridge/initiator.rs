//! AHB-Lite Initiator.
//!
//! Drives one transfer at a time through the two AHB-Lite phases:
//! 1. **Address phase:** `HTRANS=NONSEQ` with address and control, held until `HREADY`.
//! 2. **Data phase:** `HTRANS=IDLE`, write data held (or read data awaited) until `HREADY`.
//!
//! The address phase of the next transfer is never overlapped with the data phase of the
//! current one. Wait states are followed for as long as the slave inserts them.

use tracing::{trace, warn};

use crate::bus::{AhbMasterSignals, AhbSlaveSignals, HBurst, HResp, HTrans};
use crate::common::{AhbAddr, Direction, TransferSize};

/// A single AHB-Lite transfer owned by the initiator for its two phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AhbTransfer {
    /// Address driven on `HADDR`.
    pub haddr: AhbAddr,
    /// Size driven on `HSIZE`.
    pub size: TransferSize,
    /// Direction driven on `HWRITE`.
    pub direction: Direction,
    /// Write data driven on `HWDATA` during the data phase.
    pub data: u32,
    /// Protection control driven on `HPROT`.
    pub prot: u8,
}

/// Result of a completed data phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AhbResponse {
    /// Slave response, reported unmodified.
    pub status: HResp,
    /// Read data; zero for writes.
    pub data: u32,
}

/// Phase of the transfer the initiator is driving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitiatorPhase {
    /// No transfer in progress.
    #[default]
    Idle,
    /// Address and control driven, waiting for `HREADY`.
    Address,
    /// Data driven or awaited, waiting for `HREADY`.
    Data,
}

/// What happened to the current transfer at a clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitiatorEvent {
    /// Nothing in progress.
    Idle,
    /// The current phase was extended by a wait state.
    Wait,
    /// The address phase completed; the data phase starts next cycle.
    AddressAccepted,
    /// The data phase completed.
    Complete(AhbResponse),
}

/// AHB-Lite master-side state.
#[derive(Debug, Default)]
pub struct AhbLiteInitiator {
    transfer: Option<AhbTransfer>,
    phase: InitiatorPhase,
}

impl AhbLiteInitiator {
    /// Creates an idle initiator.
    pub const fn new() -> Self {
        Self {
            transfer: None,
            phase: InitiatorPhase::Idle,
        }
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> InitiatorPhase {
        self.phase
    }

    /// Returns the transfer in progress.
    pub const fn transfer(&self) -> Option<&AhbTransfer> {
        self.transfer.as_ref()
    }

    /// Returns `true` when a new transfer may be started.
    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, InitiatorPhase::Idle)
    }

    /// Begins the address phase of `transfer` on the next cycle.
    ///
    /// Returns `false` and leaves the current transfer untouched if one is still in progress.
    pub fn start(&mut self, transfer: AhbTransfer) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.transfer = Some(transfer);
        self.phase = InitiatorPhase::Address;
        true
    }

    /// Computes the master-side AHB signals for this cycle.
    pub fn outputs(&self) -> AhbMasterSignals {
        let Some(t) = self.transfer else {
            return AhbMasterSignals::default();
        };
        let htrans = match self.phase {
            InitiatorPhase::Address => HTrans::NonSeq,
            InitiatorPhase::Idle | InitiatorPhase::Data => HTrans::Idle,
        };
        AhbMasterSignals {
            haddr: t.haddr,
            htrans,
            hwrite: t.direction.is_write(),
            hsize: t.size,
            hburst: HBurst::Single,
            hprot: t.prot,
            hwdata: if matches!(self.phase, InitiatorPhase::Data) && t.direction.is_write() {
                t.data
            } else {
                0
            },
        }
    }

    /// Samples the slave at the clock edge and advances the current phase.
    pub fn tick(&mut self, slave: &AhbSlaveSignals) -> InitiatorEvent {
        let Some(t) = self.transfer else {
            return InitiatorEvent::Idle;
        };
        match self.phase {
            InitiatorPhase::Idle => InitiatorEvent::Idle,
            InitiatorPhase::Address => {
                if slave.hready {
                    trace!(haddr = %t.haddr, size = %t.size, write = t.direction.is_write(), "address phase accepted");
                    self.phase = InitiatorPhase::Data;
                    InitiatorEvent::AddressAccepted
                } else {
                    InitiatorEvent::Wait
                }
            }
            InitiatorPhase::Data => {
                if !slave.hready {
                    if slave.hresp == HResp::Error {
                        trace!(haddr = %t.haddr, "first cycle of ERROR response");
                    }
                    return InitiatorEvent::Wait;
                }
                let data = match t.direction {
                    Direction::Read => slave.hrdata,
                    Direction::Write => 0,
                };
                if slave.hresp == HResp::Error {
                    warn!(haddr = %t.haddr, "AHB slave returned ERROR");
                }
                self.transfer = None;
                self.phase = InitiatorPhase::Idle;
                InitiatorEvent::Complete(AhbResponse {
                    status: slave.hresp,
                    data,
                })
            }
        }
    }

    /// Abandons any transfer in progress.
    pub fn reset(&mut self) {
        self.transfer = None;
        self.phase = InitiatorPhase::Idle;
    }
}
