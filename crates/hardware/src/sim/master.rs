//! AXI4-Lite master model.
//!
//! Drives one operation at a time into the bridge's AXI4-Lite port. It provides:
//! 1. **Address/data channels:** `AW`, `W`, and `AR` valids gated by an idle generator.
//! 2. **Response channels:** `BREADY` and `RREADY` gated by a backpressure generator.
//! 3. **Lane handling:** Placement of byte/halfword/word data and strobes on the 32-bit bus.
//!
//! A valid, once raised, is held until its handshake; the idle generator only decides when a
//! valid may be raised. Ready signals follow the backpressure generator every cycle.

use crate::bus::{AxiLiteMasterSignals, AxiLiteSlaveSignals, AxiResp};
use crate::common::constants::AXPROT_PRIVILEGED;
use crate::common::{AxiAddr, Direction, TransferSize};
use crate::sim::pause::PauseGenerator;

/// An operation queued on the master.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MasterOp {
    /// Write `data` under `strobe` at `addr`.
    Write {
        /// Request address.
        addr: AxiAddr,
        /// Lane-addressed write data.
        data: u32,
        /// Byte strobe.
        strobe: u8,
    },
    /// Read the word containing `addr`.
    Read {
        /// Request address.
        addr: AxiAddr,
    },
}

impl MasterOp {
    /// Builds a write of `size` at `addr`, placing `value` on the lanes it covers.
    pub const fn write(addr: AxiAddr, size: TransferSize, value: u32) -> Self {
        let lane = addr.lane();
        let data = if matches!(size, TransferSize::Word) {
            value
        } else {
            (value & ((1u32 << (size.bytes() * 8)) - 1)) << (lane * 8)
        };
        Self::Write {
            addr,
            data,
            strobe: size.strobe(lane),
        }
    }

    /// Returns the request address.
    pub const fn addr(&self) -> AxiAddr {
        match self {
            Self::Write { addr, .. } | Self::Read { addr } => *addr,
        }
    }

    /// Returns the direction of the operation.
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Write { .. } => Direction::Write,
            Self::Read { .. } => Direction::Read,
        }
    }
}

/// A finished operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    /// The operation that finished.
    pub op: MasterOp,
    /// Response code from `B` or `R`.
    pub resp: AxiResp,
    /// Read data as returned on `RDATA` (all lanes); zero for writes.
    pub data: u32,
}

/// Extracts the `size` lanes at `addr` from a lane-addressed data word.
pub const fn extract_lanes(data: u32, addr: AxiAddr, size: TransferSize) -> u32 {
    if matches!(size, TransferSize::Word) {
        return data;
    }
    (data >> (addr.lane() * 8)) & ((1u32 << (size.bytes() * 8)) - 1)
}

/// Per-channel pause generators.
#[derive(Clone, Debug, Default)]
struct ChannelPauses {
    aw: PauseGenerator,
    w: PauseGenerator,
    ar: PauseGenerator,
    b: PauseGenerator,
    r: PauseGenerator,
}

/// AXI4-Lite master with one outstanding operation.
#[derive(Debug, Default)]
pub struct AxiLiteMaster {
    op: Option<MasterOp>,
    aw_done: bool,
    w_done: bool,
    ar_done: bool,
    /// Signals driven during the current cycle.
    out: AxiLiteMasterSignals,
    pauses: ChannelPauses,
    completion: Option<Completion>,
}

impl AxiLiteMaster {
    /// Creates an idle master that never pauses.
    pub fn new() -> Self {
        Self {
            out: AxiLiteMasterSignals {
                bready: true,
                rready: true,
                ..AxiLiteMasterSignals::default()
            },
            ..Self::default()
        }
    }

    /// Installs an idle generator on `AW`, `W`, and `AR` (one instance per channel).
    pub fn set_idle_generator(&mut self, pattern: Option<&[u8]>) {
        self.pauses.aw = PauseGenerator::from_pattern(pattern);
        self.pauses.w = PauseGenerator::from_pattern(pattern);
        self.pauses.ar = PauseGenerator::from_pattern(pattern);
    }

    /// Installs a backpressure generator on `B` and `R` (one instance per channel).
    pub fn set_backpressure_generator(&mut self, pattern: Option<&[u8]>) {
        self.pauses.b = PauseGenerator::from_pattern(pattern);
        self.pauses.r = PauseGenerator::from_pattern(pattern);
    }

    /// Returns `true` if no operation is outstanding.
    pub const fn is_idle(&self) -> bool {
        self.op.is_none()
    }

    /// Queues an operation; its valids rise from the next cycle on.
    ///
    /// Returns `false` if an operation is already outstanding.
    pub fn issue(&mut self, op: MasterOp) -> bool {
        if self.op.is_some() {
            return false;
        }
        self.op = Some(op);
        self.aw_done = false;
        self.w_done = false;
        self.ar_done = false;
        self.completion = None;
        true
    }

    /// Takes the most recent completion, if any.
    pub const fn take_completion(&mut self) -> Option<Completion> {
        self.completion.take()
    }

    /// Returns the signals driven during the current cycle.
    pub const fn outputs(&self) -> AxiLiteMasterSignals {
        self.out
    }

    /// Drops the outstanding operation and all valids, as on reset.
    pub fn reset(&mut self) {
        self.op = None;
        self.completion = None;
        self.out.awvalid = false;
        self.out.wvalid = false;
        self.out.arvalid = false;
    }

    /// Samples the bridge at the rising edge and computes next cycle's signals.
    pub fn tick(&mut self, slave: &AxiLiteSlaveSignals) {
        let cur = self.out;

        let aw_fire = cur.awvalid && slave.awready;
        let w_fire = cur.wvalid && slave.wready;
        let ar_fire = cur.arvalid && slave.arready;
        self.aw_done |= aw_fire;
        self.w_done |= w_fire;
        self.ar_done |= ar_fire;

        if let Some(op) = self.op {
            let resp = match op.direction() {
                Direction::Write if cur.bready && slave.bvalid => Some((slave.bresp, 0)),
                Direction::Read if cur.rready && slave.rvalid => Some((slave.rresp, slave.rdata)),
                _ => None,
            };
            if let Some((resp, data)) = resp {
                self.completion = Some(Completion { op, resp, data });
                self.op = None;
            }
        }

        let aw_pause = self.pauses.aw.next_pause();
        let w_pause = self.pauses.w.next_pause();
        let ar_pause = self.pauses.ar.next_pause();
        let mut next = AxiLiteMasterSignals {
            bready: !self.pauses.b.next_pause(),
            rready: !self.pauses.r.next_pause(),
            awprot: AXPROT_PRIVILEGED,
            arprot: AXPROT_PRIVILEGED,
            ..AxiLiteMasterSignals::default()
        };

        match self.op {
            Some(MasterOp::Write { addr, data, strobe }) => {
                if !self.aw_done {
                    next.awvalid = (cur.awvalid && !aw_fire) || !aw_pause;
                    next.awaddr = addr;
                }
                if !self.w_done {
                    next.wvalid = (cur.wvalid && !w_fire) || !w_pause;
                    next.wdata = data;
                    next.wstrb = strobe;
                }
            }
            Some(MasterOp::Read { addr }) => {
                if !self.ar_done {
                    next.arvalid = (cur.arvalid && !ar_fire) || !ar_pause;
                    next.araddr = addr;
                }
            }
            None => {}
        }

        self.out = next;
    }
}
