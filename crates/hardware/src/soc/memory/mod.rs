//! AHB-Lite SRAM slave.
//!
//! This module implements the memory the bridge talks to in the simulated system. It provides:
//! 1. **Buffer:** Backing storage (`SramBuffer`) for the SRAM contents.
//! 2. **Slave:** `AhbLiteSram`, a zero-base AHB-Lite slave with optional data-phase wait states.
//! 3. **Errors:** Two-cycle `ERROR` responses for accesses outside the buffer.

/// SRAM backing storage.
pub mod buffer;

use tracing::trace;

use self::buffer::SramBuffer;
use crate::bus::{AhbMasterSignals, AhbSlaveSignals, HResp};
use crate::common::{AhbAddr, TransferSize};
use crate::sim::pause::PauseGenerator;
use crate::soc::traits::AhbSlave;

/// How the data phase in progress is being answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Response {
    /// Normal completion, possibly after wait states.
    Okay,
    /// First cycle of an `ERROR` response (`HREADY` low).
    ErrorFirst,
    /// Second cycle of an `ERROR` response (`HREADY` high).
    ErrorSecond,
}

/// A data phase accepted at an earlier edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DataPhase {
    haddr: AhbAddr,
    size: TransferSize,
    write: bool,
    response: Response,
}

/// SRAM slave on the AHB-Lite port.
#[derive(Debug)]
pub struct AhbLiteSram {
    buffer: SramBuffer,
    waits: PauseGenerator,
    phase: Option<DataPhase>,
    /// Signals driven during the current cycle.
    out: AhbSlaveSignals,
}

impl AhbLiteSram {
    /// Creates an SRAM slave.
    ///
    /// # Arguments
    ///
    /// * `size` - Capacity in bytes.
    /// * `fill` - Initial value of every byte.
    /// * `waits` - Wait-state generator consulted once per data-phase cycle.
    pub fn new(size: usize, fill: u8, waits: PauseGenerator) -> Self {
        Self {
            buffer: SramBuffer::new(size, fill),
            waits,
            phase: None,
            out: AhbSlaveSignals::default(),
        }
    }

    /// Returns the capacity in bytes.
    pub const fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Loads a byte slice at `offset` without any bus activity.
    ///
    /// Returns `false` if the slice does not fit.
    pub fn load(&mut self, offset: usize, data: &[u8]) -> bool {
        self.buffer.write_slice(offset, data)
    }

    /// Reads a byte without any bus activity.
    pub fn peek_u8(&self, offset: u64) -> Option<u8> {
        self.buffer.read_u8(offset)
    }

    /// Reads a little-endian word without any bus activity.
    pub fn peek_u32(&self, offset: u64) -> Option<u32> {
        let i = usize::try_from(offset).ok()?;
        let bytes = self.buffer.read_slice(i, 4)?;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Gathers the lanes covered by a transfer into a lane-addressed data word.
    fn read_lanes(&self, haddr: AhbAddr, size: TransferSize) -> u32 {
        let mut data = 0u32;
        for i in 0..size.bytes() {
            let addr = u64::from(haddr.val()) + u64::from(i);
            let lane = (addr & 3) as u32;
            data |= u32::from(self.buffer.read_u8(addr).unwrap_or(0)) << (lane * 8);
        }
        data
    }

    /// Scatters the lanes covered by a transfer from a lane-addressed data word.
    fn write_lanes(&mut self, haddr: AhbAddr, size: TransferSize, hwdata: u32) {
        for i in 0..size.bytes() {
            let addr = u64::from(haddr.val()) + u64::from(i);
            let lane = (addr & 3) as u32;
            let _ = self.buffer.write_u8(addr, (hwdata >> (lane * 8)) as u8);
        }
    }

    /// Computes the signals for the cycle following an edge.
    fn next_outputs(&mut self) -> AhbSlaveSignals {
        let Some(phase) = self.phase.as_mut() else {
            return AhbSlaveSignals::default();
        };
        match phase.response {
            Response::ErrorFirst => {
                phase.response = Response::ErrorSecond;
                AhbSlaveSignals {
                    hready: false,
                    hresp: HResp::Error,
                    hrdata: 0,
                }
            }
            Response::ErrorSecond => AhbSlaveSignals {
                hready: true,
                hresp: HResp::Error,
                hrdata: 0,
            },
            Response::Okay => {
                let (haddr, size, write) = (phase.haddr, phase.size, phase.write);
                if self.waits.next_pause() {
                    AhbSlaveSignals {
                        hready: false,
                        hresp: HResp::Okay,
                        hrdata: 0,
                    }
                } else {
                    AhbSlaveSignals {
                        hready: true,
                        hresp: HResp::Okay,
                        hrdata: if write { 0 } else { self.read_lanes(haddr, size) },
                    }
                }
            }
        }
    }
}

impl AhbSlave for AhbLiteSram {
    fn name(&self) -> &'static str {
        "SRAM"
    }

    fn outputs(&self) -> AhbSlaveSignals {
        self.out
    }

    fn tick(&mut self, master: &AhbMasterSignals) {
        let hready = self.out.hready;

        if hready && let Some(phase) = self.phase.take() {
            if phase.write && phase.response == Response::Okay {
                trace!(haddr = %phase.haddr, data = master.hwdata, "SRAM write");
                self.write_lanes(phase.haddr, phase.size, master.hwdata);
            }
        }

        if hready && master.htrans.is_active() {
            let in_range = self
                .buffer
                .contains(u64::from(master.haddr.val()), u64::from(master.hsize.bytes()));
            self.phase = Some(DataPhase {
                haddr: master.haddr,
                size: master.hsize,
                write: master.hwrite,
                response: if in_range {
                    Response::Okay
                } else {
                    Response::ErrorFirst
                },
            });
        }

        self.out = self.next_outputs();
    }

    fn reset(&mut self) {
        self.phase = None;
        self.out = AhbSlaveSignals::default();
        self.waits.rewind();
    }
}
