//! AXI4-Lite Responder.
//!
//! Terminates the five AXI4-Lite channels on behalf of the controller. It provides:
//! 1. **Acceptance:** Ready generation for `AW`, `W`, and `AR`, gated by the controller being idle.
//! 2. **Latching:** Holding a write address or write data that arrived ahead of its partner.
//! 3. **Arbitration:** Alternating grants when a write and a read are presented together.
//! 4. **Response:** Driving `B` or `R` once the controller posts a completed transaction.
//!
//! Only one request is ever latched. While the controller is busy every ready is low, which is
//! how AHB-side latency reaches the AXI master as backpressure.

use crate::bus::{AxiLiteMasterSignals, AxiLiteSlaveSignals, AxiResp};
use crate::common::{AxiAddr, Direction};

/// A complete AXI4-Lite request, as handed to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxiRequest {
    /// Read or write.
    pub direction: Direction,
    /// Request address (`AWADDR` or `ARADDR`).
    pub addr: AxiAddr,
    /// Write data; zero for reads.
    pub data: u32,
    /// Write strobe; zero for reads.
    pub strobe: u8,
    /// Protection attributes (`AWPROT` or `ARPROT`).
    pub prot: u8,
}

/// A response waiting for the master's `BREADY`/`RREADY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxiResponse {
    /// Channel the response is driven on (`B` for writes, `R` for reads).
    pub direction: Direction,
    /// Mapped response code.
    pub resp: AxiResp,
    /// Read data; ignored for writes.
    pub data: u32,
}

/// AXI4-Lite slave-side channel state.
#[derive(Debug)]
pub struct AxiLiteResponder {
    /// Write address accepted ahead of its write data.
    aw: Option<(AxiAddr, u8)>,
    /// Write data accepted ahead of its write address.
    w: Option<(u32, u8)>,
    /// Response being driven on `B` or `R`.
    response: Option<AxiResponse>,
    /// Direction granted most recently, for round-robin arbitration.
    last_grant: Direction,
}

impl Default for AxiLiteResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl AxiLiteResponder {
    /// Creates a responder with nothing latched. The first contested grant goes to writes.
    pub const fn new() -> Self {
        Self {
            aw: None,
            w: None,
            response: None,
            last_grant: Direction::Read,
        }
    }

    /// Returns `true` if half of a write (address or data) is held.
    pub const fn has_partial_write(&self) -> bool {
        self.aw.is_some() || self.w.is_some()
    }

    /// Returns the response currently driven, if any.
    pub const fn response(&self) -> Option<&AxiResponse> {
        self.response.as_ref()
    }

    /// Computes the slave-side AXI signals for this cycle.
    ///
    /// Ready signals depend on the master's valids in the same cycle; valid signals on `B`/`R`
    /// depend only on registered state.
    ///
    /// # Arguments
    ///
    /// * `accepting` - Whether the controller can take a new request this cycle.
    /// * `master` - Signals the master drives this cycle.
    pub fn outputs(&self, accepting: bool, master: &AxiLiteMasterSignals) -> AxiLiteSlaveSignals {
        let mut out = AxiLiteSlaveSignals::default();

        if accepting {
            if self.has_partial_write() {
                out.awready = self.aw.is_none();
                out.wready = self.w.is_none();
            } else {
                match self.grant(master) {
                    Some(Direction::Write) => {
                        out.awready = true;
                        out.wready = true;
                    }
                    Some(Direction::Read) => out.arready = true,
                    None => {
                        out.awready = true;
                        out.wready = true;
                        out.arready = true;
                    }
                }
            }
        }

        if let Some(resp) = self.response {
            match resp.direction {
                Direction::Write => {
                    out.bvalid = true;
                    out.bresp = resp.resp;
                }
                Direction::Read => {
                    out.rvalid = true;
                    out.rresp = resp.resp;
                    out.rdata = resp.data;
                }
            }
        }

        out
    }

    /// Picks the direction to accept when nothing is latched; `None` if the master wants neither.
    fn grant(&self, master: &AxiLiteMasterSignals) -> Option<Direction> {
        let wants_write = master.awvalid || master.wvalid;
        match (wants_write, master.arvalid) {
            (true, true) => Some(match self.last_grant {
                Direction::Write => Direction::Read,
                Direction::Read => Direction::Write,
            }),
            (true, false) => Some(Direction::Write),
            (false, true) => Some(Direction::Read),
            (false, false) => None,
        }
    }

    /// Samples the address and data channels at the clock edge.
    ///
    /// Returns a request once it is complete: a read on its `AR` handshake, a write once both
    /// `AW` and `W` have been accepted (in the same cycle or different ones).
    ///
    /// # Arguments
    ///
    /// * `out` - Slave-side signals driven this cycle (from [`Self::outputs`]).
    /// * `master` - Master-side signals driven this cycle.
    pub fn sample(
        &mut self,
        out: &AxiLiteSlaveSignals,
        master: &AxiLiteMasterSignals,
    ) -> Option<AxiRequest> {
        if out.arready && master.arvalid {
            self.last_grant = Direction::Read;
            return Some(AxiRequest {
                direction: Direction::Read,
                addr: master.araddr,
                data: 0,
                strobe: 0,
                prot: master.arprot,
            });
        }

        if out.awready && master.awvalid {
            self.aw = Some((master.awaddr, master.awprot));
        }
        if out.wready && master.wvalid {
            self.w = Some((master.wdata, master.wstrb));
        }

        match (self.aw, self.w) {
            (Some((addr, prot)), Some((data, strobe))) => {
                self.aw = None;
                self.w = None;
                self.last_grant = Direction::Write;
                Some(AxiRequest {
                    direction: Direction::Write,
                    addr,
                    data,
                    strobe,
                    prot,
                })
            }
            _ => None,
        }
    }

    /// Starts driving a response on `B` or `R`.
    pub fn post_response(&mut self, response: AxiResponse) {
        self.response = Some(response);
    }

    /// Returns `true` if the response driven this cycle is accepted at the coming edge.
    pub fn response_accepted(&self, out: &AxiLiteSlaveSignals, master: &AxiLiteMasterSignals) -> bool {
        (out.bvalid && master.bready) || (out.rvalid && master.rready)
    }

    /// Stops driving the response after its handshake.
    pub fn retire_response(&mut self) -> Option<AxiResponse> {
        self.response.take()
    }

    /// Discards everything latched and any pending response.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
