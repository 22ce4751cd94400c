//! AXI4-Lite channel signals.
//!
//! Five independent valid/ready channels:
//! 1. **AW:** Write address (`AWVALID`, `AWREADY`, `AWADDR`, `AWPROT`).
//! 2. **W:** Write data (`WVALID`, `WREADY`, `WDATA`, `WSTRB`).
//! 3. **B:** Write response (`BVALID`, `BREADY`, `BRESP`).
//! 4. **AR:** Read address (`ARVALID`, `ARREADY`, `ARADDR`, `ARPROT`).
//! 5. **R:** Read data (`RVALID`, `RREADY`, `RDATA`, `RRESP`).

use crate::common::AxiAddr;
use crate::bus::ahb::HResp;

/// AXI response code carried on `BRESP` and `RRESP`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxiResp {
    /// Normal access success (`0b00`).
    #[default]
    Okay = 0b00,
    /// Exclusive access success (`0b01`); not used by AXI4-Lite.
    ExOkay = 0b01,
    /// Slave error (`0b10`).
    SlvErr = 0b10,
    /// Decode error (`0b11`).
    DecErr = 0b11,
}

impl AxiResp {
    /// Returns the two-bit wire encoding.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns `true` for `OKAY` and `EXOKAY`.
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Okay | Self::ExOkay)
    }
}

impl From<HResp> for AxiResp {
    /// Maps an AHB response onto the AXI response space.
    ///
    /// `OKAY` maps to `OKAY` and `ERROR` to `SLVERR`. There is no `DECERR` path: the bridge
    /// forwards every address and has no range checking of its own.
    fn from(resp: HResp) -> Self {
        match resp {
            HResp::Okay => Self::Okay,
            HResp::Error => Self::SlvErr,
        }
    }
}

/// Signals driven by the AXI4-Lite master towards the bridge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxiLiteMasterSignals {
    /// Write address valid.
    pub awvalid: bool,
    /// Write address.
    pub awaddr: AxiAddr,
    /// Write protection attributes.
    pub awprot: u8,
    /// Write data valid.
    pub wvalid: bool,
    /// Write data, lane-addressed.
    pub wdata: u32,
    /// Write byte strobe, one bit per lane.
    pub wstrb: u8,
    /// Write response ready.
    pub bready: bool,
    /// Read address valid.
    pub arvalid: bool,
    /// Read address.
    pub araddr: AxiAddr,
    /// Read protection attributes.
    pub arprot: u8,
    /// Read data ready.
    pub rready: bool,
}

/// Signals driven by the bridge towards the AXI4-Lite master.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxiLiteSlaveSignals {
    /// Write address ready.
    pub awready: bool,
    /// Write data ready.
    pub wready: bool,
    /// Write response valid.
    pub bvalid: bool,
    /// Write response.
    pub bresp: AxiResp,
    /// Read address ready.
    pub arready: bool,
    /// Read data valid.
    pub rvalid: bool,
    /// Read data, lane-addressed.
    pub rdata: u32,
    /// Read response.
    pub rresp: AxiResp,
}

impl AxiLiteSlaveSignals {
    /// Returns `true` if any address or data channel is ready to accept a transfer.
    pub const fn any_ready(&self) -> bool {
        self.awready || self.wready || self.arready
    }
}
