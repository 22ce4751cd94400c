//! Transfer-Size Selector.
//!
//! Decodes the AHB transfer size of a request from its address. The AXI address is laid out as
//!
//! ```text
//!  | size-select field (size_sel_addr_bits) | AHB window (ahb_addr_width) |
//! ```
//!
//! The window is forwarded on `HADDR`; the field picks the size class. Field value 0 selects
//! bytes, 1 halfwords, and 2 or above words. With `size_sel_addr_bits == 0` every access is a
//! word access.

use crate::common::{AhbAddr, AxiAddr, TransferSize};
use crate::config::BridgeConfig;

/// Outcome of decoding one request address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeSelection {
    /// Size class of the AHB transfer.
    pub size: TransferSize,
    /// Address forwarded on `HADDR`.
    pub haddr: AhbAddr,
}

/// Pure address decoder; holds only the instantiation parameters.
#[derive(Clone, Copy, Debug)]
pub struct SizeSelector {
    size_sel_addr_bits: u32,
    ahb_addr_width: u32,
    window_mask: u64,
}

impl SizeSelector {
    /// Creates a selector for the given bridge parameters.
    ///
    /// The parameters are assumed valid (see [`BridgeConfig::validate`]).
    pub const fn new(config: &BridgeConfig) -> Self {
        let window_mask = if config.ahb_addr_width >= 64 {
            u64::MAX
        } else {
            (1u64 << config.ahb_addr_width) - 1
        };
        Self {
            size_sel_addr_bits: config.size_sel_addr_bits,
            ahb_addr_width: config.ahb_addr_width,
            window_mask,
        }
    }

    /// Returns the configured width of the size-select field.
    pub const fn size_sel_addr_bits(&self) -> u32 {
        self.size_sel_addr_bits
    }

    /// Returns the size class for `addr`.
    pub const fn size_for(&self, addr: AxiAddr) -> TransferSize {
        if self.size_sel_addr_bits == 0 {
            return TransferSize::Word;
        }
        match addr.field(self.ahb_addr_width, self.size_sel_addr_bits) {
            0 => TransferSize::Byte,
            1 => TransferSize::Halfword,
            _ => TransferSize::Word,
        }
    }

    /// Returns the `HADDR` value for `addr`: the AHB window with the field stripped.
    pub const fn haddr_for(&self, addr: AxiAddr) -> AhbAddr {
        AhbAddr::new((addr.val() & self.window_mask) as u32)
    }

    /// Decodes both the size class and the forwarded address.
    pub const fn select(&self, addr: AxiAddr) -> SizeSelection {
        SizeSelection {
            size: self.size_for(addr),
            haddr: self.haddr_for(addr),
        }
    }
}
