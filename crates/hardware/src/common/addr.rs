//! AXI and AHB address types.
//!
//! This module defines strong types for the two address spaces the bridge connects. It provides:
//! 1. **Type Safety:** Distinguishes the wide AXI request address from the forwarded `HADDR`.
//! 2. **Field Extraction:** Helpers for the byte lane and the bits above the AHB window.

use super::constants::LANE_MASK;

/// An address as presented on the AXI4-Lite `AWADDR`/`ARADDR` channels.
///
/// The AXI address carries the AHB address window in its low bits and, when size selection
/// is enabled, the size-select field directly above it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxiAddr(pub u64);

/// An address as driven on the AHB-Lite `HADDR` bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AhbAddr(pub u32);

impl AxiAddr {
    /// Creates a new AXI address from a raw value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }

    /// Returns the byte lane (0..=3) this address selects on the 32-bit data bus.
    #[inline(always)]
    pub const fn lane(&self) -> u32 {
        (self.0 & LANE_MASK) as u32
    }

    /// Returns `bits` bits of the address starting at bit `shift`.
    ///
    /// # Arguments
    ///
    /// * `shift` - Position of the least significant bit of the field.
    /// * `bits` - Width of the field; zero yields zero.
    pub const fn field(&self, shift: u32, bits: u32) -> u64 {
        if bits == 0 || shift >= 64 {
            return 0;
        }
        let raw = self.0 >> shift;
        if bits >= 64 { raw } else { raw & ((1u64 << bits) - 1) }
    }
}

impl AhbAddr {
    /// Creates a new AHB address from a raw value.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(&self) -> u32 {
        self.0
    }

    /// Returns the byte lane (0..=3) this address selects on the 32-bit data bus.
    #[inline(always)]
    pub const fn lane(&self) -> u32 {
        self.0 & LANE_MASK as u32
    }
}

impl std::fmt::Display for AxiAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl std::fmt::Display for AhbAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
