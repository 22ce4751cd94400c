//! Transfer Classification Types.
//!
//! This module defines how a single bus transaction is classified. These types are used for:
//! 1. **Size Selection:** The selector's decision of how many bytes an AHB transfer covers.
//! 2. **Signal Encoding:** The `HSIZE` encoding driven on the AHB side.
//! 3. **Lane Handling:** Strobe and mask generation for the 32-bit data bus.
//! 4. **Statistics Tracking:** Categorizing transfers for reporting.

use super::constants::FULL_STROBE;

/// Direction of a bus transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Data flows from the bus master to the slave (`AW`/`W`/`B`, `HWRITE=1`).
    Write,
    /// Data flows from the slave to the bus master (`AR`/`R`, `HWRITE=0`).
    Read,
}

impl Direction {
    /// Returns `true` for writes; the value driven on `HWRITE`.
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}

/// Size class of an AHB transfer.
///
/// Determines how many bytes of the 32-bit data bus are valid. The discriminant is the
/// `HSIZE` encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TransferSize {
    /// Single byte (`HSIZE=0b000`).
    Byte = 0,
    /// Two bytes (`HSIZE=0b001`).
    Halfword = 1,
    /// Four bytes, the full bus width (`HSIZE=0b010`).
    #[default]
    Word = 2,
}

impl TransferSize {
    /// Returns the `HSIZE` encoding of this size.
    #[inline]
    pub const fn hsize(self) -> u8 {
        self as u8
    }

    /// Returns the number of bytes covered by this size.
    #[inline]
    pub const fn bytes(self) -> u32 {
        1 << (self as u32)
    }

    /// Returns the byte-lane strobe a transfer of this size at `lane` activates.
    ///
    /// Lanes beyond the bus width are clipped; a misaligned halfword at lane 3 yields a
    /// single active lane.
    pub const fn strobe(self, lane: u32) -> u8 {
        let raw = ((1u32 << self.bytes()) - 1) << (lane & 3);
        (raw as u8) & FULL_STROBE
    }

    /// Returns the data mask of the lanes this size covers at `lane`.
    pub const fn lane_mask(self, lane: u32) -> u32 {
        let strobe = self.strobe(lane);
        let mut mask = 0u32;
        let mut i = 0;
        while i < 4 {
            if strobe & (1 << i) != 0 {
                mask |= 0xFF << (i * 8);
            }
            i += 1;
        }
        mask
    }

    /// Returns whether `strobe` is the strobe this size would produce at `lane`.
    ///
    /// The bridge never validates strobes; this is used for diagnostics only.
    pub const fn matches_strobe(self, lane: u32, strobe: u8) -> bool {
        self.strobe(lane) == strobe
    }
}

impl std::fmt::Display for TransferSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Byte => write!(f, "byte"),
            Self::Halfword => write!(f, "halfword"),
            Self::Word => write!(f, "word"),
        }
    }
}
