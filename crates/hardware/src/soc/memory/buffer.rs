//! SRAM Buffer Implementation.
//!
//! Backing storage for the AHB-Lite SRAM slave. Accesses are bounds-checked; callers decide
//! how an out-of-range access is reported on the bus.

use std::ops::{Index, IndexMut};

/// Byte-addressed storage for the SRAM slave.
#[derive(Clone, Debug)]
pub struct SramBuffer {
    data: Vec<u8>,
}

impl SramBuffer {
    /// Creates a buffer of `size` bytes, each holding `fill`.
    pub fn new(size: usize, fill: u8) -> Self {
        Self {
            data: vec![fill; size],
        }
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer has no storage.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if `len` bytes starting at `offset` lie inside the buffer.
    pub const fn contains(&self, offset: u64, len: u64) -> bool {
        match offset.checked_add(len) {
            Some(end) => end <= self.data.len() as u64,
            None => false,
        }
    }

    /// Reads a single byte, or `None` if out of range.
    pub fn read_u8(&self, offset: u64) -> Option<u8> {
        usize::try_from(offset).ok().and_then(|i| self.data.get(i).copied())
    }

    /// Writes a single byte; returns `false` and does nothing if out of range.
    pub fn write_u8(&mut self, offset: u64, val: u8) -> bool {
        match usize::try_from(offset).ok().and_then(|i| self.data.get_mut(i)) {
            Some(b) => {
                *b = val;
                true
            }
            None => false,
        }
    }

    /// Reads a slice, or `None` if any part is out of range.
    pub fn read_slice(&self, offset: usize, len: usize) -> Option<&[u8]> {
        self.data.get(offset..offset.checked_add(len)?)
    }

    /// Writes a slice; returns `false` and does nothing if any part is out of range.
    pub fn write_slice(&mut self, offset: usize, src: &[u8]) -> bool {
        let Some(end) = offset.checked_add(src.len()) else {
            return false;
        };
        match self.data.get_mut(offset..end) {
            Some(dst) => {
                dst.copy_from_slice(src);
                true
            }
            None => false,
        }
    }
}

impl Index<usize> for SramBuffer {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for SramBuffer {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
