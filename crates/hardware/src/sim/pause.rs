//! Deterministic pause generation.
//!
//! A pause generator decides, cycle by cycle, whether a channel holds off: an AXI master
//! delaying `VALID`, an AXI master deasserting `READY`, or an AHB slave inserting a wait
//! state. Patterns repeat cyclically, so every run of the same pattern is identical.

use crate::common::CYCLE_PAUSE;

/// Cyclic pause pattern; an empty generator never pauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PauseGenerator {
    pattern: Vec<bool>,
    pos: usize,
}

impl PauseGenerator {
    /// Creates a generator that never pauses.
    pub const fn never() -> Self {
        Self {
            pattern: Vec::new(),
            pos: 0,
        }
    }

    /// Creates a generator that repeats `pattern` (non-zero = pause).
    pub fn cyclic(pattern: &[u8]) -> Self {
        Self {
            pattern: pattern.iter().map(|&p| p != 0).collect(),
            pos: 0,
        }
    }

    /// Creates a generator over the standard `[1,1,1,0,1,0,0,0,1,1,0]` pattern.
    pub fn cycle_pause() -> Self {
        Self::cyclic(&CYCLE_PAUSE)
    }

    /// Creates a generator from an optional pattern; `None` never pauses.
    pub fn from_pattern(pattern: Option<&[u8]>) -> Self {
        pattern.map_or_else(Self::never, Self::cyclic)
    }

    /// Returns `true` if this generator can ever pause.
    pub fn is_active(&self) -> bool {
        self.pattern.iter().any(|&p| p)
    }

    /// Returns the pause decision for the next cycle and advances.
    pub fn next_pause(&mut self) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        let pause = self.pattern[self.pos];
        self.pos = (self.pos + 1) % self.pattern.len();
        pause
    }

    /// Restarts the pattern from its first entry.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }
}

impl Iterator for PauseGenerator {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.next_pause())
    }
}
