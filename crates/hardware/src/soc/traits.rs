//! AHB-Lite slave trait.
//!
//! This module defines the `AhbSlave` trait implemented by every component attached to the
//! bridge's AHB-Lite port. It provides:
//! 1. **Identification:** `name` for logging.
//! 2. **Outputs:** `HREADY`, `HRESP`, and `HRDATA` as registered state for the current cycle.
//! 3. **Clocking:** `tick` samples the master's signals at the rising edge.
//! 4. **Reset:** Optional return to the idle state.
//!
//! Outputs must not depend combinationally on the master's signals in the same cycle.

use crate::bus::{AhbMasterSignals, AhbSlaveSignals};

/// A component on the AHB-Lite side of the bridge.
pub trait AhbSlave: Send {
    /// Returns a short name for this slave (e.g., `"SRAM"`).
    fn name(&self) -> &'static str;

    /// Returns the signals this slave drives during the current cycle.
    fn outputs(&self) -> AhbSlaveSignals;

    /// Samples the master's signals at the rising edge ending the current cycle.
    fn tick(&mut self, master: &AhbMasterSignals);

    /// Abandons any data phase in progress (default: no-op).
    fn reset(&mut self) {}
}
