//! Common types used throughout the bridge model.
//!
//! This module provides building blocks shared by the bridge and its environment:
//! 1. **Address Types:** Strong types for the AXI request address and the AHB `HADDR`.
//! 2. **Constants:** Data bus geometry and stimulus patterns.
//! 3. **Transfer Types:** Direction and size class of a transaction.
//! 4. **Error Handling:** Configuration and simulation error types.

/// Address type definitions (AXI and AHB addresses).
pub mod addr;

/// Common constants used throughout the model.
pub mod constants;

/// Transfer direction and size definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::{AhbAddr, AxiAddr};
pub use constants::{CYCLE_PAUSE, DATA_BUS_BYTES};
pub use data::{Direction, TransferSize};
pub use error::{ConfigError, SimError};
