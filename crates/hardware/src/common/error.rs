//! Configuration and Simulation error definitions.
//!
//! This module defines the error types of the bridge model and its environment. It provides:
//! 1. **Configuration Errors:** Rejecting parameter combinations the bridge cannot be built with.
//! 2. **Simulation Errors:** Failures observed by the blocking transaction helpers.
//!
//! Bus-level errors are not Rust errors inside the bridge: an AHB `ERROR` response travels
//! through the controller as data and reaches the AXI master as `SLVERR`. Only the environment
//! converts that response into a [`SimError`].

use thiserror::Error;

use super::addr::AxiAddr;
use super::data::TransferSize;

/// Invalid bridge or environment configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The AHB address window must be between 1 and 32 bits wide.
    #[error("ahb_addr_width must be in 1..=32, got {0}")]
    AhbAddrWidth(u32),

    /// The AXI address (window plus size-select field) does not fit in 64 bits.
    #[error("size_sel_addr_bits ({size_sel_addr_bits}) + ahb_addr_width ({ahb_addr_width}) exceeds 64 bits")]
    AxiAddrWidth {
        /// Configured width of the size-select field.
        size_sel_addr_bits: u32,
        /// Configured width of the AHB address window.
        ahb_addr_width: u32,
    },

    /// The SRAM slave must have at least one byte of storage.
    #[error("SRAM size must be non-zero")]
    EmptyMemory,

    /// A pause pattern was supplied but contains no entries.
    #[error("pause pattern `{0}` is empty")]
    EmptyPattern(&'static str),

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Failure of a transaction driven through the simulated system.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The transaction did not complete within the watchdog limit.
    ///
    /// The bridge itself never times out a slave; the watchdog belongs to the environment.
    #[error("{op} at {addr} did not complete within {cycles} cycles")]
    Timeout {
        /// Operation that timed out (e.g. `"write"`).
        op: &'static str,
        /// Request address.
        addr: AxiAddr,
        /// Watchdog limit that was exceeded.
        cycles: u64,
    },

    /// The AXI response was `SLVERR`.
    #[error("slave error response for {addr}")]
    SlaveError {
        /// Request address.
        addr: AxiAddr,
    },

    /// The AXI response was `DECERR`.
    #[error("decode error response for {addr}")]
    DecodeError {
        /// Request address.
        addr: AxiAddr,
    },

    /// Read-back data did not match the value written.
    #[error("invalid data at {addr}: {actual:#x} != {expected:#x}")]
    DataMismatch {
        /// Address that was read back.
        addr: AxiAddr,
        /// Value previously written.
        expected: u32,
        /// Value returned by the read.
        actual: u32,
    },

    /// The size-select field cannot encode this transfer size at the configured width.
    #[error("no {size} region at the configured size_sel_addr_bits")]
    NoRegion {
        /// Transfer size without a region.
        size: TransferSize,
    },

    /// A transaction was started while the master still had one outstanding.
    #[error("{op} at {addr} issued while another operation is outstanding")]
    Busy {
        /// Operation that was refused.
        op: &'static str,
        /// Request address.
        addr: AxiAddr,
    },

    /// A transaction was started while the system was held in reset.
    #[error("system is held in reset")]
    InReset,

    /// The system could not be built from its configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
