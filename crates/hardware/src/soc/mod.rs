//! AHB side of the simulated system.
//!
//! This module organizes the components behind the bridge's AHB-Lite port: the slave trait,
//! the SRAM slave, and the builder that assembles them with the bridge.

/// System builder for assembling the bridge and its slave.
pub mod builder;

/// AHB-Lite SRAM slave.
pub mod memory;

/// Slave trait definitions for the AHB-Lite port.
pub mod traits;

pub use builder::System;
pub use memory::AhbLiteSram;
pub use traits::AhbSlave;
