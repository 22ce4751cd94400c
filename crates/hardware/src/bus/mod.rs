//! Bus signal bundles.
//!
//! Each port is split into the signals driven by the master side and the signals driven by
//! the slave side, so a component's outputs can be computed independently of its inputs and
//! exchanged once per cycle.

/// AHB-Lite signal definitions.
pub mod ahb;

/// AXI4-Lite signal definitions.
pub mod axi;

pub use ahb::{AhbMasterSignals, AhbSlaveSignals, HBurst, HResp, HTrans, hprot_from_axprot};
pub use axi::{AxiLiteMasterSignals, AxiLiteSlaveSignals, AxiResp};
