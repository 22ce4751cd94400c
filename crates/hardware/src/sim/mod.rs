//! Verification environment.
//!
//! Drives the bridge from its AXI side: pause generators for idle and backpressure
//! injection, the AXI4-Lite master model, the cycle-by-cycle simulator, and the
//! read/write scenarios.

/// AXI4-Lite master model.
pub mod master;

/// Deterministic pause generation.
pub mod pause;

/// Read/write scenarios.
pub mod scenario;

/// Two-phase cycle simulator and blocking accessors.
pub mod simulator;

pub use master::{AxiLiteMaster, Completion, MasterOp};
pub use pause::PauseGenerator;
pub use simulator::Simulator;
