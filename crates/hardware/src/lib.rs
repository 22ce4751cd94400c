//! AXI4-Lite to AHB-Lite bridge model.
//!
//! This crate implements a cycle-level model of a bus bridge and its verification environment:
//! 1. **Bridge:** AXI4-Lite responder, transfer-size selector, AHB-Lite initiator, and the
//!    controller state machine that serializes one transaction at a time.
//! 2. **Bus:** Signal bundles for both protocols and the response mapping between them.
//! 3. **SoC:** The AHB-Lite SRAM slave and the builder that wires it behind the bridge.
//! 4. **Simulation:** Pause generators, the AXI4-Lite master model, the simulator, and scenarios.
//! 5. **Support:** Configuration, statistics, and shared types.

/// Bridge components (responder, selector, initiator, controller).
pub mod bridge;
/// AXI4-Lite and AHB-Lite signal bundles.
pub mod bus;
/// Common types and constants (addresses, transfer sizes, errors).
pub mod common;
/// Model configuration (defaults, hierarchical config structures).
pub mod config;
/// Verification environment (master model, simulator, scenarios).
pub mod sim;
/// AHB side (slave trait, SRAM, system builder).
pub mod soc;
/// Bridge statistics collection and reporting.
pub mod stats;

/// The bridge itself; construct with `BridgeController::new`.
pub use crate::bridge::BridgeController;
/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Cycle simulator with blocking read/write accessors.
pub use crate::sim::Simulator;
/// Bridge plus AHB slave; construct with `System::new`.
pub use crate::soc::System;
