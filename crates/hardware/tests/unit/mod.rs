//! # Unit Components
//!
//! This module serves as the central hub for the bridge's unit tests. It organizes
//! them along the crate's own layout: shared types, bus signals, the bridge
//! components, the AHB side, the verification environment, and statistics.






/// Unit tests for the verification environment and end-to-end scenarios.
pub mod sim;
