//! AXI4-Lite to AHB-Lite bridge.
//!
//! The bridge is one synchronous component built from four parts:
//! 1. **Responder:** Terminates the AXI4-Lite channels and latches requests.
//! 2. **Selector:** Picks byte, halfword, or word transfers from the request address.
//! 3. **Initiator:** Drives the two-phase AHB-Lite protocol towards the slave.
//! 4. **Controller:** The state machine tying them together, one transaction at a time.

/// Bridge controller state machine.
pub mod controller;

/// AHB-Lite master-side transfer sequencing.
pub mod initiator;

/// AXI4-Lite slave-side channel handling.
pub mod responder;

/// Address-based transfer size decoding.
pub mod selector;

pub use controller::{BridgeController, BridgeOutputs, BridgeState};
pub use initiator::{AhbLiteInitiator, AhbResponse, AhbTransfer, InitiatorEvent, InitiatorPhase};
pub use responder::{AxiLiteResponder, AxiRequest, AxiResponse};
pub use selector::{SizeSelection, SizeSelector};
