//! Global Bus Constants.
//!
//! This module defines constants shared by the bridge and its environment. It includes:
//! 1. **Data Bus:** Width and lane count of the 32-bit data path.
//! 2. **Address Map:** Limits on the AHB address window and the size-select field.
//! 3. **Stimulus:** The cyclic pause pattern used for idle and backpressure injection.

/// Width of the AXI4-Lite and AHB-Lite data buses in bytes.
pub const DATA_BUS_BYTES: u64 = 4;

/// Mask selecting the byte lane within a data bus word.
pub const LANE_MASK: u64 = DATA_BUS_BYTES - 1;

/// Strobe value with every byte lane active.
pub const FULL_STROBE: u8 = 0xF;

/// Widest AHB address window the bridge can forward (HADDR is 32 bits).
pub const MAX_AHB_ADDR_WIDTH: u32 = 32;

/// Widest AXI address the model represents.
pub const MAX_AXI_ADDR_WIDTH: u32 = 64;

/// Pause pattern applied to valid/ready gating (1 = pause this cycle).
pub const CYCLE_PAUSE: [u8; 11] = [1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0];

/// AXI `AxPROT` bit marking a privileged access.
pub const AXPROT_PRIVILEGED: u8 = 0b001;

/// AXI `AxPROT` bit marking an instruction access.
pub const AXPROT_INSTRUCTION: u8 = 0b100;

/// AHB `HPROT` bit marking a data access.
pub const HPROT_DATA: u8 = 0b0001;

/// AHB `HPROT` bit marking a privileged access.
pub const HPROT_PRIVILEGED: u8 = 0b0010;
