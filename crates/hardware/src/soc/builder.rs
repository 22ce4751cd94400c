//! System construction and top-level `System` type.
//!
//! This module builds the device under test and its AHB side from configuration. It performs:
//! 1. **Bridge setup:** Validates the bridge parameters and instantiates the controller.
//! 2. **Slave setup:** Creates the AHB-Lite SRAM with its wait-state pattern.
//! 3. **Clocking:** Evaluates the AHB side and advances it by one edge per cycle.

use tracing::debug;

use crate::bridge::BridgeController;
use crate::bus::{AxiLiteMasterSignals, AxiLiteSlaveSignals};
use crate::common::ConfigError;
use crate::config::{BridgeConfig, Config};
use crate::sim::pause::PauseGenerator;
use crate::soc::memory::AhbLiteSram;
use crate::soc::traits::AhbSlave;

/// The bridge and the AHB-Lite slave behind it.
pub struct System {
    /// The bridge under test.
    pub bridge: BridgeController,
    /// Slave on the AHB-Lite port (boxed for dynamic dispatch).
    pub slave: Box<dyn AhbSlave>,
}

impl std::fmt::Debug for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("System")
            .field("bridge", &self.bridge)
            .field("slave", &self.slave.name())
            .finish()
    }
}

impl System {
    /// Builds a bridge and SRAM slave from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let waits = PauseGenerator::from_pattern(config.memory.wait_pattern.as_deref());
        debug!(
            size_sel_addr_bits = config.bridge.size_sel_addr_bits,
            ahb_addr_width = config.bridge.ahb_addr_width,
            sram_bytes = config.memory.size_bytes,
            slave_waits = waits.is_active(),
            "building system"
        );
        let sram = AhbLiteSram::new(config.memory.size_bytes, config.memory.default_value, waits);
        Self::with_slave(config.bridge, Box::new(sram))
    }

    /// Builds a bridge in front of an arbitrary AHB-Lite slave.
    ///
    /// # Errors
    ///
    /// Returns an error if `bridge` does not describe a buildable bridge.
    pub fn with_slave(bridge: BridgeConfig, slave: Box<dyn AhbSlave>) -> Result<Self, ConfigError> {
        Ok(Self {
            bridge: BridgeController::new(bridge)?,
            slave,
        })
    }

    /// Computes the bridge's AXI slave-side signals for this cycle.
    pub fn axi_outputs(&self, master: &AxiLiteMasterSignals) -> AxiLiteSlaveSignals {
        self.bridge.axi_outputs(master)
    }

    /// Advances the bridge and the slave by one clock edge.
    ///
    /// Both sample what the other drove during the cycle ending at this edge.
    pub fn tick(&mut self, master: &AxiLiteMasterSignals) {
        let ahb_master = self.bridge.ahb_outputs();
        let ahb_slave = self.slave.outputs();
        self.bridge.tick(master, &ahb_slave);
        self.slave.tick(&ahb_master);
    }

    /// Asserts reset on the bridge and the slave.
    pub fn assert_reset(&mut self) {
        self.bridge.assert_reset();
        self.slave.reset();
    }

    /// Releases reset; the bridge leaves reset at the next edge.
    pub fn release_reset(&mut self) {
        self.bridge.release_reset();
    }
}
