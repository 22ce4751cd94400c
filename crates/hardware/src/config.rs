//! Configuration system for the bridge model.
//!
//! This module defines all configuration structures used to parameterize the bridge and its
//! simulated environment. It provides:
//! 1. **Defaults:** Baseline parameters (address widths, SRAM size, reset timing).
//! 2. **Structures:** Hierarchical config for general, bridge, memory, and stimulus settings.
//! 3. **Validation:** Rejection of parameter combinations the bridge cannot be built with.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or use `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{MAX_AHB_ADDR_WIDTH, MAX_AXI_ADDR_WIDTH};
use crate::common::{AxiAddr, ConfigError, TransferSize};

/// Default configuration constants for the model.
mod defaults {
    /// Number of address bits above the AHB window used for size selection (disabled).
    pub const SIZE_SEL_ADDR_BITS: u32 = 0;

    /// Width of the forwarded AHB address window.
    pub const AHB_ADDR_WIDTH: u32 = 32;

    /// SRAM slave capacity (256 KiB).
    pub const SRAM_SIZE: usize = 64 * 4 * 1024;

    /// Value every SRAM byte holds after construction.
    pub const SRAM_DEFAULT_VALUE: u8 = 0;

    /// Cycles reset is held asserted, and cycles run after release before traffic starts.
    pub const RESET_CYCLES: u32 = 10;

    /// Cycles a single transaction may take before the environment gives up.
    pub const WATCHDOG_CYCLES: u64 = 10_000;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Bridge instantiation parameters.
    #[serde(default)]
    pub bridge: BridgeConfig,
    /// AHB-Lite SRAM slave settings.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// AXI-side idle and backpressure injection.
    #[serde(default)]
    pub stimulus: StimulusConfig,
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Enable per-cycle signal tracing.
    #[serde(default)]
    pub trace: bool,

    /// Cycles a single transaction may take before it is reported as a timeout.
    #[serde(default = "GeneralConfig::default_watchdog")]
    pub watchdog_cycles: u64,
}

impl GeneralConfig {
    fn default_watchdog() -> u64 {
        defaults::WATCHDOG_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            watchdog_cycles: defaults::WATCHDOG_CYCLES,
        }
    }
}

/// Bridge instantiation parameters, fixed for the lifetime of a bridge instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BridgeConfig {
    /// Number of address bits above the AHB window that select the transfer size.
    ///
    /// Zero disables selection and forces word transfers.
    #[serde(default = "BridgeConfig::default_size_sel_addr_bits")]
    pub size_sel_addr_bits: u32,

    /// Width of the AHB address window forwarded on `HADDR`.
    #[serde(default = "BridgeConfig::default_ahb_addr_width")]
    pub ahb_addr_width: u32,
}

impl BridgeConfig {
    fn default_size_sel_addr_bits() -> u32 {
        defaults::SIZE_SEL_ADDR_BITS
    }

    fn default_ahb_addr_width() -> u32 {
        defaults::AHB_ADDR_WIDTH
    }

    /// Creates a bridge configuration with the default AHB window and the given selector width.
    pub const fn with_size_sel_addr_bits(size_sel_addr_bits: u32) -> Self {
        Self {
            size_sel_addr_bits,
            ahb_addr_width: defaults::AHB_ADDR_WIDTH,
        }
    }

    /// Returns the total AXI address width (window plus size-select field).
    pub const fn axi_addr_width(&self) -> u32 {
        self.size_sel_addr_bits + self.ahb_addr_width
    }

    /// Returns the AXI base address of the region whose accesses use `size`.
    ///
    /// With size selection disabled every address is a word access, so only `Word` has a
    /// region (based at zero). Otherwise `size` needs a field value that fits in
    /// `size_sel_addr_bits` bits; a one-bit field has no word region.
    pub const fn region_base(&self, size: TransferSize) -> Option<AxiAddr> {
        let field = size as u64;
        if self.size_sel_addr_bits == 0 {
            return match size {
                TransferSize::Word => Some(AxiAddr::new(0)),
                TransferSize::Byte | TransferSize::Halfword => None,
            };
        }
        match field.checked_shr(self.size_sel_addr_bits) {
            Some(0) | None => match field.checked_shl(self.ahb_addr_width) {
                Some(base) => Some(AxiAddr::new(base)),
                None => None,
            },
            Some(_) => None,
        }
    }

    /// Checks that the parameters describe a buildable bridge.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AhbAddrWidth`] for a window outside `1..=32` bits and
    /// [`ConfigError::AxiAddrWidth`] when the AXI address would exceed 64 bits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ahb_addr_width == 0 || self.ahb_addr_width > MAX_AHB_ADDR_WIDTH {
            return Err(ConfigError::AhbAddrWidth(self.ahb_addr_width));
        }
        if self.axi_addr_width() > MAX_AXI_ADDR_WIDTH {
            return Err(ConfigError::AxiAddrWidth {
                size_sel_addr_bits: self.size_sel_addr_bits,
                ahb_addr_width: self.ahb_addr_width,
            });
        }
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            size_sel_addr_bits: defaults::SIZE_SEL_ADDR_BITS,
            ahb_addr_width: defaults::AHB_ADDR_WIDTH,
        }
    }
}

/// AHB-Lite SRAM slave settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Capacity in bytes; accesses beyond it receive an `ERROR` response.
    #[serde(default = "MemoryConfig::default_size")]
    pub size_bytes: usize,

    /// Initial value of every byte.
    #[serde(default = "MemoryConfig::default_value")]
    pub default_value: u8,

    /// Wait-state pattern applied to data phases (1 = hold `HREADY` low this cycle).
    #[serde(default)]
    pub wait_pattern: Option<Vec<u8>>,
}

impl MemoryConfig {
    fn default_size() -> usize {
        defaults::SRAM_SIZE
    }

    fn default_value() -> u8 {
        defaults::SRAM_DEFAULT_VALUE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::SRAM_SIZE,
            default_value: defaults::SRAM_DEFAULT_VALUE,
            wait_pattern: None,
        }
    }
}

/// AXI-side stimulus shaping.
#[derive(Debug, Clone, Deserialize)]
pub struct StimulusConfig {
    /// Pause pattern gating `AWVALID`, `WVALID`, and `ARVALID` (1 = hold off this cycle).
    #[serde(default)]
    pub idle_pattern: Option<Vec<u8>>,

    /// Pause pattern gating `BREADY` and `RREADY` (1 = deassert this cycle).
    #[serde(default)]
    pub backpressure_pattern: Option<Vec<u8>>,

    /// Cycles reset is held, and cycles idled after release.
    #[serde(default = "StimulusConfig::default_reset_cycles")]
    pub reset_cycles: u32,
}

impl StimulusConfig {
    fn default_reset_cycles() -> u32 {
        defaults::RESET_CYCLES
    }
}

impl Default for StimulusConfig {
    fn default() -> Self {
        Self {
            idle_pattern: None,
            backpressure_pattern: None,
            reset_cycles: defaults::RESET_CYCLES,
        }
    }
}

impl Config {
    /// Parses a configuration from JSON; missing sections take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON, or any error from [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the whole configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bridge.validate()?;
        if self.memory.size_bytes == 0 {
            return Err(ConfigError::EmptyMemory);
        }
        let patterns = [
            ("memory.wait_pattern", &self.memory.wait_pattern),
            ("stimulus.idle_pattern", &self.stimulus.idle_pattern),
            ("stimulus.backpressure_pattern", &self.stimulus.backpressure_pattern),
        ];
        for (name, pattern) in patterns {
            if pattern.as_ref().is_some_and(Vec::is_empty) {
                return Err(ConfigError::EmptyPattern(name));
            }
        }
        Ok(())
    }
}
