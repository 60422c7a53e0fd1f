//! Configuration for the SRAM model.
//!
//! This module defines the parameters that shape a device instance. It provides:
//! 1. **Defaults:** Baseline geometry (address width, bank count) and read timing.
//! 2. **Structure:** `SramConfig`, deserializable from JSON with per-field defaults.
//! 3. **Enums:** Read latency mode (pipelined one-cycle or non-pipelined two-cycle).
//! 4. **Validation:** Range checks that keep every configuration representable.
//!
//! Use `SramConfig::default()` for the reference geometry or `SramConfig::from_json` to
//! load an override; any field left out of the JSON takes its default.

use serde::Deserialize;

use crate::common::constants::{MAX_ADDRESS_WIDTH, MAX_BANKS, MIN_ADDRESS_WIDTH, MIN_BANKS};
use crate::common::error::ConfigError;

/// Default configuration constants for the model.
mod defaults {
    /// Address bits per bank (64 bytes per bank).
    pub const ADDRESS_WIDTH: u32 = 6;

    /// Number of selectable banks.
    pub const BANKS: usize = 4;
}

/// Read latency of the device.
///
/// Writes always complete on the edge that samples them; only reads are timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ReadLatency {
    /// Pipelined reads.
    ///
    /// A read sampled on one edge is latched into `data_out` on the next read
    /// edge, so a new address can be presented on every edge.
    #[default]
    #[serde(alias = "Pipelined")]
    OneCycle,
    /// Non-pipelined reads.
    ///
    /// The same address must be sampled on two consecutive read edges before
    /// `data_out` is updated; changing the address restarts the read.
    #[serde(alias = "NonPipelined")]
    TwoCycle,
}

impl ReadLatency {
    /// Returns `true` if a new address may be issued on every edge.
    pub const fn is_pipelined(self) -> bool {
        matches!(self, Self::OneCycle)
    }
}

/// Geometry and timing of one SRAM instance.
///
/// # Examples
///
/// ```
/// use sram_core::config::{ReadLatency, SramConfig};
///
/// let json = r#"{ "banks": 8, "read_latency": "NonPipelined" }"#;
/// let config = SramConfig::from_json(json).unwrap();
/// assert_eq!(config.banks, 8);
/// assert_eq!(config.address_width, 6);
/// assert_eq!(config.read_latency, ReadLatency::TwoCycle);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SramConfig {
    /// Address bits per bank; each bank holds `2^address_width` bytes.
    #[serde(default = "SramConfig::default_address_width")]
    pub address_width: u32,

    /// Number of independent banks selectable through `bank_select`.
    #[serde(default = "SramConfig::default_banks")]
    pub banks: usize,

    /// Read timing mode.
    #[serde(default)]
    pub read_latency: ReadLatency,
}

impl SramConfig {
    /// Returns the default address width in bits.
    fn default_address_width() -> u32 {
        defaults::ADDRESS_WIDTH
    }

    /// Returns the default bank count.
    fn default_banks() -> usize {
        defaults::BANKS
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// # Arguments
    ///
    /// * `json` - A JSON object; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and the range errors of
    /// [`SramConfig::validate`] for unrepresentable geometry.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the geometry is representable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AddressWidth`] if the address width is outside
    /// `1..=16` and [`ConfigError::BankCount`] if the bank count is outside `1..=256`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address_width < MIN_ADDRESS_WIDTH || self.address_width > MAX_ADDRESS_WIDTH {
            return Err(ConfigError::AddressWidth(self.address_width));
        }
        if self.banks < MIN_BANKS || self.banks > MAX_BANKS {
            return Err(ConfigError::BankCount(self.banks));
        }
        Ok(())
    }

    /// Returns the number of bytes in each bank.
    ///
    /// `None` if `2^address_width` does not fit in a `usize`.
    pub const fn bank_size(&self) -> Option<usize> {
        1usize.checked_shl(self.address_width)
    }

    /// Returns a copy with a different read latency.
    #[must_use]
    pub fn with_read_latency(mut self, read_latency: ReadLatency) -> Self {
        self.read_latency = read_latency;
        self
    }
}

impl Default for SramConfig {
    /// Creates the reference geometry: 4 banks of 64 bytes, pipelined reads.
    fn default() -> Self {
        Self {
            address_width: defaults::ADDRESS_WIDTH,
            banks: defaults::BANKS,
            read_latency: ReadLatency::default(),
        }
    }
}
