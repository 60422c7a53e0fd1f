//! Banked SRAM reference model.
//!
//! This crate implements a cycle-accurate behavioral model of a small synchronous
//! memory block with one read/write port, organized as follows:
//! 1. **Common:** Self-wrapping address and bank types, pin-contract constants, errors.
//! 2. **Config:** Geometry (address width, bank count) and read latency mode.
//! 3. **SoC:** Pin decode, the clocked device trait, banked storage, and the SRAM model.
//! 4. **Simulation:** A testbench that drives pins edge by edge and checks outputs.
//! 5. **Statistics:** Per-device activity counters.
//!
//! # Examples
//!
//! ```
//! use sram_core::{SramConfig, Testbench};
//!
//! let mut tb = Testbench::with_config(&SramConfig::default())?;
//! let _ = tb.reset(4);
//! tb.write(8, 0x55);
//! assert_eq!(tb.read(8), Some(0x55));
//! # Ok::<(), sram_core::common::error::ConfigError>(())
//! ```

/// Common types and constants (addresses, banks, errors).
pub mod common;
/// Model configuration (defaults, read latency, validation).
pub mod config;
/// Simulation drivers (testbench).
pub mod sim;
/// Device components (pins, storage, SRAM model, traits).
pub mod soc;
/// Device activity statistics.
pub mod stats;

/// Model configuration; use `SramConfig::default()` or `SramConfig::from_json`.
pub use crate::config::{ReadLatency, SramConfig};
/// Pin-level testbench; construct with `Testbench::with_config`.
pub use crate::sim::Testbench;
/// The SRAM reference model.
pub use crate::soc::Sram;
