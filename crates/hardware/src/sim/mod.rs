//! Simulation drivers.
//!
//! Provides the pin-level stimulus driver that clocks a device and checks
//! its outputs against expected values.

/// Testbench that drives a clocked SRAM device.
pub mod testbench;

pub use testbench::Testbench;
