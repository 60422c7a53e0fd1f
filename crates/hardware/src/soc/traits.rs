//! Clocked device trait.
//!
//! This module defines the `ClockedDevice` trait that the testbench drives. It provides:
//! 1. **Identification:** `name` for log output.
//! 2. **Clocking:** `edge` samples one pin bundle and advances state by one clock edge.
//! 3. **Observation:** `outputs` reads the output pins without advancing time.
//!
//! The reference model implements it; an external device-under-test backend can
//! implement it as well and be driven by the same stimulus.

use crate::soc::pins::{SramOutputs, SramPins};

/// A synchronous device advanced one clock edge at a time.
pub trait ClockedDevice {
    /// Returns a short name for this device (e.g., `"SRAM"`).
    fn name(&self) -> &str;

    /// Samples `pins` on a rising edge and returns the outputs valid after it.
    fn edge(&mut self, pins: &SramPins) -> SramOutputs;

    /// Returns the current outputs without clocking.
    fn outputs(&self) -> SramOutputs;
}
