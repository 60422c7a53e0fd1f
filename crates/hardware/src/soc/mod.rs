//! Device components.
//!
//! This module organizes the pieces that make up the simulated memory block:
//! the pin contract, the clocked device trait, the banked storage, and the
//! SRAM model that ties them together.

/// Banked storage array.
pub mod memory;

/// Pin bundles, command decode, and pin directions.
pub mod pins;

/// Banked SRAM reference model.
pub mod sram;

/// Clocked device trait definitions.
pub mod traits;

pub use pins::{Command, PinDirection, SramOutputs, SramPins};
pub use sram::Sram;
pub use traits::ClockedDevice;
