//! Common types used throughout the SRAM model.
//!
//! This module provides the building blocks shared by the device, the
//! storage, and the testbench. It includes:
//! 1. **Address Types:** Strong, self-wrapping types for cell addresses and bank indices.
//! 2. **Constants:** Fixed widths of the pin contract.
//! 3. **Error Handling:** Configuration and verification error types.

/// Cell address, bank index, and location types.
pub mod addr;

/// Signal-level constants.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::{BankIndex, CellAddr, Location};
pub use error::{CheckError, ConfigError};
