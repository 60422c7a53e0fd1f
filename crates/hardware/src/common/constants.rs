//! Signal-level constants.
//!
//! This module defines the fixed widths of the device pin contract. It includes:
//! 1. **Data Path:** Width of `data_in` / `data_out` and of the bidirectional bus.
//! 2. **Address Path:** Supported address widths.
//! 3. **Banking:** Supported bank counts.
//! 4. **Pin Direction:** The output-enable mask the device presents.

/// Width of the data path in bits.
pub const DATA_WIDTH: u32 = 8;

/// Number of bidirectional pins; all of them carry `data_in`.
pub const BIDIR_PINS: usize = 8;

/// Output-enable mask for the bidirectional pins (0 = every pin is an input).
pub const BIDIR_OUTPUT_ENABLE: u8 = 0x00;

/// Smallest supported address width in bits.
pub const MIN_ADDRESS_WIDTH: u32 = 1;

/// Largest supported address width in bits (addresses are carried as `u16`).
pub const MAX_ADDRESS_WIDTH: u32 = 16;

/// Smallest supported number of banks.
pub const MIN_BANKS: usize = 1;

/// Largest supported number of banks (`data_in` is 8 bits wide).
pub const MAX_BANKS: usize = 1 << DATA_WIDTH;

/// Value `data_out` takes while the device is in reset.
pub const RESET_DATA_OUT: u8 = 0x00;
