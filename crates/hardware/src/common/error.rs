//! Configuration and verification error definitions.
//!
//! The reference model itself has no failure modes: every pin combination decodes
//! to a defined next state. Errors only arise at the two edges of the model:
//! 1. **Configuration:** Rejecting address widths or bank counts the model cannot represent.
//! 2. **Verification:** Reporting a mismatch between the value the device produced and
//!    the value the stimulus expected, naming the cell and both values.

use thiserror::Error;

use crate::common::constants::{MAX_ADDRESS_WIDTH, MAX_BANKS, MIN_ADDRESS_WIDTH, MIN_BANKS};

/// Errors raised while building or loading an [`SramConfig`](crate::config::SramConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Address width outside the supported range.
    #[error(
        "address width {0} outside supported range {min}..={max}",
        min = MIN_ADDRESS_WIDTH,
        max = MAX_ADDRESS_WIDTH
    )]
    AddressWidth(u32),

    /// Bank count outside the supported range.
    #[error(
        "bank count {0} outside supported range {min}..={max}",
        min = MIN_BANKS,
        max = MAX_BANKS
    )]
    BankCount(usize),

    /// Configuration text was not valid JSON for the config schema.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A verification failure detected by the testbench.
///
/// Each variant carries enough context to locate the failing cell without
/// re-running the stimulus.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    /// The device produced a defined byte that differs from the expected one.
    #[error("bank {bank} addr({addr:#04x}): expected {expected:#04x}, got {actual:#04x}")]
    Mismatch {
        /// Bank number the stimulus selected, as driven on `data_in` (before
        /// the device wraps it modulo its bank count).
        bank: u8,
        /// Address presented on the pins.
        addr: u16,
        /// Expected byte.
        expected: u8,
        /// Byte seen on `data_out`.
        actual: u8,
    },

    /// The device produced an undefined value where a byte was expected.
    #[error("bank {bank} addr({addr:#04x}): expected {expected:#04x}, got X")]
    Undefined {
        /// Bank number the stimulus selected, as driven on `data_in` (before
        /// the device wraps it modulo its bank count).
        bank: u8,
        /// Address presented on the pins.
        addr: u16,
        /// Expected byte.
        expected: u8,
    },

    /// The device is driving one or more bidirectional pins.
    #[error("bidirectional pins must all be inputs, output enable is {output_enable:#04x}")]
    PinDirection {
        /// Observed output-enable mask.
        output_enable: u8,
    },
}

impl CheckError {
    /// Builds the error for a read of `addr` that returned `actual` instead of `expected`.
    ///
    /// # Returns
    ///
    /// `None` when `actual` matches `expected`.
    pub fn compare(bank: u8, addr: u16, expected: u8, actual: Option<u8>) -> Option<Self> {
        match actual {
            Some(actual) if actual == expected => None,
            Some(actual) => Some(Self::Mismatch {
                bank,
                addr,
                expected,
                actual,
            }),
            None => Some(Self::Undefined {
                bank,
                addr,
                expected,
            }),
        }
    }
}
