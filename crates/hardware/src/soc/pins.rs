//! Pin bundles and command decode.
//!
//! The device samples a fixed set of input pins on every clock edge. The same
//! `data_in` pins carry either a data byte or a bank number depending on
//! `bank_select`, so the raw bundle is first decoded into a [`Command`] and the
//! device only ever acts on the decoded form.

use crate::common::constants::{BIDIR_OUTPUT_ENABLE, BIDIR_PINS};

/// Input pins sampled on each clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SramPins {
    /// Device enable.
    pub ena: bool,
    /// Active-low synchronous reset; `false` holds the device in reset.
    pub rst_n: bool,
    /// Address within the active bank (wrapped to the configured width).
    pub addr: u16,
    /// Write data, or the new bank number when `bank_select` is set.
    pub data_in: u8,
    /// Write enable.
    pub we: bool,
    /// Reinterpret `data_in` as a bank number instead of performing an access.
    pub bank_select: bool,
}

impl Default for SramPins {
    /// Enabled, out of reset, reading address 0.
    fn default() -> Self {
        Self {
            ena: true,
            rst_n: true,
            addr: 0,
            data_in: 0,
            we: false,
            bank_select: false,
        }
    }
}

/// Output pins, valid after each clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SramOutputs {
    /// Most recently read byte; `None` while undefined ("X").
    pub data_out: Option<u8>,
    /// Output-enable mask of the bidirectional pins.
    pub bidirectional_is_output: u8,
}

/// Operation selected by one sampled pin bundle.
///
/// Decode priority: reset, then enable, then bank select, then write enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `rst_n` low: clear output and address state.
    Reset,
    /// `ena` low: hold all state.
    Hold,
    /// Switch the active bank to `data_in` (wrapped by the bank count).
    SelectBank(u8),
    /// Store `data` at `addr` in the active bank.
    Write {
        /// Raw address from the pins.
        addr: u16,
        /// Byte to store.
        data: u8,
    },
    /// Sample `addr` in the active bank for reading.
    Read {
        /// Raw address from the pins.
        addr: u16,
    },
}

impl Command {
    /// Decodes a pin bundle.
    pub const fn decode(pins: &SramPins) -> Self {
        if !pins.rst_n {
            Self::Reset
        } else if !pins.ena {
            Self::Hold
        } else if pins.bank_select {
            Self::SelectBank(pins.data_in)
        } else if pins.we {
            Self::Write {
                addr: pins.addr,
                data: pins.data_in,
            }
        } else {
            Self::Read { addr: pins.addr }
        }
    }
}

impl From<&SramPins> for Command {
    fn from(pins: &SramPins) -> Self {
        Self::decode(pins)
    }
}

/// Direction of a bidirectional pin as seen from the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinDirection {
    /// Driven by the external harness.
    Input,
    /// Driven by the device.
    Output,
}

/// Returns the direction of every bidirectional pin.
///
/// All of them carry `data_in`, so the device never drives them.
pub fn bidirectional_directions() -> [PinDirection; BIDIR_PINS] {
    std::array::from_fn(|bit| {
        if BIDIR_OUTPUT_ENABLE & (1 << bit) == 0 {
            PinDirection::Input
        } else {
            PinDirection::Output
        }
    })
}

/// Packs pin directions into an output-enable mask (bit set = `Output`).
pub fn output_enable_mask(directions: &[PinDirection; BIDIR_PINS]) -> u8 {
    directions
        .iter()
        .enumerate()
        .filter(|(_, dir)| **dir == PinDirection::Output)
        .fold(0u8, |mask, (bit, _)| mask | (1 << bit))
}
