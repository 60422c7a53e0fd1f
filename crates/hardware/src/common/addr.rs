//! Cell address and bank index types.
//!
//! This module defines strong types for the two coordinates of a storage cell so
//! that an address can never be passed where a bank index is expected. It provides:
//! 1. **Type Safety:** Distinguishes in-bank offsets from bank indices at compile time.
//! 2. **Wrapping:** Both types are always reduced into their implemented range
//!    (`addr mod 2^A`, `bank mod N`); out-of-range values never fault.
//! 3. **Location:** A `(bank, addr)` pair naming one byte of the array.

use std::fmt;

/// Offset of a byte within a single bank.
///
/// Constructed through [`CellAddr::wrap`], which masks the raw pin value to the
/// configured address width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellAddr(u16);

/// Index of one of the selectable storage banks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BankIndex(u8);

/// A single byte cell: bank plus in-bank offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// Bank the cell lives in.
    pub bank: BankIndex,
    /// Offset inside the bank.
    pub addr: CellAddr,
}

impl CellAddr {
    /// Masks a raw address to `width` bits.
    ///
    /// # Arguments
    ///
    /// * `raw` - Address as driven on the pins.
    /// * `width` - Implemented address width in bits (1..=16).
    #[inline(always)]
    pub const fn wrap(raw: u16, width: u32) -> Self {
        let mask = if width >= u16::BITS {
            u16::MAX
        } else {
            (1u16 << width) - 1
        };
        Self(raw & mask)
    }

    /// Returns the wrapped address value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns the address as a buffer index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl BankIndex {
    /// Reduces a raw bank number modulo `banks`.
    ///
    /// A bank count of zero is treated as one so the result is always a valid index.
    #[inline(always)]
    pub fn wrap(raw: u8, banks: usize) -> Self {
        let banks = banks.clamp(1, 256);
        Self((raw as usize % banks) as u8)
    }

    /// Returns the bank number.
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }

    /// Returns the bank number as a vector index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Location {
    /// Creates a location from already wrapped coordinates.
    pub const fn new(bank: BankIndex, addr: CellAddr) -> Self {
        Self { bank, addr }
    }
}

impl fmt::Display for CellAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl fmt::Display for BankIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bank {} addr({})", self.bank, self.addr)
    }
}
