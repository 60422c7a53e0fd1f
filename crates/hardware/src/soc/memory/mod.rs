//! Banked storage array.
//!
//! This module implements the cell array behind the device. It provides:
//! 1. **Buffer:** Per-bank backing storage (`CellBuffer`) with undefined initial contents.
//! 2. **Banking:** `BankedMemory`, which owns N equally sized buffers and wraps every
//!    address and bank index into range before touching them.

/// Per-bank cell storage.
pub mod buffer;

use self::buffer::CellBuffer;
use crate::common::addr::{BankIndex, CellAddr, Location};
use crate::common::constants::{MAX_ADDRESS_WIDTH, MAX_BANKS, MIN_ADDRESS_WIDTH, MIN_BANKS};
use crate::config::SramConfig;

/// N independent banks of `2^A` bytes sharing one address range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BankedMemory {
    banks: Vec<CellBuffer>,
    address_width: u32,
}

impl BankedMemory {
    /// Creates the array described by `config`, with every cell undefined.
    ///
    /// Geometry outside the supported range is clamped into it, so the array
    /// always has at least one bank of at least two cells.
    pub fn new(config: &SramConfig) -> Self {
        let address_width = config.address_width.clamp(MIN_ADDRESS_WIDTH, MAX_ADDRESS_WIDTH);
        let banks = config.banks.clamp(MIN_BANKS, MAX_BANKS);
        let size = 1usize << address_width;
        Self {
            banks: (0..banks).map(|_| CellBuffer::new(size)).collect(),
            address_width,
        }
    }

    /// Number of banks.
    pub fn bank_count(&self) -> usize {
        self.banks.len()
    }

    /// Bytes per bank.
    pub fn bank_size(&self) -> usize {
        1usize << self.address_width
    }

    /// Resolves raw pin values to a wrapped location.
    ///
    /// # Arguments
    ///
    /// * `bank` - Raw bank number (wrapped modulo the bank count).
    /// * `addr` - Raw address (masked to the address width).
    pub fn locate(&self, bank: u8, addr: u16) -> Location {
        Location::new(
            BankIndex::wrap(bank, self.banks.len()),
            CellAddr::wrap(addr, self.address_width),
        )
    }

    /// Reads the cell at `loc`; `None` if it was never written.
    pub fn read(&self, loc: Location) -> Option<u8> {
        self.banks
            .get(loc.bank.index())
            .and_then(|bank| bank.read(loc.addr.index()))
    }

    /// Writes `val` to the cell at `loc`.
    pub fn write(&mut self, loc: Location, val: u8) {
        if let Some(bank) = self.banks.get_mut(loc.bank.index()) {
            bank.write(loc.addr.index(), val);
        }
    }

    /// Returns the storage of one bank.
    pub fn bank(&self, bank: BankIndex) -> Option<&CellBuffer> {
        self.banks.get(bank.index())
    }
}
