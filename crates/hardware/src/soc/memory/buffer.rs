//! Cell buffer implementation.
//!
//! This module provides the backing storage for one bank. Every cell starts out
//! undefined: the array has no power-on value, and a cell only becomes defined
//! once it is written. Reset does not touch the buffer.

use std::ops::Index;

/// Storage for a single bank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    cells: Vec<Option<u8>>,
}

impl CellBuffer {
    /// Creates a buffer of `size` undefined cells.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of byte cells.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![None; size],
        }
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the buffer holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reads one cell; `None` if it was never written or `offset` is out of range.
    pub fn read(&self, offset: usize) -> Option<u8> {
        self.cells.get(offset).copied().flatten()
    }

    /// Writes one cell. Out-of-range offsets are ignored.
    pub fn write(&mut self, offset: usize, val: u8) {
        if let Some(cell) = self.cells.get_mut(offset) {
            *cell = Some(val);
        }
    }

    /// Number of cells that hold a defined value.
    pub fn defined_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Index<usize> for CellBuffer {
    /// Output type for indexing operations.
    type Output = Option<u8>;

    /// Indexes into the buffer to read a cell.
    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}
