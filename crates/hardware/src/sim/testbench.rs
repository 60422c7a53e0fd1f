//! Stimulus driver for clocked SRAM devices.
//!
//! The `Testbench` plays the part of the external harness: it owns the input
//! pins, advances the device one edge at a time, and turns pin-level sequences
//! into the operations a verification script needs:
//! 1. **Clocking:** `clock`, `reset`.
//! 2. **Stimulus:** `write`, `select_bank`, held `read`, back-to-back `read_pipelined`.
//! 3. **Checking:** `expect_read`, `expect_pipelined`, `check_pin_direction`, each
//!    reporting a [`CheckError`] that names the bank, address, and both values.
//!
//! Pins persist between calls, as they do on a real harness; every helper sets
//! all the pins its operation depends on before clocking.

use tracing::{info, warn};

use crate::common::error::{CheckError, ConfigError};
use crate::config::{ReadLatency, SramConfig};
use crate::soc::pins::{SramOutputs, SramPins};
use crate::soc::sram::Sram;
use crate::soc::traits::ClockedDevice;

/// Edges `rst_n` is held low by [`Testbench::run_smoke_sequence`].
pub const RESET_EDGES: u64 = 10;

/// Edges run after reset release before the first access.
pub const SETTLE_EDGES: u64 = 2;

/// Edges an address is held for a non-pipelined read.
pub const HELD_READ_EDGES: u64 = 2;

/// Pin-level driver for a [`ClockedDevice`].
#[derive(Debug)]
pub struct Testbench<D: ClockedDevice = Sram> {
    dut: D,
    pins: SramPins,
    bank: u8,
    last: SramOutputs,
    edges: u64,
}

impl Testbench<Sram> {
    /// Creates a testbench around a fresh reference model.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`SramConfig::validate`].
    pub fn with_config(config: &SramConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Sram::try_new(config)?))
    }
}

impl Default for Testbench<Sram> {
    fn default() -> Self {
        Self::new(Sram::new(&SramConfig::default()))
    }
}

impl<D: ClockedDevice> Testbench<D> {
    /// Wraps `dut`; pins start enabled, out of reset, reading address 0.
    pub fn new(dut: D) -> Self {
        let last = dut.outputs();
        Self {
            dut,
            pins: SramPins::default(),
            bank: 0,
            last,
            edges: 0,
        }
    }

    /// Device under test.
    pub const fn dut(&self) -> &D {
        &self.dut
    }

    /// Mutable device under test.
    pub const fn dut_mut(&mut self) -> &mut D {
        &mut self.dut
    }

    /// Current input pins.
    pub const fn pins(&self) -> &SramPins {
        &self.pins
    }

    /// Mutable input pins, for sequences the helpers do not cover.
    pub const fn pins_mut(&mut self) -> &mut SramPins {
        &mut self.pins
    }

    /// Outputs after the most recent edge.
    pub const fn outputs(&self) -> SramOutputs {
        self.last
    }

    /// Bank the stimulus last selected (raw, before wrapping).
    ///
    /// This is the value reported in [`CheckError`]s; the device may have
    /// wrapped it modulo its bank count.
    pub const fn selected_bank(&self) -> u8 {
        self.bank
    }

    /// Edges driven so far.
    pub const fn edges(&self) -> u64 {
        self.edges
    }

    /// Advances `cycles` edges with the current pins.
    ///
    /// # Returns
    ///
    /// The outputs after the last edge (unchanged if `cycles` is 0).
    pub fn clock(&mut self, cycles: u64) -> SramOutputs {
        for _ in 0..cycles {
            self.last = self.dut.edge(&self.pins);
            self.edges += 1;
        }
        self.last
    }

    /// Holds `rst_n` low for `cycles` edges, then releases it.
    ///
    /// The release takes effect on the next edge; no settling edges are run here.
    pub fn reset(&mut self, cycles: u64) -> SramOutputs {
        info!(device = self.dut.name(), cycles, "reset");
        self.pins.rst_n = false;
        let out = self.clock(cycles);
        self.pins.rst_n = true;
        self.bank = 0;
        out
    }

    /// Writes `data` to `addr` in the active bank (one edge).
    pub fn write(&mut self, addr: u16, data: u8) {
        self.pins.bank_select = false;
        self.pins.we = true;
        self.pins.addr = addr;
        self.pins.data_in = data;
        let _ = self.clock(1);
    }

    /// Selects `bank` (one edge). The device wraps it modulo its bank count.
    pub fn select_bank(&mut self, bank: u8) {
        self.pins.we = false;
        self.pins.bank_select = true;
        self.pins.data_in = bank;
        let _ = self.clock(1);
        self.pins.bank_select = false;
        self.bank = bank;
    }

    /// Non-pipelined read: holds `addr` for two edges and returns `data_out`.
    pub fn read(&mut self, addr: u16) -> Option<u8> {
        self.set_read(addr);
        self.clock(HELD_READ_EDGES).data_out
    }

    /// Pipelined read: presents one address per edge.
    ///
    /// Each address's byte appears on the edge after it is presented, while the
    /// next address is already on the pins; one trailing edge re-presents the
    /// final address to flush it.
    ///
    /// # Returns
    ///
    /// One entry per address, in order.
    pub fn read_pipelined(&mut self, addrs: &[u16]) -> Vec<Option<u8>> {
        let mut out = Vec::with_capacity(addrs.len());
        for (i, &addr) in addrs.iter().enumerate() {
            self.set_read(addr);
            let data = self.clock(1).data_out;
            if i > 0 {
                out.push(data);
            }
        }
        if addrs.last().is_some() {
            out.push(self.clock(1).data_out);
        }
        out
    }

    /// Reads `addr` with held timing and compares against `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Mismatch`] or [`CheckError::Undefined`] on failure.
    pub fn expect_read(&mut self, addr: u16, expected: u8) -> Result<(), CheckError> {
        let actual = self.read(addr);
        self.check(addr, expected, actual)
    }

    /// Reads every address of `expected` back-to-back and compares each byte.
    ///
    /// # Errors
    ///
    /// Returns the first [`CheckError`] in address order.
    pub fn expect_pipelined(&mut self, expected: &[(u16, u8)]) -> Result<(), CheckError> {
        let addrs: Vec<u16> = expected.iter().map(|&(addr, _)| addr).collect();
        let actual = self.read_pipelined(&addrs);
        expected
            .iter()
            .zip(actual)
            .try_for_each(|(&(addr, want), got)| self.check(addr, want, got))
    }

    /// Checks that the device drives none of the bidirectional pins.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::PinDirection`] with the observed mask otherwise.
    pub fn check_pin_direction(&self) -> Result<(), CheckError> {
        match self.dut.outputs().bidirectional_is_output {
            0 => Ok(()),
            output_enable => {
                let err = CheckError::PinDirection { output_enable };
                warn!(%err, "check failed");
                Err(err)
            }
        }
    }

    /// Runs the reference bring-up sequence against the device.
    ///
    /// Reset, pin-direction check, writes to addresses 8..=11, held read-back,
    /// a write to 12 and an overwrite of 10, a second read-back, then bank 3
    /// isolation. When `read_latency` is pipelined the sequence finishes with
    /// back-to-back reads of 8..=11 twice over.
    ///
    /// # Errors
    ///
    /// Returns the first failed check.
    pub fn run_smoke_sequence(&mut self, read_latency: ReadLatency) -> Result<(), CheckError> {
        self.pins.ena = true;
        let _ = self.reset(RESET_EDGES);
        let _ = self.clock(SETTLE_EDGES);
        self.check_pin_direction()?;

        info!("writing 0x55, 0x66, 0x77, 0x88 to 8..=11");
        for (addr, data) in [(8, 0x55), (9, 0x66), (10, 0x77), (11, 0x88)] {
            self.write(addr, data);
        }

        info!("held read-back of 8..=11");
        for (addr, data) in [(8, 0x55), (9, 0x66), (10, 0x77), (11, 0x88)] {
            self.expect_read(addr, data)?;
        }

        info!("writing 0x99 to 12, overwriting 10 with 0xaa");
        self.write(12, 0x99);
        self.write(10, 0xaa);
        for (addr, data) in [(12, 0x99), (10, 0xaa), (8, 0x55)] {
            self.expect_read(addr, data)?;
        }

        info!("bank 3 isolation");
        self.select_bank(3);
        self.write(10, 0xbb);
        self.write(11, 0xcc);
        self.expect_read(10, 0xbb)?;
        self.expect_read(11, 0xcc)?;
        self.select_bank(0);
        self.expect_read(10, 0xaa)?;
        self.expect_read(11, 0x88)?;

        if read_latency.is_pipelined() {
            info!("back-to-back reads of 8..=11");
            let pass: [(u16, u8); 4] = [(8, 0x55), (9, 0x66), (10, 0xaa), (11, 0x88)];
            let twice: Vec<(u16, u8)> = pass.iter().chain(pass.iter()).copied().collect();
            self.expect_pipelined(&twice)?;
        }

        info!(edges = self.edges, "smoke sequence passed");
        Ok(())
    }

    fn set_read(&mut self, addr: u16) {
        self.pins.we = false;
        self.pins.bank_select = false;
        self.pins.data_in = 0;
        self.pins.addr = addr;
    }

    fn check(&self, addr: u16, expected: u8, actual: Option<u8>) -> Result<(), CheckError> {
        match CheckError::compare(self.bank, addr, expected, actual) {
            None => Ok(()),
            Some(err) => {
                warn!(%err, "check failed");
                Err(err)
            }
        }
    }
}
