//! Banked SRAM reference model.
//!
//! A cycle-accurate model of a synchronous single-port memory. On every rising
//! edge it samples [`SramPins`], decodes them into a [`Command`], and updates:
//! 1. **Storage:** N banks of `2^A` bytes; writes complete on the sampling edge.
//! 2. **Bank register:** Selects the bank used by reads and writes; persists until
//!    the next bank-select edge.
//! 3. **Read pipeline:** At most one sampled-but-not-yet-latched read location.
//! 4. **Output latch:** `data_out`, updated only when a read retires or on reset.
//!
//! Read retirement depends on [`ReadLatency`]:
//! - `OneCycle`: the location sampled on the previous edge is latched on the next
//!   read edge, so addresses may change on every edge.
//! - `TwoCycle`: a location is latched only once it has been sampled on two
//!   consecutive read edges.
//!
//! Write and bank-select edges leave `data_out` alone and drop any in-flight read.
//! In `OneCycle` mode a sampled read is latched by the next read edge (disabled
//! edges in between keep it pending); a write or bank select in between
//! abandons it, so its byte never reaches `data_out`.

use tracing::{debug, trace};

use crate::common::addr::{BankIndex, Location};
use crate::common::constants::{BIDIR_OUTPUT_ENABLE, RESET_DATA_OUT};
use crate::common::error::ConfigError;
use crate::config::{ReadLatency, SramConfig};
use crate::soc::memory::BankedMemory;
use crate::soc::pins::{Command, SramOutputs, SramPins};
use crate::soc::traits::ClockedDevice;
use crate::stats::SramStats;

/// Banked SRAM device.
#[derive(Clone, Debug)]
pub struct Sram {
    read_latency: ReadLatency,
    memory: BankedMemory,
    active_bank: BankIndex,
    in_flight: Option<Location>,
    data_out: Option<u8>,
    stats: SramStats,
}

impl Sram {
    /// Creates a device from a validated configuration.
    ///
    /// Storage and `data_out` start undefined and the active bank is 0.
    /// Out-of-range geometry is clamped into the supported range; use
    /// [`Sram::try_new`] to reject it instead.
    pub fn new(config: &SramConfig) -> Self {
        debug!(
            address_width = config.address_width,
            banks = config.banks,
            read_latency = ?config.read_latency,
            "creating SRAM model"
        );
        Self {
            read_latency: config.read_latency,
            memory: BankedMemory::new(config),
            active_bank: BankIndex::default(),
            in_flight: None,
            data_out: None,
            stats: SramStats::default(),
        }
    }

    /// Validates `config` and creates a device from it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`SramConfig::validate`].
    pub fn try_new(config: &SramConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Applies one decoded command as a single clock edge.
    pub fn step(&mut self, cmd: Command) {
        self.stats.edges += 1;
        trace!(edge = self.stats.edges, ?cmd, "edge");

        match cmd {
            Command::Reset => {
                debug!(edge = self.stats.edges, "reset asserted");
                self.stats.reset_edges += 1;
                self.data_out = Some(RESET_DATA_OUT);
                self.in_flight = None;
                self.active_bank = BankIndex::default();
            }
            Command::Hold => {
                self.stats.hold_edges += 1;
            }
            Command::SelectBank(raw) => {
                self.stats.bank_switches += 1;
                self.active_bank = BankIndex::wrap(raw, self.memory.bank_count());
                self.in_flight = None;
                debug!(raw, bank = %self.active_bank, "bank select");
            }
            Command::Write { addr, data } => {
                self.stats.writes += 1;
                let loc = self.memory.locate(self.active_bank.val(), addr);
                self.memory.write(loc, data);
                self.in_flight = None;
            }
            Command::Read { addr } => {
                self.stats.reads_sampled += 1;
                let loc = self.memory.locate(self.active_bank.val(), addr);
                let ready = match self.read_latency {
                    ReadLatency::OneCycle => self.in_flight,
                    ReadLatency::TwoCycle => self.in_flight.filter(|prev| *prev == loc),
                };
                if let Some(prev) = ready {
                    self.retire(prev);
                }
                self.in_flight = Some(loc);
            }
        }
    }

    /// Latches the cell at `loc` into `data_out`.
    fn retire(&mut self, loc: Location) {
        let val = self.memory.read(loc);
        self.stats.reads_retired += 1;
        if val.is_none() {
            self.stats.reads_undefined += 1;
        }
        trace!(%loc, ?val, "read retired");
        self.data_out = val;
    }

    /// Most recently latched byte; `None` while undefined.
    pub const fn data_out(&self) -> Option<u8> {
        self.data_out
    }

    /// Currently selected bank.
    pub const fn active_bank(&self) -> BankIndex {
        self.active_bank
    }

    /// Location sampled for reading and not yet latched, if any.
    pub const fn in_flight(&self) -> Option<Location> {
        self.in_flight
    }

    /// Read timing mode of this instance.
    pub const fn read_latency(&self) -> ReadLatency {
        self.read_latency
    }

    /// Output-enable mask of the bidirectional pins.
    ///
    /// Every bidirectional pin carries `data_in`, so this is always 0.
    pub const fn bidirectional_is_output(&self) -> u8 {
        BIDIR_OUTPUT_ENABLE
    }

    /// Backing storage.
    pub const fn memory(&self) -> &BankedMemory {
        &self.memory
    }

    /// Reads a cell directly, bypassing the pins and the pipeline.
    pub fn peek(&self, bank: u8, addr: u16) -> Option<u8> {
        self.memory.read(self.memory.locate(bank, addr))
    }

    /// Writes a cell directly, bypassing the pins and the pipeline.
    ///
    /// Used to preload contents; does not count as a write edge.
    pub fn poke(&mut self, bank: u8, addr: u16, val: u8) {
        let loc = self.memory.locate(bank, addr);
        self.memory.write(loc, val);
    }

    /// Activity counters.
    pub const fn stats(&self) -> &SramStats {
        &self.stats
    }
}

impl ClockedDevice for Sram {
    fn name(&self) -> &str {
        "SRAM"
    }

    fn edge(&mut self, pins: &SramPins) -> SramOutputs {
        self.step(Command::decode(pins));
        self.outputs()
    }

    fn outputs(&self) -> SramOutputs {
        SramOutputs {
            data_out: self.data_out,
            bidirectional_is_output: self.bidirectional_is_output(),
        }
    }
}
