//! Device activity statistics.
//!
//! This module tracks what the device did on each clock edge. It provides:
//! 1. **Edges:** Total edges, reset edges, and disabled (hold) edges.
//! 2. **Accesses:** Reads sampled and retired, writes, and undefined reads.
//! 3. **Banking:** Number of bank-select edges.

use std::fmt;

/// Per-device activity counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SramStats {
    /// Total clock edges seen.
    pub edges: u64,
    /// Edges sampled with `rst_n` low.
    pub reset_edges: u64,
    /// Edges sampled with `ena` low.
    pub hold_edges: u64,
    /// Read edges (addresses sampled for reading).
    pub reads_sampled: u64,
    /// Reads latched into `data_out`.
    pub reads_retired: u64,
    /// Retired reads of cells that were never written.
    pub reads_undefined: u64,
    /// Write edges.
    pub writes: u64,
    /// Bank-select edges.
    pub bank_switches: u64,
}

impl SramStats {
    /// Fraction of sampled reads that reached `data_out`, in percent.
    pub fn retire_rate(&self) -> f64 {
        if self.reads_sampled == 0 {
            0.0
        } else {
            (self.reads_retired as f64 / self.reads_sampled as f64) * 100.0
        }
    }

    /// Prints the statistics to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SramStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = self.edges.max(1) as f64;
        writeln!(f, "==========================================================")?;
        writeln!(f, "SRAM MODEL STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_edges                {}", self.edges)?;
        writeln!(
            f,
            "  edges.reset            {} ({:.2}%)",
            self.reset_edges,
            (self.reset_edges as f64 / edges) * 100.0
        )?;
        writeln!(
            f,
            "  edges.hold             {} ({:.2}%)",
            self.hold_edges,
            (self.hold_edges as f64 / edges) * 100.0
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "ACCESSES")?;
        writeln!(f, "  op.write               {}", self.writes)?;
        writeln!(f, "  op.read.sampled        {}", self.reads_sampled)?;
        writeln!(
            f,
            "  op.read.retired        {} ({:.2}%)",
            self.reads_retired,
            self.retire_rate()
        )?;
        writeln!(f, "  op.read.undefined      {}", self.reads_undefined)?;
        writeln!(f, "  op.bank_select         {}", self.bank_switches)?;
        write!(f, "==========================================================")
    }
}
