//! SRAM Model Unit Tests.
//!
//! Drives the model one decoded command at a time and checks the output
//! latch, the bank register, and the in-flight read after every edge.

use rstest::rstest;
use sram_core::config::{ReadLatency, SramConfig};
use sram_core::soc::{ClockedDevice, Command, Sram, SramPins};

fn sram(read_latency: ReadLatency) -> Sram {
    let mut sram = Sram::new(&SramConfig::default().with_read_latency(read_latency));
    sram.step(Command::Reset);
    for (addr, data) in [(8, 0x55), (9, 0x66), (10, 0x77), (11, 0x88)] {
        sram.step(Command::Write { addr, data });
    }
    sram
}

fn read(sram: &mut Sram, addr: u16) -> Option<u8> {
    sram.step(Command::Read { addr });
    sram.data_out()
}

// ══════════════════════════════════════════════════════════
// 1. Power-on and reset
// ══════════════════════════════════════════════════════════

#[test]
fn power_on_state_undefined() {
    let sram = Sram::new(&SramConfig::default());
    assert_eq!(sram.data_out(), None);
    assert_eq!(sram.active_bank().val(), 0);
    assert_eq!(sram.in_flight(), None);
    assert_eq!(sram.peek(0, 0), None);
}

#[test]
fn try_new_rejects_invalid_config() {
    let config = SramConfig {
        banks: 0,
        ..SramConfig::default()
    };
    assert!(Sram::try_new(&config).is_err());
    assert!(Sram::try_new(&SramConfig::default()).is_ok());
}

#[rstest]
#[case(SramConfig { banks: 0, ..SramConfig::default() }, 1, 64)]
#[case(SramConfig { address_width: 64, ..SramConfig::default() }, 4, 1 << 16)]
fn new_clamps_out_of_range_geometry(
    #[case] config: SramConfig,
    #[case] banks: usize,
    #[case] bank_size: usize,
) {
    let mut sram = Sram::new(&config);
    assert_eq!(sram.memory().bank_count(), banks);
    assert_eq!(sram.memory().bank_size(), bank_size);

    sram.step(Command::Reset);
    sram.step(Command::Write { addr: 1, data: 0x55 });
    let _ = read(&mut sram, 1);
    assert_eq!(read(&mut sram, 1), Some(0x55));
}

#[test]
fn reset_clears_output_bank_and_pipeline() {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.step(Command::SelectBank(2));
    sram.step(Command::Read { addr: 8 });
    assert!(sram.in_flight().is_some());

    sram.step(Command::Reset);
    assert_eq!(sram.data_out(), Some(0));
    assert_eq!(sram.active_bank().val(), 0);
    assert_eq!(sram.in_flight(), None);
}

#[test]
fn reset_preserves_storage() {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.step(Command::Reset);
    assert_eq!(sram.peek(0, 8), Some(0x55));
    assert_eq!(read(&mut sram, 8), Some(0));
    assert_eq!(read(&mut sram, 8), Some(0x55));
}

#[test]
fn reset_wins_over_disabled() {
    let mut sram = sram(ReadLatency::OneCycle);
    let _ = read(&mut sram, 9);
    assert_eq!(read(&mut sram, 9), Some(0x66));

    let pins = SramPins {
        ena: false,
        rst_n: false,
        ..SramPins::default()
    };
    let out = sram.edge(&pins);
    assert_eq!(out.data_out, Some(0));
}

// ══════════════════════════════════════════════════════════
// 2. Writes
// ══════════════════════════════════════════════════════════

#[test]
fn write_leaves_data_out_alone() {
    let mut sram = sram(ReadLatency::OneCycle);
    assert_eq!(sram.data_out(), Some(0));
    sram.step(Command::Write { addr: 12, data: 0x99 });
    assert_eq!(sram.data_out(), Some(0));
    assert_eq!(sram.peek(0, 12), Some(0x99));
}

#[test]
fn overwrite_replaces_only_target() {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.step(Command::Write { addr: 10, data: 0xaa });
    assert_eq!(sram.peek(0, 10), Some(0xaa));
    assert_eq!(sram.peek(0, 8), Some(0x55));
    assert_eq!(sram.peek(0, 11), Some(0x88));
}

#[test]
fn read_after_write_same_address() {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.step(Command::Write { addr: 20, data: 0x11 });
    let _ = read(&mut sram, 20);
    assert_eq!(read(&mut sram, 20), Some(0x11));
}

// ══════════════════════════════════════════════════════════
// 3. Read timing: OneCycle (pipelined)
// ══════════════════════════════════════════════════════════

#[test]
fn one_cycle_back_to_back() {
    let mut sram = sram(ReadLatency::OneCycle);
    // Nothing in flight after the writes; output still holds the reset value.
    assert_eq!(read(&mut sram, 8), Some(0));
    assert_eq!(read(&mut sram, 9), Some(0x55));
    assert_eq!(read(&mut sram, 10), Some(0x66));
    assert_eq!(read(&mut sram, 11), Some(0x77));
    assert_eq!(read(&mut sram, 8), Some(0x88));
    assert_eq!(read(&mut sram, 8), Some(0x55));
}

#[test]
fn one_cycle_write_drops_in_flight_read() {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.step(Command::Read { addr: 8 });
    sram.step(Command::Write { addr: 30, data: 0x01 });
    assert_eq!(sram.in_flight(), None);
    assert_eq!(read(&mut sram, 9), Some(0));
    assert_eq!(read(&mut sram, 9), Some(0x66));
}

#[rstest]
#[case(Command::Write { addr: 30, data: 0x01 })]
#[case(Command::SelectBank(0))]
fn one_cycle_read_abandoned_by_following_edge(#[case] next: Command) {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.step(Command::Read { addr: 8 });
    sram.step(next);
    sram.step(Command::Hold);
    assert_eq!(sram.data_out(), Some(0));
    assert_eq!(sram.stats().reads_retired, 0);
}

#[test]
fn one_cycle_hold_keeps_in_flight_read() {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.step(Command::Read { addr: 8 });
    sram.step(Command::Hold);
    sram.step(Command::Hold);
    assert_eq!(sram.data_out(), Some(0));
    assert_eq!(read(&mut sram, 9), Some(0x55));
}

// ══════════════════════════════════════════════════════════
// 4. Read timing: TwoCycle (non-pipelined)
// ══════════════════════════════════════════════════════════

#[test]
fn two_cycle_requires_stable_address() {
    let mut sram = sram(ReadLatency::TwoCycle);
    assert_eq!(read(&mut sram, 8), Some(0));
    // Address changed before the read completed: restart, output unchanged.
    assert_eq!(read(&mut sram, 9), Some(0));
    assert_eq!(read(&mut sram, 9), Some(0x66));
}

#[test]
fn two_cycle_back_to_back_never_completes() {
    let mut sram = sram(ReadLatency::TwoCycle);
    for addr in [8, 9, 10, 11, 8, 9] {
        assert_eq!(read(&mut sram, addr), Some(0));
    }
}

#[test]
fn two_cycle_held_read_is_stable() {
    let mut sram = sram(ReadLatency::TwoCycle);
    let _ = read(&mut sram, 11);
    for _ in 0..4 {
        assert_eq!(read(&mut sram, 11), Some(0x88));
    }
}

#[test]
fn two_cycle_bank_change_restarts_read() {
    let mut sram = sram(ReadLatency::TwoCycle);
    sram.step(Command::Read { addr: 8 });
    sram.step(Command::SelectBank(1));
    assert_eq!(read(&mut sram, 8), Some(0));
    // Bank 1 address 8 was never written.
    assert_eq!(read(&mut sram, 8), None);
}

#[rstest]
#[case(ReadLatency::OneCycle)]
#[case(ReadLatency::TwoCycle)]
fn held_read_works_in_both_modes(#[case] latency: ReadLatency) {
    let mut sram = sram(latency);
    for (addr, data) in [(8, 0x55), (9, 0x66), (10, 0x77), (11, 0x88)] {
        let _ = read(&mut sram, addr);
        assert_eq!(read(&mut sram, addr), Some(data), "addr({addr:#04x})");
    }
}

// ══════════════════════════════════════════════════════════
// 5. Banks
// ══════════════════════════════════════════════════════════

#[test]
fn bank_select_leaves_data_out_alone() {
    let mut sram = sram(ReadLatency::OneCycle);
    let _ = read(&mut sram, 8);
    assert_eq!(read(&mut sram, 8), Some(0x55));
    sram.step(Command::SelectBank(3));
    assert_eq!(sram.data_out(), Some(0x55));
    assert_eq!(sram.active_bank().val(), 3);
}

#[rstest]
#[case(4, 0)]
#[case(5, 1)]
#[case(255, 3)]
fn bank_select_wraps(#[case] raw: u8, #[case] expected: u8) {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.step(Command::SelectBank(raw));
    assert_eq!(sram.active_bank().val(), expected);
}

#[test]
fn bank_select_held_reevaluated_every_edge() {
    let mut sram = sram(ReadLatency::OneCycle);
    let mut pins = SramPins {
        bank_select: true,
        data_in: 1,
        ..SramPins::default()
    };
    let _ = sram.edge(&pins);
    assert_eq!(sram.active_bank().val(), 1);
    pins.data_in = 2;
    let _ = sram.edge(&pins);
    assert_eq!(sram.active_bank().val(), 2);
    pins.data_in = 3;
    let _ = sram.edge(&pins);
    assert_eq!(sram.active_bank().val(), 3);
    assert_eq!(sram.stats().bank_switches, 3);
}

#[test]
fn bank_isolation_round_trip() {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.step(Command::Write { addr: 10, data: 0xaa });
    sram.step(Command::SelectBank(3));
    sram.step(Command::Write { addr: 10, data: 0xbb });
    sram.step(Command::Write { addr: 11, data: 0xcc });

    let _ = read(&mut sram, 10);
    assert_eq!(read(&mut sram, 10), Some(0xbb));

    sram.step(Command::SelectBank(0));
    let _ = read(&mut sram, 10);
    assert_eq!(read(&mut sram, 10), Some(0xaa));

    sram.step(Command::SelectBank(3));
    let _ = read(&mut sram, 11);
    assert_eq!(read(&mut sram, 11), Some(0xcc));
}

// ══════════════════════════════════════════════════════════
// 6. Addressing and pins
// ══════════════════════════════════════════════════════════

#[test]
fn address_wraps_instead_of_faulting() {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.step(Command::Write { addr: 64 + 3, data: 0x42 });
    assert_eq!(sram.peek(0, 3), Some(0x42));
    let _ = read(&mut sram, 0xFFC3);
    assert_eq!(read(&mut sram, 3), Some(0x42));
}

#[test]
fn disabled_edges_block_writes() {
    let mut sram = sram(ReadLatency::OneCycle);
    let pins = SramPins {
        ena: false,
        we: true,
        addr: 40,
        data_in: 0x12,
        ..SramPins::default()
    };
    let _ = sram.edge(&pins);
    assert_eq!(sram.peek(0, 40), None);
    assert_eq!(sram.stats().hold_edges, 1);
}

#[test]
fn undefined_cell_reads_as_x() {
    let mut sram = sram(ReadLatency::OneCycle);
    let _ = read(&mut sram, 50);
    assert_eq!(read(&mut sram, 50), None);
    assert_eq!(sram.stats().reads_undefined, 1);
}

#[test]
fn poke_preloads_without_write_edge() {
    let mut sram = sram(ReadLatency::OneCycle);
    sram.poke(2, 5, 0xEE);
    assert_eq!(sram.stats().writes, 4);
    sram.step(Command::SelectBank(2));
    let _ = read(&mut sram, 5);
    assert_eq!(read(&mut sram, 5), Some(0xEE));
}

#[test]
fn bidirectional_pins_never_driven() {
    let mut sram = sram(ReadLatency::OneCycle);
    assert_eq!(sram.bidirectional_is_output(), 0);
    let out = sram.edge(&SramPins::default());
    assert_eq!(out.bidirectional_is_output, 0);
    assert_eq!(sram.name(), "SRAM");
}
