//! Tests for the TXS (Transfer X to Stack Pointer) instruction.
//!
//! Tests cover:
//! - Flags untouched
//! - TXS / TSX round trip

use m6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_txs_does_not_touch_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut()[0x8000] = 0x9A;
    cpu.set_x(0x00);
    let status = cpu.status();

    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.stack_pointer(), 0x0100);
    assert_eq!(cpu.status(), status);
    assert!(!cpu.flag_z());
}

#[test]
fn test_txs_tsx_round_trip() {
    let mut cpu = setup_cpu();
    // LDX #$80 ; TXS ; LDX #$00 ; TSX
    cpu.memory_mut().load(0x8000, &[0xA2, 0x80, 0x9A, 0xA2, 0x00, 0xBA]);

    cpu.execute(8).unwrap();

    assert_eq!(cpu.sp(), 0x80);
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
}
