//! Tests for the TAX (Transfer Accumulator to X) instruction.
//!
//! Tests cover:
//! - Copy and Z/N updates

use m6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_tax() {
    let mut cpu = setup_cpu();
    cpu.memory_mut()[0x8000] = 0xAA;
    cpu.set_a(0x80);

    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8001);
}
