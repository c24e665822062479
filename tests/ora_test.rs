//! Tests for the ORA (Logical Inclusive OR) instruction.
//!
//! Tests cover:
//! - Zero page operand and Z/N flags

use m6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_ora_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x05, 0x20]);
    cpu.memory_mut()[0x0020] = 0x80;
    cpu.set_a(0x01);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_n());
}
