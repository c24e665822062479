//! Tests for the RTS (Return from Subroutine) instruction.
//!
//! Tests cover:
//! - Stack pointer wraparound on pull

use m6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_rts_wraps_stack_pointer() {
    let mut cpu = setup_cpu();
    cpu.memory_mut()[0x8000] = 0x60;
    cpu.set_sp(0xFF);
    cpu.memory_mut()[0x0100] = 0x10;
    cpu.memory_mut()[0x0101] = 0x20;

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x2011);
    assert_eq!(cpu.sp(), 0x01);
}
