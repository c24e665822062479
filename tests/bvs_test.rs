//! Tests for the BVS (Branch if Overflow Set) instruction.
//!
//! Tests cover:
//! - BVS and BVC against the V flag

use m6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Places a branch at `at` and points PC there.
fn place_branch(cpu: &mut CPU<FlatMemory>, at: u16, opcode: u8, offset: u8) {
    cpu.memory_mut().load(at, &[opcode, offset]);
    cpu.set_pc(at);
}

#[test]
fn test_bvs_and_bvc() {
    let mut cpu = setup_cpu();

    place_branch(&mut cpu, 0x8000, 0x70, 0x08);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8002);

    place_branch(&mut cpu, 0x8000, 0x50, 0x08);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x800A);
}
