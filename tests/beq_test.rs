//! Tests for the BEQ (Branch if Equal) instruction.
//!
//! Tests cover:
//! - BEQ and BNE against the Z flag

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
fn test_beq_and_bne() {
    let mut cpu = setup_cpu();
    cpu.set_flag_z(true);

    place_branch(&mut cpu, 0x8000, 0xF0, 0x10);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8012);

    place_branch(&mut cpu, 0x8000, 0xD0, 0x10);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8002);
}
