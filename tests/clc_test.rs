//! Tests for the CLC (Clear Carry Flag) instruction.
//!
//! Tests cover:
//! - Flag instructions touch only their own flag

use m6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn run_single(cpu: &mut CPU<FlatMemory>, opcode: u8) {
    cpu.memory_mut()[0x8000] = opcode;
    cpu.set_pc(0x8000);
    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_flag_instructions_touch_only_their_flag() {
    let mut cpu = setup_cpu();
    cpu.set_status(0xFF);

    run_single(&mut cpu, 0x18);
    assert_eq!(cpu.status(), 0xFE);

    run_single(&mut cpu, 0xB8);
    assert_eq!(cpu.status(), 0xBE);

    run_single(&mut cpu, 0xD8);
    assert_eq!(cpu.status(), 0xB6);
}
