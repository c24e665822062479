//! Tests for the SEI (Set Interrupt Disable) instruction.
//!
//! Tests cover:
//! - SEI and CLI

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
fn test_sei_and_cli() {
    let mut cpu = setup_cpu();

    run_single(&mut cpu, 0x58);
    assert!(!cpu.flag_i());

    run_single(&mut cpu, 0x78);
    assert!(cpu.flag_i());
}
