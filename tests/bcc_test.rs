//! Tests for the BCC (Branch if Carry Clear) instruction.
//!
//! Tests cover:
//! - Taken and not taken timing
//! - Forward and backward page crossings
//! - Page check against the following instruction

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
fn test_bcc_taken_when_carry_clear() {
    let mut cpu = setup_cpu();
    place_branch(&mut cpu, 0x8000, 0x90, 0x05);
    cpu.set_flag_c(false);
    let status = cpu.status();

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8000 + 2 + 5);
    assert_eq!(cycles, 3);
    assert_eq!(cpu.cycles(), 3);
    assert_eq!(cpu.status(), status);
}

#[test]
fn test_bcc_not_taken_when_carry_set() {
    let mut cpu = setup_cpu();
    place_branch(&mut cpu, 0x8000, 0x90, 0x05);
    cpu.set_flag_c(true);
    let status = cpu.status();

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cycles, 2);
    assert_eq!(cpu.status(), status);
}

#[test]
fn test_bcc_forward_page_cross() {
    let mut cpu = setup_cpu();
    // Next instruction at $80F2, target $80F2 + $10 = $8102
    place_branch(&mut cpu, 0x80F0, 0x90, 0x10);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8102);
    assert_eq!(cycles, 4);
}

#[test]
fn test_bcc_backward_page_cross() {
    let mut cpu = setup_cpu();
    // $8002 - 3 = $7FFF
    place_branch(&mut cpu, 0x8000, 0x90, 0xFD);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x7FFF);
    assert_eq!(cycles, 4);
}

#[test]
fn test_branch_to_itself() {
    let mut cpu = setup_cpu();
    place_branch(&mut cpu, 0x8010, 0x90, 0xFE);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.pc(), 0x8010);
}

#[test]
fn test_branch_page_check_uses_following_instruction() {
    let mut cpu = setup_cpu();
    // Branch at $80FE: next instruction $8100, target $8100 + 1 = $8101.
    // Same page as the next instruction, so no extra cycle.
    place_branch(&mut cpu, 0x80FE, 0x90, 0x01);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.pc(), 0x8101);
}
