//! Execution loop tests
//!
//! Verifies the fetch-decode-execute cycle, cycle budgets and the handling of
//! undefined opcodes under both policies.

use m6502::{
    CpuConfig, ExecutionError, ExecutionState, FlatMemory, IllegalOpcodePolicy, MemoryBus, CPU,
};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn setup_cpu_with_policy(policy: IllegalOpcodePolicy) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::with_config(memory, CpuConfig::default().with_illegal_opcode_policy(policy))
}

// ========== step() ==========

#[test]
fn test_step_increments_cycle_counter() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xEA);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 2, "NOP should add 2 cycles");
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_step_advances_program_counter() {
    let mut cpu = setup_cpu();
    // NOP ; LDA #$01 ; LDA $1234
    cpu.memory_mut()
        .load(0x8000, &[0xEA, 0xA9, 0x01, 0xAD, 0x34, 0x12]);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8001);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8003);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8006);
}

#[test]
fn test_step_returns_to_fetching() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xEA);

    cpu.step().unwrap();

    assert_eq!(cpu.state(), ExecutionState::Fetching);
}

#[test]
fn test_pc_wraps_at_top_of_memory() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0xFFFF);
    cpu.memory_mut().write(0xFFFF, 0xEA);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0000);
}

#[test]
fn test_operand_bytes_wrap_at_top_of_memory() {
    let mut cpu = setup_cpu();
    // LDA #imm with the immediate byte at $0000
    cpu.set_pc(0xFFFF);
    cpu.memory_mut().write(0xFFFF, 0xA9);
    cpu.memory_mut().write(0x0000, 0x5A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.pc(), 0x0001);
}

// ========== execute() ==========

#[test]
fn test_execute_stops_at_budget() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xEA; 8]);

    let used = cpu.execute(6).unwrap();

    assert_eq!(used, 6);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_execute_overshoots_by_at_most_one_instruction() {
    let mut cpu = setup_cpu();
    // LDA $1234 (4 cycles) then NOPs
    cpu.memory_mut().load(0x8000, &[0xAD, 0x34, 0x12, 0xEA, 0xEA]);

    let used = cpu.execute(3).unwrap();

    assert_eq!(used, 4, "instructions are never split");
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_execute_budget_is_relative() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xEA; 8]);

    cpu.execute(4).unwrap();
    let used = cpu.execute(4).unwrap();

    assert_eq!(used, 4);
    assert_eq!(cpu.cycles(), 8);
    assert_eq!(cpu.pc(), 0x8004);
}

#[test]
fn test_execute_zero_budget_is_noop() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xEA);
    let before = cpu.registers();

    assert_eq!(cpu.execute(0), Ok(0));
    assert_eq!(cpu.registers(), before);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_execute_simple_program() {
    let mut cpu = setup_cpu();
    // LDA #$05 ; CLC ; ADC #$03 ; STA $0200
    cpu.memory_mut()
        .load(0x8000, &[0xA9, 0x05, 0x18, 0x69, 0x03, 0x8D, 0x00, 0x02]);

    let used = cpu.execute(10).unwrap();

    assert_eq!(used, 10);
    assert_eq!(cpu.memory()[0x0200], 0x08);
    assert_eq!(cpu.pc(), 0x8008);
}

// ========== Illegal Opcodes ==========

#[test]
fn test_illegal_opcode_traps_by_default() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x02);

    match cpu.step() {
        Err(ExecutionError::IllegalOpcode { opcode, address }) => {
            assert_eq!(opcode, 0x02);
            assert_eq!(address, 0x8000);
        }
        other => panic!("Expected IllegalOpcode, got {:?}", other),
    }

    assert_eq!(cpu.pc(), 0x8000, "PC still addresses the bad byte");
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_illegal_opcode_stops_execute() {
    let mut cpu = setup_cpu();
    // NOP ; NOP ; <undefined>
    cpu.memory_mut().load(0x8000, &[0xEA, 0xEA, 0xFF]);

    let result = cpu.execute(100);

    assert_eq!(
        result,
        Err(ExecutionError::IllegalOpcode {
            opcode: 0xFF,
            address: 0x8002
        })
    );
    assert_eq!(cpu.cycles(), 4, "cycles spent before the trap remain");
}

#[test]
fn test_illegal_opcode_error_message() {
    let err = ExecutionError::IllegalOpcode {
        opcode: 0x02,
        address: 0x8000,
    };

    assert_eq!(err.to_string(), "illegal opcode 0x02 at 0x8000");
}

#[test]
fn test_illegal_opcode_nop_policy() {
    let mut cpu = setup_cpu_with_policy(IllegalOpcodePolicy::Nop);
    cpu.memory_mut().load(0x8000, &[0x02, 0xA9, 0x42]);
    let status = cpu.status();

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.status(), status);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_nop_policy_runs_through_undefined_region() {
    let mut cpu = setup_cpu_with_policy(IllegalOpcodePolicy::Nop);
    cpu.memory_mut().load(0x8000, &[0x02, 0x03, 0x04, 0x07]);

    let used = cpu.execute(8).unwrap();

    assert_eq!(used, 8);
    assert_eq!(cpu.pc(), 0x8004);
}

#[test]
fn test_config_is_reported() {
    let cpu = setup_cpu_with_policy(IllegalOpcodePolicy::Nop);
    assert_eq!(cpu.config().illegal_opcode_policy, IllegalOpcodePolicy::Nop);

    let cpu = setup_cpu();
    assert_eq!(cpu.config(), CpuConfig::default());
    assert_eq!(cpu.config().illegal_opcode_policy, IllegalOpcodePolicy::Trap);
}
