//! Fuzz target for CPU execution.
//!
//! Builds an arbitrary register file, memory window and interrupt line state,
//! then runs a short cycle budget and checks the engine's invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use m6502::{CpuConfig, ExecutionState, FlatMemory, IllegalOpcodePolicy, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    nmi: bool,
    irq: bool,
    skip_illegal: bool,
}

/// Memory regions the program is most likely to touch
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes at 0x8000
    program: [u8; 32],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Data window at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(mut memory) = FlatMemory::with_vectors(&[0xA000, 0x8000, 0x9000]) else {
        return;
    };
    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let policy = if input.cpu_state.skip_illegal {
        IllegalOpcodePolicy::Nop
    } else {
        IllegalOpcodePolicy::Trap
    };
    let mut cpu = CPU::with_config(memory, CpuConfig::default().with_illegal_opcode_policy(policy));

    let state = &input.cpu_state;
    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_sp(state.sp);
    cpu.set_status(state.status);
    if state.nmi {
        cpu.trigger_nmi();
    }
    cpu.set_irq(state.irq);

    let budget = input.budget as u64;
    let result = cpu.execute(budget);

    assert_eq!(cpu.status() & 0x20, 0x20, "bit 5 must always read as 1");
    assert_eq!(cpu.state(), ExecutionState::Fetching);

    match result {
        // The longest step is 7 cycles, so the overshoot is at most 6.
        Ok(used) => {
            assert_eq!(used, cpu.cycles());
            assert!(used >= budget && used < budget + 7);
        }
        Err(_) => assert!(!state.skip_illegal, "the no-op policy never fails"),
    }
});
