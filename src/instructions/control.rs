//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: Call and return
//! - RTI: Return from interrupt
//! - BRK: Force interrupt
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::addressing::Operand;
use crate::interrupts::IRQ_VECTOR;
use crate::status::Status;
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Both forms arrive here with the target already resolved, including the
/// indirect-mode page wrap bug: JMP ($10FF) reads its high byte from $1000.
///
/// Flags affected: None
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    if let Some(target) = operand.address {
        cpu.regs.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (return address - 1),
/// high byte first, then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let return_address = cpu.regs.pc.wrapping_sub(1);
    cpu.push_word(return_address);

    if let Some(target) = operand.address {
        cpu.regs.pc = target;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the address pushed by JSR and resumes at the byte after it.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status (B dropped, bit 5 forced) and then PC. Unlike RTS, the
/// pulled PC is used as-is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.regs.p = Status::from_stack_byte(status);
    cpu.regs.pc = cpu.pull_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is one byte but pushes PC+2, leaving a padding byte after it.
///
/// Cycle timing: 7 cycles (fixed)
///
/// Flags affected:
/// - B: Set to 1 (in the pushed status byte, not in the actual flag)
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    // PC already points past the opcode; skip the padding byte too.
    cpu.regs.pc = cpu.regs.pc.wrapping_add(1);
    cpu.enter_handler(IRQ_VECTOR, true);
}
