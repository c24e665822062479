//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or on memory depending on the addressing mode.
//! The bit shifted out lands in C; Z and N follow the result.

use crate::addressing::Operand;
use crate::instructions::write_back;
use crate::{MemoryBus, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = operand.value;
    finish_shift(cpu, operand, value << 1, value & 0x80 != 0);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = operand.value;
    finish_shift(cpu, operand, value >> 1, value & 0x01 != 0);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Bit 0 is filled with the old carry, bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = operand.value;
    let result = (value << 1) | cpu.regs.p.carry() as u8;
    finish_shift(cpu, operand, result, value & 0x80 != 0);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Bit 7 is filled with the old carry, bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = operand.value;
    let result = (value >> 1) | ((cpu.regs.p.carry() as u8) << 7);
    finish_shift(cpu, operand, result, value & 0x01 != 0);
}

fn finish_shift<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand, result: u8, carry: bool) {
    write_back(cpu, operand, result);
    cpu.regs.p.set_carry(carry);
    cpu.regs.update_zero_and_negative(result);
}
