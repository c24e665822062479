//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Compare a register with memory
//! - BIT: Bit test
//!
//! ADC and SBC honour the D flag. In decimal mode the accumulator result is
//! BCD; the flags follow the NMOS rules (Z from the binary sum, N and V from
//! the intermediate high digit for ADC, all flags binary for SBC).

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. Updates C, Z, V and N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let a = cpu.regs.a;
    let value = operand.value;
    let carry_in = cpu.regs.p.carry() as u8;

    if cpu.regs.p.decimal() {
        cpu.regs.a = adc_decimal(cpu, a, value, carry_in);
        return;
    }

    let sum = a as u16 + value as u16 + carry_in as u16;
    let result = sum as u8;

    cpu.regs.p.set_carry(sum > 0xFF);
    // Overflow when both inputs share a sign the result does not.
    cpu.regs.p.set_overflow((a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.regs.update_zero_and_negative(result);

    cpu.regs.a = result;
}

fn adc_decimal<M: MemoryBus>(cpu: &mut CPU<M>, a: u8, value: u8, carry_in: u8) -> u8 {
    let binary = a.wrapping_add(value).wrapping_add(carry_in);

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in as u16;
    let mut hi = (a >> 4) as u16 + (value >> 4) as u16;
    if lo > 0x09 {
        lo += 0x06;
    }
    if lo > 0x0F {
        hi += 1;
    }

    cpu.regs.p.set_zero(binary == 0);
    cpu.regs.p.set_negative(hi & 0x08 != 0);
    cpu.regs.p.set_overflow(((hi << 4) as u8 ^ a) & 0x80 != 0 && (a ^ value) & 0x80 == 0);

    if hi > 0x09 {
        hi += 0x06;
    }
    cpu.regs.p.set_carry(hi > 0x0F);

    ((hi << 4) as u8) | (lo as u8 & 0x0F)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C). Updates C (clear on borrow), Z, V and N.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let a = cpu.regs.a;
    let value = operand.value;
    let borrow = !cpu.regs.p.carry() as i16;

    // Binary subtraction is addition of the one's complement.
    let inverted = !value;
    let sum = a as u16 + inverted as u16 + (1 - borrow) as u16;
    let binary = sum as u8;

    cpu.regs.p.set_carry(sum > 0xFF);
    cpu.regs.p.set_overflow((a ^ binary) & (inverted ^ binary) & 0x80 != 0);
    cpu.regs.update_zero_and_negative(binary);

    cpu.regs.a = if cpu.regs.p.decimal() {
        sbc_decimal(a, value, borrow)
    } else {
        binary
    };
}

fn sbc_decimal(a: u8, value: u8, borrow: i16) -> u8 {
    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }

    (((hi << 4) as u8) & 0xF0) | (lo as u8 & 0x0F)
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let result = cpu.regs.a & operand.value;
    cpu.regs.update_zero_and_negative(result);
    cpu.regs.a = result;
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let result = cpu.regs.a | operand.value;
    cpu.regs.update_zero_and_negative(result);
    cpu.regs.a = result;
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let result = cpu.regs.a ^ operand.value;
    cpu.regs.update_zero_and_negative(result);
    cpu.regs.a = result;
}

/// Executes CMP, CPX or CPY against the given register value.
///
/// - C: set if register >= M
/// - Z: set if register == M
/// - N: bit 7 of (register - M)
pub(crate) fn execute_compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: &Operand) {
    let result = register.wrapping_sub(operand.value);
    cpu.regs.p.set_carry(register >= operand.value);
    cpu.regs.update_zero_and_negative(result);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; N and V are copied from bits 7 and 6 of M.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let value = operand.value;
    cpu.regs.p.set_zero(cpu.regs.a & value == 0);
    cpu.regs.p.set_negative(value & 0x80 != 0);
    cpu.regs.p.set_overflow(value & 0x40 != 0);
}
