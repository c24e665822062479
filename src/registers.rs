//! 6502 CPU registers.

use crate::status::Status;

/// Base of the hardware stack page. The stack lives at 0x0100-0x01FF.
pub const STACK_BASE: u16 = 0x0100;

/// 6502 CPU register set.
///
/// The 6502 has minimal registers:
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - SP: 8-bit stack pointer, offset into page 1
/// - PC: 16-bit program counter
/// - P: 8-bit processor status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer (points to next free location).
    pub sp: u8,
    /// Program counter.
    pub pc: u16,
    /// Processor status flags.
    pub p: Status,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Create registers in the state reset leaves them in.
    ///
    /// The program counter is filled in from the reset vector by the CPU.
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            p: Status::UNUSED | Status::IRQ_DISABLE,
        }
    }

    /// Claim a stack slot for a push, returning the address to write.
    ///
    /// SP wraps within page 1; there is no carry into the page byte.
    pub fn push(&mut self) -> u16 {
        let addr = self.stack_addr();
        self.sp = self.sp.wrapping_sub(1);
        addr
    }

    /// Release a stack slot for a pull, returning the address to read.
    pub fn pop(&mut self) -> u16 {
        self.sp = self.sp.wrapping_add(1);
        self.stack_addr()
    }

    /// The true address SP refers to (0x0100 + SP).
    pub fn stack_addr(&self) -> u16 {
        STACK_BASE | self.sp as u16
    }

    /// Shorthand for `self.p.update_zero_and_negative(result)`.
    pub fn update_zero_and_negative(&mut self, result: u8) {
        self.p.update_zero_and_negative(result);
    }
}
