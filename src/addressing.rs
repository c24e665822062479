//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns the bytes following an opcode into an operand.
//!
//! Resolution is side-effect free: it reads the operand bytes (and any pointer
//! they name) but never writes memory or registers. The engine feeds the result
//! to the instruction and uses `page_crossed` to decide on cycle penalties.

use crate::memory::MemoryBus;
use crate::registers::Registers;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset from the address of the next instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// An operand resolved for a single instruction execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// Effective address, or `None` for implied and accumulator modes.
    ///
    /// For immediate mode this is the address of the literal byte; for
    /// relative mode it is the branch target.
    pub address: Option<u16>,

    /// The byte the instruction works on: the memory at `address`, the
    /// accumulator in accumulator mode, or the raw displacement in relative
    /// mode. Zero for implied mode.
    pub value: u8,

    /// Operand bytes consumed after the opcode.
    pub bytes: u8,

    /// Whether indexing (or a branch) moved the address into another page.
    pub page_crossed: bool,
}

/// True when `a` and `b` lie in different 256-byte pages.
pub fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Reads a pointer from zero page. The high byte wraps to 0x00 after 0xFF.
fn read_zero_page_word<M: MemoryBus>(memory: &M, ptr: u8) -> u16 {
    let lo = memory.read(ptr as u16) as u16;
    let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Resolves the operand of the instruction whose opcode sits at `regs.pc`.
///
/// # Examples
///
/// ```
/// use m6502::{addressing::resolve, AddressingMode, FlatMemory, Registers};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xBD, 0xFF, 0x12]); // LDA $12FF,X
/// memory[0x1300] = 0x42;
///
/// let mut regs = Registers::new();
/// regs.pc = 0x8000;
/// regs.x = 1;
///
/// let operand = resolve(AddressingMode::AbsoluteX, &regs, &memory);
/// assert_eq!(operand.address, Some(0x1300));
/// assert_eq!(operand.value, 0x42);
/// assert!(operand.page_crossed);
/// ```
pub fn resolve<M: MemoryBus>(mode: AddressingMode, regs: &Registers, memory: &M) -> Operand {
    let arg_addr = regs.pc.wrapping_add(1);
    let bytes = mode.operand_bytes();

    let (address, page_crossed) = match mode {
        AddressingMode::Implicit | AddressingMode::Accumulator => (None, false),

        AddressingMode::Immediate => (Some(arg_addr), false),

        AddressingMode::ZeroPage => (Some(memory.read(arg_addr) as u16), false),

        AddressingMode::ZeroPageX => {
            let zp = memory.read(arg_addr).wrapping_add(regs.x);
            (Some(zp as u16), false)
        }

        AddressingMode::ZeroPageY => {
            let zp = memory.read(arg_addr).wrapping_add(regs.y);
            (Some(zp as u16), false)
        }

        AddressingMode::Absolute => (Some(memory.read_word(arg_addr)), false),

        AddressingMode::AbsoluteX => {
            let base = memory.read_word(arg_addr);
            let addr = base.wrapping_add(regs.x as u16);
            (Some(addr), crosses_page(base, addr))
        }

        AddressingMode::AbsoluteY => {
            let base = memory.read_word(arg_addr);
            let addr = base.wrapping_add(regs.y as u16);
            (Some(addr), crosses_page(base, addr))
        }

        AddressingMode::Indirect => {
            let ptr = memory.read_word(arg_addr);
            let lo = memory.read(ptr) as u16;
            // NMOS bug: the pointer's high byte never carries into the next page,
            // so JMP ($10FF) reads $10FF and $1000.
            let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
            let hi = memory.read(hi_addr) as u16;
            (Some((hi << 8) | lo), false)
        }

        AddressingMode::IndirectX => {
            let ptr = memory.read(arg_addr).wrapping_add(regs.x);
            (Some(read_zero_page_word(memory, ptr)), false)
        }

        AddressingMode::IndirectY => {
            let base = read_zero_page_word(memory, memory.read(arg_addr));
            let addr = base.wrapping_add(regs.y as u16);
            (Some(addr), crosses_page(base, addr))
        }

        AddressingMode::Relative => {
            let offset = memory.read(arg_addr) as i8;
            let next = regs.pc.wrapping_add(1 + bytes as u16);
            let target = next.wrapping_add_signed(offset as i16);
            (Some(target), crosses_page(next, target))
        }
    };

    let value = match mode {
        AddressingMode::Implicit => 0,
        AddressingMode::Accumulator => regs.a,
        AddressingMode::Relative => memory.read(arg_addr),
        _ => address.map_or(0, |addr| memory.read(addr)),
    };

    Operand {
        address,
        value,
        bytes,
        page_crossed,
    }
}
