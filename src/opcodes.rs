//! # Instruction Table
//!
//! This module contains the 256-entry instruction table that serves as the
//! single source of truth for all 6502 instruction information.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undefined opcodes** - Stored as `None`
//!
//! Each defined entry records:
//! - Mnemonic (which operation runs)
//! - Addressing mode (how the operand is found, and so the instruction length)
//! - Base cycle cost (excluding page-crossing and branch penalties)
//! - Whether a page crossing during operand resolution costs an extra cycle
//!
//! ## Undefined opcodes
//!
//! Fetching an undefined opcode never silently does something arbitrary. What
//! happens is fixed by [`IllegalOpcodePolicy`](crate::IllegalOpcodePolicy):
//! either the engine reports `ExecutionError::IllegalOpcode` and leaves all
//! state untouched (the default), or it skips the byte as a one-byte,
//! two-cycle no-op.

use std::fmt;

use crate::addressing::AddressingMode;

/// The 56 documented 6502 operations.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi,
    Bne, Bpl, Brk, Bvc, Bvs, Clc, Cld, Cli,
    Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor,
    Inc, Inx, Iny, Jmp, Jsr, Lda, Ldx, Ldy,
    Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol,
    Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta,
    Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
}

impl Mnemonic {
    /// Upper-case assembler name, e.g. `"LDA"`.
    #[rustfmt::skip]
    pub const fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC",
            Bcs => "BCS", Beq => "BEQ", Bit => "BIT", Bmi => "BMI",
            Bne => "BNE", Bpl => "BPL", Brk => "BRK", Bvc => "BVC",
            Bvs => "BVS", Clc => "CLC", Cld => "CLD", Cli => "CLI",
            Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR",
            Inc => "INC", Inx => "INX", Iny => "INY", Jmp => "JMP",
            Jsr => "JSR", Lda => "LDA", Ldx => "LDX", Ldy => "LDY",
            Lsr => "LSR", Nop => "NOP", Ora => "ORA", Pha => "PHA",
            Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC",
            Sec => "SEC", Sed => "SED", Sei => "SEI", Sta => "STA",
            Stx => "STX", Sty => "STY", Tax => "TAX", Tay => "TAY",
            Tsx => "TSX", Txa => "TXA", Txs => "TXS", Tya => "TYA",
        }
    }

    /// Operations that only read their operand and so pay the page-crossing
    /// cycle. Stores and read-modify-write operations always take their full
    /// base cost instead.
    pub const fn reads_operand(self) -> bool {
        use Mnemonic::*;
        matches!(self, Lda | Ldx | Ldy | Adc | Sbc | And | Ora | Eor | Cmp)
    }

    /// Conditional branches.
    pub const fn is_branch(self) -> bool {
        use Mnemonic::*;
        matches!(self, Bcc | Bcs | Beq | Bne | Bmi | Bpl | Bvc | Bvs)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one documented opcode.
///
/// # Examples
///
/// ```
/// use m6502::{decode, AddressingMode, Mnemonic};
///
/// let dec = decode(0xDE).unwrap();
/// assert_eq!(dec.mnemonic, Mnemonic::Dec);
/// assert_eq!(dec.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(dec.base_cycles, 7);
/// assert_eq!(dec.size_bytes(), 3);
/// assert!(!dec.page_penalty); // writes never pay for page crossings
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Which operation runs.
    pub mnemonic: Mnemonic,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Cycle cost before page-crossing and branch penalties (2-7).
    pub base_cycles: u8,

    /// Whether a page crossing during operand resolution adds one cycle.
    pub page_penalty: bool,
}

impl Instruction {
    /// Total instruction size in bytes, opcode included (1-3).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }
}

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> Instruction {
    let indexed = matches!(
        addressing_mode,
        AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
    );

    Instruction {
        mnemonic,
        addressing_mode,
        base_cycles,
        page_penalty: indexed && mnemonic.reads_operand(),
    }
}

/// Looks up an opcode. Returns `None` for the 105 undefined opcodes.
pub fn decode(opcode: u8) -> Option<&'static Instruction> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

/// Complete 256-entry instruction table indexed by opcode byte value.
///
/// Built at compile time and never mutated.
///
/// # Examples
///
/// ```
/// use m6502::{Mnemonic, OPCODE_TABLE};
///
/// let brk = OPCODE_TABLE[0x00].unwrap();
/// assert_eq!(brk.mnemonic, Mnemonic::Brk);
/// assert_eq!(brk.base_cycles, 7);
///
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
#[rustfmt::skip]
pub static OPCODE_TABLE: [Option<Instruction>; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;

    [
        Some(op(Brk, Implicit, 7)), // 0x00
        Some(op(Ora, IndirectX, 6)), // 0x01
        None, // 0x02
        None, // 0x03
        None, // 0x04
        Some(op(Ora, ZeroPage, 3)), // 0x05
        Some(op(Asl, ZeroPage, 5)), // 0x06
        None, // 0x07
        Some(op(Php, Implicit, 3)), // 0x08
        Some(op(Ora, Immediate, 2)), // 0x09
        Some(op(Asl, Accumulator, 2)), // 0x0A
        None, // 0x0B
        None, // 0x0C
        Some(op(Ora, Absolute, 4)), // 0x0D
        Some(op(Asl, Absolute, 6)), // 0x0E
        None, // 0x0F
        Some(op(Bpl, Relative, 2)), // 0x10
        Some(op(Ora, IndirectY, 5)), // 0x11
        None, // 0x12
        None, // 0x13
        None, // 0x14
        Some(op(Ora, ZeroPageX, 4)), // 0x15
        Some(op(Asl, ZeroPageX, 6)), // 0x16
        None, // 0x17
        Some(op(Clc, Implicit, 2)), // 0x18
        Some(op(Ora, AbsoluteY, 4)), // 0x19
        None, // 0x1A
        None, // 0x1B
        None, // 0x1C
        Some(op(Ora, AbsoluteX, 4)), // 0x1D
        Some(op(Asl, AbsoluteX, 7)), // 0x1E
        None, // 0x1F
        Some(op(Jsr, Absolute, 6)), // 0x20
        Some(op(And, IndirectX, 6)), // 0x21
        None, // 0x22
        None, // 0x23
        Some(op(Bit, ZeroPage, 3)), // 0x24
        Some(op(And, ZeroPage, 3)), // 0x25
        Some(op(Rol, ZeroPage, 5)), // 0x26
        None, // 0x27
        Some(op(Plp, Implicit, 4)), // 0x28
        Some(op(And, Immediate, 2)), // 0x29
        Some(op(Rol, Accumulator, 2)), // 0x2A
        None, // 0x2B
        Some(op(Bit, Absolute, 4)), // 0x2C
        Some(op(And, Absolute, 4)), // 0x2D
        Some(op(Rol, Absolute, 6)), // 0x2E
        None, // 0x2F
        Some(op(Bmi, Relative, 2)), // 0x30
        Some(op(And, IndirectY, 5)), // 0x31
        None, // 0x32
        None, // 0x33
        None, // 0x34
        Some(op(And, ZeroPageX, 4)), // 0x35
        Some(op(Rol, ZeroPageX, 6)), // 0x36
        None, // 0x37
        Some(op(Sec, Implicit, 2)), // 0x38
        Some(op(And, AbsoluteY, 4)), // 0x39
        None, // 0x3A
        None, // 0x3B
        None, // 0x3C
        Some(op(And, AbsoluteX, 4)), // 0x3D
        Some(op(Rol, AbsoluteX, 7)), // 0x3E
        None, // 0x3F
        Some(op(Rti, Implicit, 6)), // 0x40
        Some(op(Eor, IndirectX, 6)), // 0x41
        None, // 0x42
        None, // 0x43
        None, // 0x44
        Some(op(Eor, ZeroPage, 3)), // 0x45
        Some(op(Lsr, ZeroPage, 5)), // 0x46
        None, // 0x47
        Some(op(Pha, Implicit, 3)), // 0x48
        Some(op(Eor, Immediate, 2)), // 0x49
        Some(op(Lsr, Accumulator, 2)), // 0x4A
        None, // 0x4B
        Some(op(Jmp, Absolute, 3)), // 0x4C
        Some(op(Eor, Absolute, 4)), // 0x4D
        Some(op(Lsr, Absolute, 6)), // 0x4E
        None, // 0x4F
        Some(op(Bvc, Relative, 2)), // 0x50
        Some(op(Eor, IndirectY, 5)), // 0x51
        None, // 0x52
        None, // 0x53
        None, // 0x54
        Some(op(Eor, ZeroPageX, 4)), // 0x55
        Some(op(Lsr, ZeroPageX, 6)), // 0x56
        None, // 0x57
        Some(op(Cli, Implicit, 2)), // 0x58
        Some(op(Eor, AbsoluteY, 4)), // 0x59
        None, // 0x5A
        None, // 0x5B
        None, // 0x5C
        Some(op(Eor, AbsoluteX, 4)), // 0x5D
        Some(op(Lsr, AbsoluteX, 7)), // 0x5E
        None, // 0x5F
        Some(op(Rts, Implicit, 6)), // 0x60
        Some(op(Adc, IndirectX, 6)), // 0x61
        None, // 0x62
        None, // 0x63
        None, // 0x64
        Some(op(Adc, ZeroPage, 3)), // 0x65
        Some(op(Ror, ZeroPage, 5)), // 0x66
        None, // 0x67
        Some(op(Pla, Implicit, 4)), // 0x68
        Some(op(Adc, Immediate, 2)), // 0x69
        Some(op(Ror, Accumulator, 2)), // 0x6A
        None, // 0x6B
        Some(op(Jmp, Indirect, 5)), // 0x6C
        Some(op(Adc, Absolute, 4)), // 0x6D
        Some(op(Ror, Absolute, 6)), // 0x6E
        None, // 0x6F
        Some(op(Bvs, Relative, 2)), // 0x70
        Some(op(Adc, IndirectY, 5)), // 0x71
        None, // 0x72
        None, // 0x73
        None, // 0x74
        Some(op(Adc, ZeroPageX, 4)), // 0x75
        Some(op(Ror, ZeroPageX, 6)), // 0x76
        None, // 0x77
        Some(op(Sei, Implicit, 2)), // 0x78
        Some(op(Adc, AbsoluteY, 4)), // 0x79
        None, // 0x7A
        None, // 0x7B
        None, // 0x7C
        Some(op(Adc, AbsoluteX, 4)), // 0x7D
        Some(op(Ror, AbsoluteX, 7)), // 0x7E
        None, // 0x7F
        None, // 0x80
        Some(op(Sta, IndirectX, 6)), // 0x81
        None, // 0x82
        None, // 0x83
        Some(op(Sty, ZeroPage, 3)), // 0x84
        Some(op(Sta, ZeroPage, 3)), // 0x85
        Some(op(Stx, ZeroPage, 3)), // 0x86
        None, // 0x87
        Some(op(Dey, Implicit, 2)), // 0x88
        None, // 0x89
        Some(op(Txa, Implicit, 2)), // 0x8A
        None, // 0x8B
        Some(op(Sty, Absolute, 4)), // 0x8C
        Some(op(Sta, Absolute, 4)), // 0x8D
        Some(op(Stx, Absolute, 4)), // 0x8E
        None, // 0x8F
        Some(op(Bcc, Relative, 2)), // 0x90
        Some(op(Sta, IndirectY, 6)), // 0x91
        None, // 0x92
        None, // 0x93
        Some(op(Sty, ZeroPageX, 4)), // 0x94
        Some(op(Sta, ZeroPageX, 4)), // 0x95
        Some(op(Stx, ZeroPageY, 4)), // 0x96
        None, // 0x97
        Some(op(Tya, Implicit, 2)), // 0x98
        Some(op(Sta, AbsoluteY, 5)), // 0x99
        Some(op(Txs, Implicit, 2)), // 0x9A
        None, // 0x9B
        None, // 0x9C
        Some(op(Sta, AbsoluteX, 5)), // 0x9D
        None, // 0x9E
        None, // 0x9F
        Some(op(Ldy, Immediate, 2)), // 0xA0
        Some(op(Lda, IndirectX, 6)), // 0xA1
        Some(op(Ldx, Immediate, 2)), // 0xA2
        None, // 0xA3
        Some(op(Ldy, ZeroPage, 3)), // 0xA4
        Some(op(Lda, ZeroPage, 3)), // 0xA5
        Some(op(Ldx, ZeroPage, 3)), // 0xA6
        None, // 0xA7
        Some(op(Tay, Implicit, 2)), // 0xA8
        Some(op(Lda, Immediate, 2)), // 0xA9
        Some(op(Tax, Implicit, 2)), // 0xAA
        None, // 0xAB
        Some(op(Ldy, Absolute, 4)), // 0xAC
        Some(op(Lda, Absolute, 4)), // 0xAD
        Some(op(Ldx, Absolute, 4)), // 0xAE
        None, // 0xAF
        Some(op(Bcs, Relative, 2)), // 0xB0
        Some(op(Lda, IndirectY, 5)), // 0xB1
        None, // 0xB2
        None, // 0xB3
        Some(op(Ldy, ZeroPageX, 4)), // 0xB4
        Some(op(Lda, ZeroPageX, 4)), // 0xB5
        Some(op(Ldx, ZeroPageY, 4)), // 0xB6
        None, // 0xB7
        Some(op(Clv, Implicit, 2)), // 0xB8
        Some(op(Lda, AbsoluteY, 4)), // 0xB9
        Some(op(Tsx, Implicit, 2)), // 0xBA
        None, // 0xBB
        Some(op(Ldy, AbsoluteX, 4)), // 0xBC
        Some(op(Lda, AbsoluteX, 4)), // 0xBD
        Some(op(Ldx, AbsoluteY, 4)), // 0xBE
        None, // 0xBF
        Some(op(Cpy, Immediate, 2)), // 0xC0
        Some(op(Cmp, IndirectX, 6)), // 0xC1
        None, // 0xC2
        None, // 0xC3
        Some(op(Cpy, ZeroPage, 3)), // 0xC4
        Some(op(Cmp, ZeroPage, 3)), // 0xC5
        Some(op(Dec, ZeroPage, 5)), // 0xC6
        None, // 0xC7
        Some(op(Iny, Implicit, 2)), // 0xC8
        Some(op(Cmp, Immediate, 2)), // 0xC9
        Some(op(Dex, Implicit, 2)), // 0xCA
        None, // 0xCB
        Some(op(Cpy, Absolute, 4)), // 0xCC
        Some(op(Cmp, Absolute, 4)), // 0xCD
        Some(op(Dec, Absolute, 6)), // 0xCE
        None, // 0xCF
        Some(op(Bne, Relative, 2)), // 0xD0
        Some(op(Cmp, IndirectY, 5)), // 0xD1
        None, // 0xD2
        None, // 0xD3
        None, // 0xD4
        Some(op(Cmp, ZeroPageX, 4)), // 0xD5
        Some(op(Dec, ZeroPageX, 6)), // 0xD6
        None, // 0xD7
        Some(op(Cld, Implicit, 2)), // 0xD8
        Some(op(Cmp, AbsoluteY, 4)), // 0xD9
        None, // 0xDA
        None, // 0xDB
        None, // 0xDC
        Some(op(Cmp, AbsoluteX, 4)), // 0xDD
        Some(op(Dec, AbsoluteX, 7)), // 0xDE
        None, // 0xDF
        Some(op(Cpx, Immediate, 2)), // 0xE0
        Some(op(Sbc, IndirectX, 6)), // 0xE1
        None, // 0xE2
        None, // 0xE3
        Some(op(Cpx, ZeroPage, 3)), // 0xE4
        Some(op(Sbc, ZeroPage, 3)), // 0xE5
        Some(op(Inc, ZeroPage, 5)), // 0xE6
        None, // 0xE7
        Some(op(Inx, Implicit, 2)), // 0xE8
        Some(op(Sbc, Immediate, 2)), // 0xE9
        Some(op(Nop, Implicit, 2)), // 0xEA
        None, // 0xEB
        Some(op(Cpx, Absolute, 4)), // 0xEC
        Some(op(Sbc, Absolute, 4)), // 0xED
        Some(op(Inc, Absolute, 6)), // 0xEE
        None, // 0xEF
        Some(op(Beq, Relative, 2)), // 0xF0
        Some(op(Sbc, IndirectY, 5)), // 0xF1
        None, // 0xF2
        None, // 0xF3
        None, // 0xF4
        Some(op(Sbc, ZeroPageX, 4)), // 0xF5
        Some(op(Inc, ZeroPageX, 6)), // 0xF6
        None, // 0xF7
        Some(op(Sed, Implicit, 2)), // 0xF8
        Some(op(Sbc, AbsoluteY, 4)), // 0xF9
        None, // 0xFA
        None, // 0xFB
        None, // 0xFC
        Some(op(Sbc, AbsoluteX, 4)), // 0xFD
        Some(op(Inc, AbsoluteX, 7)), // 0xFE
        None, // 0xFF
    ]
};
