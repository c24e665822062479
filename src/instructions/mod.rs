//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking the CPU and the operand the engine
//! already resolved for it.
//!
//! By the time an operation runs, the engine has advanced PC past the instruction
//! and charged the base cycles (plus the read-class page penalty). Operations only
//! add cycles of their own when the hardware does: taken branches.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

use crate::addressing::Operand;
use crate::memory::MemoryBus;
use crate::opcodes::Mnemonic;
use crate::status::Status;
use crate::CPU;

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

/// Runs the operation for `mnemonic` against an already-resolved operand.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic, operand: &Operand) {
    use Mnemonic::*;

    // Register values as they were when the instruction started.
    let regs = cpu.regs;
    let p = regs.p;

    match mnemonic {
        Adc => alu::execute_adc(cpu, operand),
        Sbc => alu::execute_sbc(cpu, operand),
        And => alu::execute_and(cpu, operand),
        Ora => alu::execute_ora(cpu, operand),
        Eor => alu::execute_eor(cpu, operand),
        Cmp => alu::execute_compare(cpu, regs.a, operand),
        Cpx => alu::execute_compare(cpu, regs.x, operand),
        Cpy => alu::execute_compare(cpu, regs.y, operand),
        Bit => alu::execute_bit(cpu, operand),

        Bcc => branches::execute_branch(cpu, operand, !p.carry()),
        Bcs => branches::execute_branch(cpu, operand, p.carry()),
        Beq => branches::execute_branch(cpu, operand, p.zero()),
        Bne => branches::execute_branch(cpu, operand, !p.zero()),
        Bmi => branches::execute_branch(cpu, operand, p.negative()),
        Bpl => branches::execute_branch(cpu, operand, !p.negative()),
        Bvs => branches::execute_branch(cpu, operand, p.overflow()),
        Bvc => branches::execute_branch(cpu, operand, !p.overflow()),

        Asl => shifts::execute_asl(cpu, operand),
        Lsr => shifts::execute_lsr(cpu, operand),
        Rol => shifts::execute_rol(cpu, operand),
        Ror => shifts::execute_ror(cpu, operand),

        Lda => load_store::execute_lda(cpu, operand),
        Ldx => load_store::execute_ldx(cpu, operand),
        Ldy => load_store::execute_ldy(cpu, operand),
        Sta => load_store::execute_store(cpu, operand, regs.a),
        Stx => load_store::execute_store(cpu, operand, regs.x),
        Sty => load_store::execute_store(cpu, operand, regs.y),

        Inc => inc_dec::execute_inc(cpu, operand),
        Dec => inc_dec::execute_dec(cpu, operand),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Jmp => control::execute_jmp(cpu, operand),
        Jsr => control::execute_jsr(cpu, operand),
        Rts => control::execute_rts(cpu),
        Rti => control::execute_rti(cpu),
        Brk => control::execute_brk(cpu),
        Nop => {}

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        Clc => flags::execute_flag(cpu, Status::CARRY, false),
        Sec => flags::execute_flag(cpu, Status::CARRY, true),
        Cli => flags::execute_flag(cpu, Status::IRQ_DISABLE, false),
        Sei => flags::execute_flag(cpu, Status::IRQ_DISABLE, true),
        Cld => flags::execute_flag(cpu, Status::DECIMAL, false),
        Sed => flags::execute_flag(cpu, Status::DECIMAL, true),
        Clv => flags::execute_flag(cpu, Status::OVERFLOW, false),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txs => transfer::execute_txs(cpu),
    }
}

/// Writes a read-modify-write result back where the operand came from:
/// memory for addressed modes, the accumulator for accumulator mode.
pub(crate) fn write_back<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand, value: u8) {
    match operand.address {
        Some(addr) => cpu.memory.write(addr, value),
        None => cpu.regs.a = value,
    }
}
