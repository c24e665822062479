//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y), PC, SP, packed status
//! - **Cycle counter**: u64 cycle count since the last reset
//! - **Interrupt lines**: latched NMI and level IRQ
//! - **Memory bus**: owned exclusively by the CPU, reachable via `memory_mut()`
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction, or enter one interrupt handler
//! - `execute()`: Execute until a cycle budget is used up
//!
//! Instructions are atomic. Interrupts are only sampled between them, and a
//! cycle budget may be overshot by at most one instruction.

use log::{debug, trace, warn};

use crate::addressing::resolve;
use crate::config::{CpuConfig, IllegalOpcodePolicy, ILLEGAL_NOP_CYCLES};
use crate::error::ExecutionError;
use crate::instructions;
use crate::interrupts::{Interrupt, InterruptController, INTERRUPT_CYCLES, RESET_VECTOR};
use crate::memory::MemoryBus;
use crate::opcodes::decode;
use crate::registers::Registers;
use crate::status::Status;

/// Where the engine is within its fetch-decode-execute cycle.
///
/// Between public calls the CPU is always back in `Fetching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// Waiting at an instruction boundary.
    Fetching,
    /// Running a decoded instruction.
    Executing,
    /// Pushing state and vectoring into an NMI or IRQ handler.
    ServicingInterrupt,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. The CPU
/// owns its bus; tests and hosts reach it through `memory()` / `memory_mut()`.
///
/// # Examples
///
/// ```
/// use m6502::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory[0xFFFC] = 0xE2;
/// memory[0xFFFD] = 0xFC;
///
/// // Initialize CPU - runs the reset sequence
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0xFCE2);
/// assert_eq!(cpu.stack_pointer(), 0x01FD);
/// assert!(cpu.flag_i());
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) regs: Registers,

    /// Cycles executed since the last reset
    pub(crate) cycles: u64,

    pub(crate) memory: M,

    interrupts: InterruptController,

    config: CpuConfig,

    state: ExecutionState,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and the default config.
    ///
    /// The reset sequence runs immediately, so PC comes from the reset vector
    /// at 0xFFFC/0xFFFD. A, X and Y start at zero.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with an explicit configuration.
    ///
    /// ```
    /// use m6502::{CpuConfig, CPU, FlatMemory, IllegalOpcodePolicy};
    ///
    /// let config = CpuConfig::default().with_illegal_opcode_policy(IllegalOpcodePolicy::Nop);
    /// let mut cpu = CPU::with_config(FlatMemory::new(), config);
    ///
    /// cpu.memory_mut()[0x0000] = 0x02; // undefined
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(cpu.pc(), 0x0001);
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::new(),
            cycles: 0,
            memory,
            interrupts: InterruptController::new(),
            config,
            state: ExecutionState::Fetching,
        };
        cpu.reset();
        cpu
    }

    /// Runs the 6502 reset sequence.
    ///
    /// - SP goes through three suppressed pushes from 0x00 and lands on 0xFD
    ///   (true address 0x01FD); nothing is written to the stack
    /// - D is cleared and I is set
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD
    /// - The cycle counter is zeroed and any latched NMI is dropped
    ///
    /// A, X, Y and the remaining flags keep their values.
    pub fn reset(&mut self) {
        self.regs.sp = 0x00;
        for _ in 0..3 {
            self.regs.push();
        }

        self.regs.p.set_decimal(false);
        self.regs.p.set_irq_disable(true);
        self.regs.pc = self.memory.read_word(RESET_VECTOR);

        self.cycles = 0;
        self.interrupts.reset();
        self.state = ExecutionState::Fetching;

        debug!("reset: PC=${:04X}", self.regs.pc);
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Service a pending NMI, or an IRQ if I is clear, instead of fetching
    /// 2. Fetch opcode byte at current PC
    /// 3. Look up the instruction in the opcode table
    /// 4. Resolve the operand for its addressing mode
    /// 5. Advance PC past the instruction and charge base cycles plus any
    ///    page-crossing penalty
    /// 6. Run the operation
    ///
    /// # Returns
    ///
    /// - `Ok(cycles)` with the cycles this step took
    /// - `Err(ExecutionError::IllegalOpcode { .. })` for an undefined opcode
    ///   under the trap policy
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::{CPU, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem[0xFFFD] = 0x80;
    /// mem[0x8000] = 0xEA; // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<u64, ExecutionError> {
        debug_assert_eq!(self.state, ExecutionState::Fetching);

        if let Some(interrupt) = self.interrupts.poll(self.regs.p.irq_disable()) {
            self.state = ExecutionState::ServicingInterrupt;
            self.service_interrupt(interrupt);
            self.state = ExecutionState::Fetching;
            return Ok(INTERRUPT_CYCLES as u64);
        }

        let pc = self.regs.pc;
        let opcode = self.memory.read(pc);

        let Some(instr) = decode(opcode) else {
            return self.illegal_opcode(opcode, pc);
        };

        let operand = resolve(instr.addressing_mode, &self.regs, &self.memory);
        self.state = ExecutionState::Executing;

        trace!(
            "{:?} {:04X}  {:02X}  {}  A:{:02X} X:{:02X} Y:{:02X} P:{:?} SP:{:02X} CYC:{}",
            self.state,
            pc,
            opcode,
            instr.mnemonic,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.p,
            self.regs.sp,
            self.cycles
        );

        let start_cycles = self.cycles;

        self.regs.pc = pc.wrapping_add(1 + operand.bytes as u16);
        self.cycles += instr.base_cycles as u64;
        if instr.page_penalty && operand.page_crossed {
            self.cycles += 1;
        }

        instructions::execute(self, instr.mnemonic, &operand);

        self.state = ExecutionState::Fetching;
        Ok(self.cycles - start_cycles)
    }

    /// Runs the CPU until at least `cycle_budget` cycles have been used.
    ///
    /// Instructions are never split, so the result may exceed the budget by
    /// up to one instruction's cost. A zero budget does nothing and returns 0.
    ///
    /// # Returns
    ///
    /// - `Ok(cycles_consumed)` if execution completed successfully
    /// - `Err(ExecutionError)` if an instruction failed; cycles already spent
    ///   remain visible through `cycles()`
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::{CPU, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem[0xFFFD] = 0x80;
    /// mem.load(0x8000, &[0xEA; 16]); // NOPs, 2 cycles each
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.execute(5), Ok(6));
    /// assert_eq!(cpu.pc(), 0x8003);
    /// ```
    pub fn execute(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        if cycle_budget == 0 {
            debug!("execute called with a zero cycle budget");
            return Ok(0);
        }

        let start_cycles = self.cycles;
        while self.cycles - start_cycles < cycle_budget {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    fn illegal_opcode(&mut self, opcode: u8, pc: u16) -> Result<u64, ExecutionError> {
        match self.config.illegal_opcode_policy {
            IllegalOpcodePolicy::Trap => {
                warn!("illegal opcode ${:02X} at ${:04X}", opcode, pc);
                Err(ExecutionError::IllegalOpcode {
                    opcode,
                    address: pc,
                })
            }
            IllegalOpcodePolicy::Nop => {
                debug!("skipping illegal opcode ${:02X} at ${:04X}", opcode, pc);
                self.regs.pc = pc.wrapping_add(1);
                self.cycles += ILLEGAL_NOP_CYCLES as u64;
                Ok(ILLEGAL_NOP_CYCLES as u64)
            }
        }
    }

    fn service_interrupt(&mut self, interrupt: Interrupt) {
        self.enter_handler(interrupt.vector(), false);
        self.cycles += INTERRUPT_CYCLES as u64;

        debug!("{:?} taken ({:?}), PC=${:04X}", interrupt, self.state, self.regs.pc);
    }

    /// Shared tail of BRK, IRQ and NMI: push PC and status, set I, vector.
    pub(crate) fn enter_handler(&mut self, vector: u16, brk: bool) {
        let pc = self.regs.pc;
        self.push((pc >> 8) as u8);
        self.push(pc as u8);
        self.push(self.regs.p.to_stack_byte(brk));

        self.regs.p.set_irq_disable(true);
        self.regs.pc = self.memory.read_word(vector);
    }

    pub(crate) fn push(&mut self, value: u8) {
        let addr = self.regs.push();
        self.memory.write(addr, value);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        let addr = self.regs.pop();
        self.memory.read(addr)
    }

    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Interrupt Lines ==========

    /// Latch an NMI request. It is taken before the next instruction.
    pub fn trigger_nmi(&mut self) {
        self.interrupts.trigger_nmi();
    }

    /// Drive the IRQ line. It stays at this level until changed.
    pub fn set_irq(&mut self, asserted: bool) {
        self.interrupts.set_irq(asserted);
    }

    pub fn nmi_pending(&self) -> bool {
        self.interrupts.nmi_pending()
    }

    pub fn irq_line(&self) -> bool {
        self.interrupts.irq_line()
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the raw 8-bit stack pointer.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the true stack address, 0x0100 + SP.
    pub fn stack_pointer(&self) -> u16 {
        self.regs.stack_addr()
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    pub fn status(&self) -> u8 {
        (self.regs.p | Status::UNUSED).bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> Status {
        self.regs.p
    }

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the number of cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the engine's position in the fetch-decode-execute cycle.
    ///
    /// `step()` runs each instruction or interrupt entry to completion, so
    /// callers always observe `Fetching`. `Executing` and `ServicingInterrupt`
    /// only hold while a step is in progress, and show up in its trace output.
    pub fn state(&self) -> ExecutionState {
        self.state
    }

    pub fn config(&self) -> CpuConfig {
        self.config
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.p.negative()
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.p.overflow()
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.p.brk()
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.p.decimal()
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.p.irq_disable()
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.p.zero()
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.p.carry()
    }

    // ========== Setters (test setup) ==========

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Replaces the whole status register. Bit 5 is forced on.
    pub fn set_status(&mut self, value: u8) {
        self.regs.p = Status::from_bits_retain(value) | Status::UNUSED;
    }

    pub fn set_flag_n(&mut self, on: bool) {
        self.regs.p.set_negative(on);
    }

    pub fn set_flag_v(&mut self, on: bool) {
        self.regs.p.set_overflow(on);
    }

    pub fn set_flag_b(&mut self, on: bool) {
        self.regs.p.set_brk(on);
    }

    pub fn set_flag_d(&mut self, on: bool) {
        self.regs.p.set_decimal(on);
    }

    pub fn set_flag_i(&mut self, on: bool) {
        self.regs.p.set_irq_disable(on);
    }

    pub fn set_flag_z(&mut self, on: bool) {
        self.regs.p.set_zero(on);
    }

    pub fn set_flag_c(&mut self, on: bool) {
        self.regs.p.set_carry(on);
    }
}
