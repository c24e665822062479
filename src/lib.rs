//! # 6502 CPU Emulator Core
//!
//! A cycle-counting NMOS 6502 instruction-execution core.
//!
//! This crate models the MOS Technology 6502 processor: the register file, the
//! packed status register, the 256-byte hardware stack, a 256-entry decode table
//! covering the 151 documented opcodes, the thirteen addressing modes, and the
//! NMI / IRQ / RESET interrupt sequences. Memory is anything that implements the
//! [`MemoryBus`] trait; [`FlatMemory`] provides a plain 64KB array.
//!
//! ## Quick Start
//!
//! ```rust
//! use m6502::{FlatMemory, MemoryBus, CPU};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$42 ; TAX
//! memory.load(0x8000, &[0xA9, 0x42, 0xAA]);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//! assert!(cpu.flag_i());
//!
//! // Run at least 4 cycles: both instructions take 2
//! let spent = cpu.execute(4).unwrap();
//! assert_eq!(spent, 4);
//! assert_eq!(cpu.x(), 0x42);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, the fetch/decode/execute cycle and the execution loop
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode decode table and mnemonics
//! - `addressing` - Addressing modes and effective-address resolution
//! - `registers` / `status` - Register file and packed status flags
//! - `interrupts` - Vectors and the NMI / IRQ latch
//! - `config` - Engine options such as the illegal-opcode policy
//! - `error` - Execution and configuration errors

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod error;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::{CpuConfig, IllegalOpcodePolicy};
pub use cpu::{ExecutionState, CPU};
pub use error::{ConfigError, ExecutionError};
pub use interrupts::{Interrupt, InterruptController, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{decode, Instruction, Mnemonic, OPCODE_TABLE};
pub use registers::Registers;
pub use status::Status;
