//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, and `FlatMemory`, the 64KB store the core ships with.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Every 16-bit address is valid, so out-of-range access is impossible
//! - Peripheral mapping, if any, lives in the host's own `MemoryBus` impl

use std::ops::{Index, IndexMut};

use crate::error::ConfigError;
use crate::interrupts::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};

/// Number of addressable bytes on the 6502 bus.
pub const ADDRESS_SPACE: usize = 0x1_0000;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use m6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use m6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` and `addr + 1`.
    ///
    /// The high byte address wraps at 0xFFFF.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous RAM
/// array initialized to 0x00. Besides the `MemoryBus` interface it supports
/// direct indexing, which is what most test setups reach for.
///
/// # Examples
///
/// ```
/// use m6502::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory[0xFFFC] = 0x00; // Reset vector low byte
/// memory[0xFFFD] = 0x80; // Reset vector high byte (PC = 0x8000)
/// memory[0x8000] = 0xEA; // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8; ADDRESS_SPACE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE]),
        }
    }

    /// Builds memory from a complete 64KB image.
    ///
    /// Images of any other size are rejected up front rather than leaving part
    /// of the address space undefined.
    ///
    /// ```
    /// use m6502::{ConfigError, FlatMemory};
    ///
    /// assert!(FlatMemory::from_image(&[0u8; 0x10000]).is_ok());
    /// assert_eq!(
    ///     FlatMemory::from_image(&[0u8; 16]).err(),
    ///     Some(ConfigError::InvalidMemorySize { expected: 0x10000, actual: 16 })
    /// );
    /// ```
    pub fn from_image(image: &[u8]) -> Result<Self, ConfigError> {
        let data: Box<[u8; ADDRESS_SPACE]> = image
            .to_vec()
            .into_boxed_slice()
            .try_into()
            .map_err(|_| ConfigError::InvalidMemorySize {
                expected: ADDRESS_SPACE,
                actual: image.len(),
            })?;

        Ok(Self { data })
    }

    /// Builds zeroed memory with the three hardware vectors installed.
    ///
    /// `vectors` holds the NMI, RESET and IRQ/BRK entry points, in the order
    /// they appear at the top of the address space.
    pub fn with_vectors(vectors: &[u16]) -> Result<Self, ConfigError> {
        let [nmi, reset, irq] = vectors else {
            return Err(ConfigError::InvalidVectorTable {
                expected: 3,
                actual: vectors.len(),
            });
        };

        let mut memory = Self::new();
        for (vector, target) in [(NMI_VECTOR, *nmi), (RESET_VECTOR, *reset), (IRQ_VECTOR, *irq)] {
            memory.load(vector, &target.to_le_bytes());
        }
        Ok(memory)
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

impl Index<u16> for FlatMemory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.data[addr as usize]
    }
}

impl IndexMut<u16> for FlatMemory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.data[addr as usize]
    }
}
