//! Memory bus tests
//!
//! Verifies FlatMemory, its constructors, and that the CPU works over a custom
//! MemoryBus implementation.

use m6502::{ConfigError, FlatMemory, MemoryBus, CPU};

#[test]
fn test_flat_memory_initialization() {
    let memory = FlatMemory::new();

    for addr in [0x0000, 0x1234, 0x8000, 0xFFFF] {
        assert_eq!(memory.read(addr), 0x00, "Memory at 0x{:04X} should be 0", addr);
    }
}

#[test]
fn test_flat_memory_read_write_round_trip() {
    let mut memory = FlatMemory::new();

    let test_data = [
        (0x0000, 0x01),
        (0x00FF, 0xFF),
        (0x0100, 0x7F),
        (0x1234, 0x42),
        (0x8000, 0xAB),
        (0xFFFF, 0xCD),
    ];

    for &(addr, value) in &test_data {
        memory.write(addr, value);
        assert_eq!(memory.read(addr), value);
        assert_eq!(memory[addr], value);
    }
}

#[test]
fn test_read_word_little_endian() {
    let mut memory = FlatMemory::new();
    memory.load(0x2000, &[0xCD, 0xAB]);

    assert_eq!(memory.read_word(0x2000), 0xABCD);
}

// ========== Constructors ==========

#[test]
fn test_from_image() {
    let mut image = vec![0u8; 0x10000];
    image[0xFFFC] = 0x00;
    image[0xFFFD] = 0xC0;
    image[0xC000] = 0xEA;

    let memory = FlatMemory::from_image(&image).unwrap();
    let cpu = CPU::new(memory);

    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.memory()[0xC000], 0xEA);
}

#[test]
fn test_from_image_rejects_short_and_long_images() {
    assert_eq!(
        FlatMemory::from_image(&[0u8; 0x100]).err(),
        Some(ConfigError::InvalidMemorySize {
            expected: 0x10000,
            actual: 0x100
        })
    );

    let too_big = vec![0u8; 0x10001];
    assert!(matches!(
        FlatMemory::from_image(&too_big),
        Err(ConfigError::InvalidMemorySize { actual: 0x10001, .. })
    ));
}

#[test]
fn test_with_vectors_installs_all_three() {
    let memory = FlatMemory::with_vectors(&[0x1111, 0x2222, 0x3333]).unwrap();

    assert_eq!(memory.read_word(0xFFFA), 0x1111);
    assert_eq!(memory.read_word(0xFFFC), 0x2222);
    assert_eq!(memory.read_word(0xFFFE), 0x3333);
}

#[test]
fn test_with_vectors_rejects_wrong_length() {
    let err = FlatMemory::with_vectors(&[0x8000]).err();

    assert_eq!(
        err,
        Some(ConfigError::InvalidVectorTable {
            expected: 3,
            actual: 1
        })
    );
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("vector table must hold 3 entries, got 1".to_string())
    );
}

// ========== Custom Bus ==========

/// 32KB RAM below 0x8000 with a write-protected ROM above it.
struct RomRamMemory {
    ram: Vec<u8>,
    rom: Vec<u8>,
}

impl MemoryBus for RomRamMemory {
    fn read(&self, addr: u16) -> u8 {
        if addr < 0x8000 {
            self.ram[addr as usize]
        } else {
            self.rom[(addr - 0x8000) as usize]
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr < 0x8000 {
            self.ram[addr as usize] = value;
        }
    }
}

#[test]
fn test_cpu_over_custom_bus() {
    let mut rom = vec![0u8; 0x8000];
    // LDA #$42 ; STA $0200 ; STA $9000
    rom[..8].copy_from_slice(&[0xA9, 0x42, 0x8D, 0x00, 0x02, 0x8D, 0x00, 0x90]);
    rom[0x7FFC] = 0x00;
    rom[0x7FFD] = 0x80;

    let memory = RomRamMemory {
        ram: vec![0; 0x8000],
        rom,
    };
    let mut cpu = CPU::new(memory);

    cpu.execute(10).unwrap();

    assert_eq!(cpu.memory().read(0x0200), 0x42);
    assert_eq!(cpu.memory().read(0x9000), 0x00, "ROM ignores writes");
    assert_eq!(cpu.pc(), 0x8008);
}
