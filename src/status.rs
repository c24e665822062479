//! # Processor Status Register
//!
//! The 6502 keeps its flags in a single packed byte (NV-BDIZC). `Status` models
//! that byte directly, with named accessors for each flag.
//!
//! Bit 5 has no latch on the real chip and bit 4 (B) only exists in copies of
//! the register pushed to the stack. `to_stack_byte` is the one place the
//! register is materialized, and it always forces bit 5 high.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Packed processor status byte.
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY       = 0b0000_0001;
        const ZERO        = 0b0000_0010;
        const IRQ_DISABLE = 0b0000_0100;
        const DECIMAL     = 0b0000_1000;
        const BREAK       = 0b0001_0000;
        const UNUSED      = 0b0010_0000;
        const OVERFLOW    = 0b0100_0000;
        const NEGATIVE    = 0b1000_0000;
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::UNUSED
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let flag_map = [
            ('N', Status::NEGATIVE),
            ('V', Status::OVERFLOW),
            ('-', Status::UNUSED),
            ('B', Status::BREAK),
            ('D', Status::DECIMAL),
            ('I', Status::IRQ_DISABLE),
            ('Z', Status::ZERO),
            ('C', Status::CARRY),
        ];

        let text: String = flag_map
            .iter()
            .map(|&(ch, flag)| if self.contains(flag) { ch } else { '.' })
            .collect();
        f.write_str(&text)
    }
}

impl Status {
    /// Rebuilds the register from a byte pulled off the stack (PLP, RTI).
    ///
    /// B is discarded since it has no storage in the CPU; bit 5 reads back as 1.
    pub fn from_stack_byte(value: u8) -> Self {
        (Status::from_bits_retain(value) - Status::BREAK) | Status::UNUSED
    }

    /// The byte pushed by PHP, BRK, IRQ and NMI.
    ///
    /// `brk` selects the B bit: set for the software pushes (PHP, BRK),
    /// clear for hardware interrupts.
    pub fn to_stack_byte(self, brk: bool) -> u8 {
        let mut pushed = self | Status::UNUSED;
        pushed.set(Status::BREAK, brk);
        pushed.bits()
    }

    /// Sets Z iff `result` is zero and N iff bit 7 of `result` is set.
    ///
    /// No other flag is touched.
    pub fn update_zero_and_negative(&mut self, result: u8) {
        self.set(Status::ZERO, result == 0);
        self.set(Status::NEGATIVE, result & 0x80 != 0);
    }

    pub fn carry(self) -> bool {
        self.contains(Status::CARRY)
    }

    pub fn zero(self) -> bool {
        self.contains(Status::ZERO)
    }

    pub fn irq_disable(self) -> bool {
        self.contains(Status::IRQ_DISABLE)
    }

    pub fn decimal(self) -> bool {
        self.contains(Status::DECIMAL)
    }

    pub fn brk(self) -> bool {
        self.contains(Status::BREAK)
    }

    pub fn overflow(self) -> bool {
        self.contains(Status::OVERFLOW)
    }

    pub fn negative(self) -> bool {
        self.contains(Status::NEGATIVE)
    }

    pub fn set_carry(&mut self, on: bool) {
        self.set(Status::CARRY, on);
    }

    pub fn set_zero(&mut self, on: bool) {
        self.set(Status::ZERO, on);
    }

    pub fn set_irq_disable(&mut self, on: bool) {
        self.set(Status::IRQ_DISABLE, on);
    }

    pub fn set_decimal(&mut self, on: bool) {
        self.set(Status::DECIMAL, on);
    }

    pub fn set_brk(&mut self, on: bool) {
        self.set(Status::BREAK, on);
    }

    pub fn set_overflow(&mut self, on: bool) {
        self.set(Status::OVERFLOW, on);
    }

    pub fn set_negative(&mut self, on: bool) {
        self.set(Status::NEGATIVE, on);
    }
}
