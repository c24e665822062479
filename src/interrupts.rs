//! # Interrupt Lines
//!
//! The 6502 has two external interrupt inputs with different semantics:
//!
//! - **NMI** is edge-triggered. A single request is latched, serviced exactly
//!   once, and cleared by the act of servicing it. It cannot be masked.
//! - **IRQ** is level-triggered. It stays asserted until the source releases
//!   it and is ignored while the I flag is set. If the handler returns without
//!   the source releasing the line, the CPU re-enters the handler.
//!
//! The engine only samples these lines between instructions.
//!
//! ## Interrupt Service Sequence
//!
//! 1. Push PC high byte, then PC low byte
//! 2. Push status with B clear and bit 5 set
//! 3. Set the I flag
//! 4. Load PC from the vector for the interrupt kind
//!
//! **Total: 7 cycles**, the same as BRK.

/// NMI entry point (0xFFFA/0xFFFB).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset entry point (0xFFFC/0xFFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ and BRK entry point (0xFFFE/0xFFFF).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles taken to enter a hardware interrupt handler.
pub const INTERRUPT_CYCLES: u8 = 7;

/// A hardware interrupt the CPU is about to service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Nmi,
    Irq,
}

impl Interrupt {
    /// Address of the little-endian handler pointer for this interrupt.
    pub fn vector(self) -> u16 {
        match self {
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq => IRQ_VECTOR,
        }
    }
}

/// Latches for the NMI and IRQ request lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterruptController {
    nmi_pending: bool,
    irq_line: bool,
}

impl InterruptController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal a falling edge on NMI.
    ///
    /// Repeated edges before the CPU gets round to servicing collapse into
    /// one request.
    pub fn trigger_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Drive the IRQ line. It stays at this level until changed again.
    pub fn set_irq(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    pub fn irq_line(&self) -> bool {
        self.irq_line
    }

    /// Decide which interrupt, if any, should be taken at this instruction
    /// boundary. NMI wins over IRQ.
    ///
    /// Taking an NMI consumes its latch. IRQ is left asserted because only the
    /// source can release it.
    pub fn poll(&mut self, irq_disabled: bool) -> Option<Interrupt> {
        if self.nmi_pending {
            self.nmi_pending = false;
            Some(Interrupt::Nmi)
        } else if self.irq_line && !irq_disabled {
            Some(Interrupt::Irq)
        } else {
            None
        }
    }

    /// Drop any latched NMI. The IRQ level belongs to the host and survives.
    pub fn reset(&mut self) {
        self.nmi_pending = false;
    }
}
