//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Carry
//! - CLI / SEI: Interrupt Disable
//! - CLD / SED: Decimal Mode
//! - CLV: Overflow (there is no SEV)
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// Sets or clears a single status flag. All other flags are unchanged.
pub(crate) fn execute_flag<M: MemoryBus>(cpu: &mut CPU<M>, flag: Status, on: bool) {
    cpu.regs.p.set(flag, on);
}
