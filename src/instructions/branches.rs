//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! Cycle timing varies based on whether the branch is taken and whether a page boundary is crossed.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes a conditional branch.
///
/// The operand's address is the branch target, already computed relative to
/// the instruction following the branch. `taken` is the branch condition.
///
/// Cycle timing:
/// - 2 cycles if branch not taken
/// - 3 cycles if branch taken to same page
/// - 4 cycles if branch taken to different page
///
/// No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand, taken: bool) {
    if !taken {
        return;
    }

    if let Some(target) = operand.address {
        cpu.cycles += 1;
        if operand.page_crossed {
            cpu.cycles += 1;
        }
        cpu.regs.pc = target;
    }
}
