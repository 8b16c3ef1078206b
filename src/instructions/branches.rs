//! # Branch Instructions
//!
//! This module implements the eight conditional branches:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the instruction that follows the branch.
//!
//! Cycle timing is the same for every branch:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::addressing::pages_differ;
use crate::{Flag, MemoryBus, Mnemonic, Operand, CPU};

/// Whether `mnemonic`'s condition holds for the current flags.
fn condition_met<M: MemoryBus>(cpu: &CPU<M>, mnemonic: Mnemonic) -> bool {
    let status = cpu.status;
    match mnemonic {
        Mnemonic::Bcc => !status.test(Flag::Carry),
        Mnemonic::Bcs => status.test(Flag::Carry),
        Mnemonic::Bne => !status.test(Flag::Zero),
        Mnemonic::Beq => status.test(Flag::Zero),
        Mnemonic::Bpl => !status.test(Flag::Negative),
        Mnemonic::Bmi => status.test(Flag::Negative),
        Mnemonic::Bvc => !status.test(Flag::Overflow),
        Mnemonic::Bvs => status.test(Flag::Overflow),
        _ => false,
    }
}

/// Executes a conditional branch and returns the extra cycles it cost.
///
/// On entry PC already points at the following instruction, which is both
/// the fall-through address and the base for the offset.
///
/// No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mnemonic: Mnemonic,
    operand: Operand,
) -> u8 {
    let Operand::Relative(offset) = operand else {
        return 0;
    };
    if !condition_met(cpu, mnemonic) {
        return 0;
    }

    let next = cpu.pc;
    let target = next.wrapping_add_signed(offset as i16);
    cpu.pc = target;

    if pages_differ(next, target) {
        2
    } else {
        1
    }
}
