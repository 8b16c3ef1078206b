//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//!
//! Return addresses go on the stack high byte first. JSR pushes the address
//! of its own last byte, so RTS adds one after popping; BRK pushes the
//! address after its padding byte and RTI uses the popped value as-is.

use crate::{Flag, MemoryBus, Operand, CPU, IRQ_VECTOR};

/// Executes the JMP (Jump) instruction.
///
/// The resolver has already produced the target for both absolute and
/// indirect forms, including the optional `JMP ($xxFF)` page-wrap errata.
///
/// Flags affected: None
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        cpu.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes `PC - 1` (the address of the operand's high byte), high byte
/// first, then jumps.
///
/// Flags affected: None
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        let return_address = cpu.pc.wrapping_sub(1);
        cpu.push_word(return_address);
        cpu.pc = target;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the return address (low byte first) and resumes one past it.
///
/// Flags affected: None
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pop_word().wrapping_add(1);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Pushing PC+1 (the BRK address + 2, skipping a padding byte)
/// 2. Pushing the status register with B and bit 5 set
/// 3. Setting the I (interrupt disable) flag
/// 4. Loading PC from the IRQ vector at $FFFE/$FFFF
///
/// The B flag is set only in the pushed byte, never in the register.
///
/// Flags affected: I
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.pc.wrapping_add(1);
    cpu.push_word(return_address);
    cpu.push_byte(cpu.status.pushed_with_break());
    cpu.status.set(Flag::InterruptDisable);
    cpu.pc = cpu.memory.read_word(IRQ_VECTOR);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register, then PC. Unlike RTS the popped PC is used
/// unchanged.
///
/// Flags affected: all except B (loaded from stack)
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pop_byte();
    cpu.restore_status(status);
    cpu.pc = cpu.pop_word();
}
