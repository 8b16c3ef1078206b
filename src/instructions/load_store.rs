//! # Load and Store Instructions
//!
//! This module implements register loads and stores:
//! - LDA, LDX, LDY: Load a register, updating N and Z
//! - STA, STX, STY: Store a register to memory, no flags affected

use super::{operand_value, write_operand};
use crate::{MemoryBus, Operand, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Flags affected: N, Z
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
/// memory.load(0x8000, &[0xBD, 0xF0, 0x12]); // LDA $12F0,X
/// memory.write(0x1300, 0x80);
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_x(0x10);
///
/// // Index crosses into page $13: one extra cycle
/// assert_eq!(cpu.step().unwrap(), 5);
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.flag_n());
/// assert!(!cpu.flag_z());
/// ```
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a = operand_value(cpu, operand);
    cpu.status.update_nz(cpu.a);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.x = operand_value(cpu, operand);
    cpu.status.update_nz(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.y = operand_value(cpu, operand);
    cpu.status.update_nz(cpu.y);
}

/// Executes STA, STX or STY: writes `value` (the register) to memory.
///
/// Stores never pay a page-crossing penalty; the indexed forms always take
/// the longer fixed time.
///
/// Flags affected: None
pub(crate) fn execute_store<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, value: u8) {
    write_operand(cpu, operand, value);
}
