//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR on the accumulator or a memory location. The bit
//! shifted out lands in C; N and Z follow the result.

use super::{operand_value, write_operand};
use crate::alu::{shift_left, shift_right, AluOutput};
use crate::{Flag, MemoryBus, Operand, CPU};

fn shift<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    op: fn(u8, bool, bool) -> AluOutput,
    rotate: bool,
) {
    let value = operand_value(cpu, operand);
    let out = op(value, cpu.status.test(Flag::Carry), rotate);

    write_operand(cpu, operand, out.result);
    cpu.status.assign(Flag::Carry, out.carry);
    cpu.status.update_nz(out.result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift(cpu, operand, shift_left, false);
}

/// Executes the LSR (Logical Shift Right) instruction. N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift(cpu, operand, shift_right, false);
}

/// Executes the ROL (Rotate Left) instruction: old C enters bit 0.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift(cpu, operand, shift_left, true);
}

/// Executes the ROR (Rotate Right) instruction: old C enters bit 7.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift(cpu, operand, shift_right, true);
}
