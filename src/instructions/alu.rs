//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register compares
//! - BIT: Bit test
//!
//! The arithmetic itself lives in [`crate::alu`]; these functions pick the
//! helper and copy its flags into the status register.

use super::operand_value;
use crate::alu::{add_decimal, add_hex, compare, subtract_decimal, subtract_hex, AluOutput};
use crate::{Flag, MemoryBus, Operand, CPU};

fn store_arithmetic<M: MemoryBus>(cpu: &mut CPU<M>, out: AluOutput) {
    cpu.a = out.result;
    cpu.status.assign(Flag::Carry, out.carry);
    cpu.status.assign(Flag::Overflow, out.overflow);
    cpu.status.update_nz(out.result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. The Decimal
/// flag selects packed-BCD arithmetic; in that mode V is always cleared.
///
/// Flags affected: N, V, Z, C
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = operand_value(cpu, operand);
    let carry = cpu.status.test(Flag::Carry);

    let out = if cpu.status.test(Flag::Decimal) {
        add_decimal(cpu.a, value, carry)
    } else {
        add_hex(cpu.a, value, carry)
    };
    store_arithmetic(cpu, out);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`. Carry is set afterwards when no borrow
/// occurred. The Decimal flag selects packed-BCD arithmetic.
///
/// Flags affected: N, V, Z, C
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = operand_value(cpu, operand);
    let carry = cpu.status.test(Flag::Carry);

    let out = if cpu.status.test(Flag::Decimal) {
        subtract_decimal(cpu.a, value, carry)
    } else {
        subtract_hex(cpu.a, value, carry)
    };
    store_arithmetic(cpu, out);
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = operand_value(cpu, operand);
    cpu.a &= value;
    cpu.status.update_nz(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = operand_value(cpu, operand);
    cpu.a |= value;
    cpu.status.update_nz(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = operand_value(cpu, operand);
    cpu.a ^= value;
    cpu.status.update_nz(cpu.a);
}

/// Executes CMP, CPX or CPY against `register`.
///
/// Computes `register - M` and discards the difference. C is set when
/// `register >= M`; N and Z reflect the difference.
///
/// Flags affected: N, Z, C
pub(crate) fn execute_compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    let out = compare(register, operand_value(cpu, operand));
    cpu.status.assign(Flag::Carry, out.carry);
    cpu.status.update_nz(out.result);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from `A & M`; N and V are copied from bits 7 and 6 of the
/// memory byte. The accumulator is not modified.
///
/// Flags affected: N, V, Z
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = operand_value(cpu, operand);
    cpu.status.assign(Flag::Zero, cpu.a & value == 0);
    cpu.status.assign(Flag::Negative, value & 0x80 != 0);
    cpu.status.assign(Flag::Overflow, value & 0x40 != 0);
}
