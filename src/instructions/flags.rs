//! # Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV: each sets or clears exactly one
//! status flag and touches nothing else. There is no SEV.

use crate::{Flag, MemoryBus, Mnemonic, CPU};

pub(crate) fn execute_flag_op<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic) {
    let (flag, on) = match mnemonic {
        Mnemonic::Clc => (Flag::Carry, false),
        Mnemonic::Sec => (Flag::Carry, true),
        Mnemonic::Cli => (Flag::InterruptDisable, false),
        Mnemonic::Sei => (Flag::InterruptDisable, true),
        Mnemonic::Cld => (Flag::Decimal, false),
        Mnemonic::Sed => (Flag::Decimal, true),
        Mnemonic::Clv => (Flag::Overflow, false),
        _ => return,
    };
    cpu.status.assign(flag, on);
}
