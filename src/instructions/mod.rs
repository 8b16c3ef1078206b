//! # 6502 Instruction Implementations
//!
//! This module contains the semantics of all 56 documented instructions,
//! organized by category. Each instruction is a standalone function taking
//! the CPU and the operand the addressing-mode resolver produced; PC has
//! already been advanced past the instruction bytes.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

use crate::{MemoryBus, Mnemonic, Operand, CPU};

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

/// Executes `mnemonic` against an already-resolved operand.
///
/// Returns the cycles the instruction costs on top of its table entry. Only
/// taken branches cost extra here; page-crossing penalties on indexed reads
/// are charged by the caller from the resolver's report.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic, operand: Operand) -> u8 {
    use Mnemonic::*;

    match mnemonic {
        Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs => {
            return branches::execute_branch(cpu, mnemonic, operand);
        }

        Adc => alu::execute_adc(cpu, operand),
        Sbc => alu::execute_sbc(cpu, operand),
        And => alu::execute_and(cpu, operand),
        Ora => alu::execute_ora(cpu, operand),
        Eor => alu::execute_eor(cpu, operand),
        Cmp | Cpx | Cpy => {
            let register = match mnemonic {
                Cpx => cpu.x,
                Cpy => cpu.y,
                _ => cpu.a,
            };
            alu::execute_compare(cpu, register, operand)
        }
        Bit => alu::execute_bit(cpu, operand),

        Asl => shifts::execute_asl(cpu, operand),
        Lsr => shifts::execute_lsr(cpu, operand),
        Rol => shifts::execute_rol(cpu, operand),
        Ror => shifts::execute_ror(cpu, operand),

        Lda => load_store::execute_lda(cpu, operand),
        Ldx => load_store::execute_ldx(cpu, operand),
        Ldy => load_store::execute_ldy(cpu, operand),
        Sta | Stx | Sty => {
            let register = match mnemonic {
                Stx => cpu.x,
                Sty => cpu.y,
                _ => cpu.a,
            };
            load_store::execute_store(cpu, operand, register)
        }

        Inc => inc_dec::execute_inc(cpu, operand),
        Dec => inc_dec::execute_dec(cpu, operand),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Jmp => control::execute_jmp(cpu, operand),
        Jsr => control::execute_jsr(cpu, operand),
        Rts => control::execute_rts(cpu),
        Brk => control::execute_brk(cpu),
        Rti => control::execute_rti(cpu),
        Nop => {}

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        Clc | Sec | Cli | Sei | Cld | Sed | Clv => flags::execute_flag_op(cpu, mnemonic),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txs => transfer::execute_txs(cpu),
    }

    0
}

/// Reads the value an instruction operates on.
///
/// Implied and relative operands carry no data byte; no table entry pairs
/// them with a value-reading instruction.
pub(super) fn operand_value<M: MemoryBus>(cpu: &CPU<M>, operand: Operand) -> u8 {
    match operand {
        Operand::Immediate(value) => value,
        Operand::Address(addr) => cpu.memory.read(addr),
        Operand::Accumulator => cpu.a,
        Operand::Implied | Operand::Relative(_) => 0,
    }
}

/// Writes back to the location an instruction operates on.
pub(super) fn write_operand<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, value: u8) {
    match operand {
        Operand::Address(addr) => cpu.memory.write(addr, value),
        Operand::Accumulator => cpu.a = value,
        Operand::Immediate(_) | Operand::Implied | Operand::Relative(_) => {}
    }
}

/// Read-modify-write: applies `f` to the operand in place and updates N/Z
/// from the result.
pub(super) fn modify<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, f: impl FnOnce(u8) -> u8) {
    let result = f(operand_value(cpu, operand));
    write_operand(cpu, operand, result);
    cpu.status.update_nz(result);
}
