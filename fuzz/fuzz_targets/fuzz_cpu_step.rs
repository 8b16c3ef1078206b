//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary CPU state, configuration and memory image, executes
//! one instruction, and checks the invariants that must hold for every
//! opcode.

#![no_main]

use arbitrary::Arbitrary;
use core6502::{
    decode, CpuConfig, ExecutionError, FlatMemory, MemoryBus, ZeroPageIndexing, CPU,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzConfig {
    signed_zero_page: bool,
    indirect_jmp_page_bug: bool,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at PC (opcode + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Placed at 0x4000 for absolute and indirect targets
    main_memory: [u8; 256],
    irq_vector: u16,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    config: FuzzConfig,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    memory.write_word(0xFFFE, input.memory.irq_vector);
    // Last so the instruction survives any overlap with the regions above
    memory.load(input.cpu_state.pc, &input.memory.instruction_bytes);

    let config = CpuConfig {
        zero_page_indexing: if input.config.signed_zero_page {
            ZeroPageIndexing::SignedDelta
        } else {
            ZeroPageIndexing::Wrapping
        },
        indirect_jmp_page_bug: input.config.indirect_jmp_page_bug,
    };

    let mut cpu = CPU::with_config(memory, config);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_status(input.cpu_state.status);

    let opcode = input.memory.instruction_bytes[0];
    let pc = cpu.pc();

    match cpu.step() {
        Ok(cycles) => {
            let instruction = decode(opcode).expect("executed opcode must decode");
            // Base cost, at most one page penalty, at most two branch cycles
            assert!(cycles >= instruction.base_cycles);
            assert!(cycles <= instruction.base_cycles + 2);
            assert_eq!(cpu.cycles(), cycles as u64);
        }
        Err(ExecutionError::IllegalOpcode { opcode: got, pc: at }) => {
            assert!(decode(opcode).is_none());
            assert_eq!(got, opcode);
            assert_eq!(at, pc);
            assert_eq!(cpu.pc(), pc);
            assert_eq!(cpu.cycles(), 0);
        }
    }

    assert_eq!(cpu.status() & 0x20, 0x20, "bit 5 must stay set");
});
