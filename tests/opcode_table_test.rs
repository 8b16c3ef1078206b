//! Consistency checks over the full opcode table.

use core6502::{
    decode, AddressingMode, ExecutionError, FlatMemory, MemoryBus, Mnemonic, CPU, OPCODE_TABLE,
};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_table_has_151_documented_opcodes() {
    assert_eq!(OPCODE_TABLE.iter().flatten().count(), 151);
}

#[test]
fn test_every_mnemonic_is_reachable() {
    let mut seen: Vec<Mnemonic> = OPCODE_TABLE.iter().flatten().map(|i| i.mnemonic).collect();
    seen.sort_by_key(|m| m.as_str());
    seen.dedup();
    assert_eq!(seen.len(), 56);
}

#[test]
fn test_base_cycles_in_hardware_range() {
    for instruction in OPCODE_TABLE.iter().flatten() {
        assert!(
            (2..=7).contains(&instruction.base_cycles),
            "{} {:?}",
            instruction.mnemonic,
            instruction.mode
        );
    }
}

#[test]
fn test_relative_mode_only_for_branches() {
    for instruction in OPCODE_TABLE.iter().flatten() {
        let is_branch = instruction.mnemonic.as_str().starts_with('B')
            && !matches!(instruction.mnemonic, Mnemonic::Bit | Mnemonic::Brk);
        assert_eq!(instruction.mode == AddressingMode::Relative, is_branch);
    }
}

#[test]
fn test_indirect_mode_only_for_jmp() {
    let indirect: Vec<_> = OPCODE_TABLE
        .iter()
        .flatten()
        .filter(|i| i.mode == AddressingMode::Indirect)
        .collect();
    assert_eq!(indirect.len(), 1);
    assert_eq!(indirect[0].mnemonic, Mnemonic::Jmp);
}

#[test]
fn test_every_documented_opcode_executes() {
    for opcode in 0..=255u8 {
        let Some(instruction) = decode(opcode) else {
            continue;
        };
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, 0x10, 0x20]);

        let cycles = cpu.step().unwrap();
        assert!(cycles >= instruction.base_cycles, "opcode 0x{:02X}", opcode);
    }
}

#[test]
fn test_pc_advances_by_instruction_size() {
    for opcode in 0..=255u8 {
        let Some(instruction) = decode(opcode) else {
            continue;
        };
        // Control flow sets PC itself
        if matches!(
            instruction.mnemonic,
            Mnemonic::Jmp | Mnemonic::Jsr | Mnemonic::Rts | Mnemonic::Rti | Mnemonic::Brk
        ) || instruction.mode == AddressingMode::Relative
        {
            continue;
        }
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, 0x10, 0x20]);

        cpu.step().unwrap();
        assert_eq!(
            cpu.pc(),
            0x8000 + instruction.size() as u16,
            "opcode 0x{:02X}",
            opcode
        );
    }
}

#[test]
fn test_every_undocumented_opcode_is_rejected() {
    for opcode in 0..=255u8 {
        if decode(opcode).is_some() {
            continue;
        }
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, opcode);

        assert_eq!(
            cpu.step(),
            Err(ExecutionError::IllegalOpcode { opcode, pc: 0x8000 })
        );
        assert_eq!(cpu.cycles(), 0);
    }
}
