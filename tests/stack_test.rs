//! Tests for PHA, PHP, PLA, PLP and stack pointer wraparound.

use core6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    // PHA; LDA #$00; PLA
    cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x9C);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.sp(), 0xFE);
    assert_eq!(cpu.memory().read(0x01FF), 0x9C);

    cpu.step().unwrap();
    assert!(cpu.flag_z());

    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.a(), 0x9C);
    assert_eq!(cpu.sp(), 0xFF);
    // PLA updates N and Z
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_php_sets_break_and_unused_in_pushed_byte() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.set_status(0x01);

    assert_eq!(cpu.step().unwrap(), 3);

    assert_eq!(cpu.memory().read(0x01FF), 0x31);
    // Register is unchanged
    assert_eq!(cpu.status(), 0x21);
}

#[test]
fn test_plp_forces_unused_and_ignores_break() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.memory_mut().write(0x01FF, 0xDF); // every bit but 5
    cpu.set_sp(0xFE);

    assert_eq!(cpu.step().unwrap(), 4);

    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.status(), 0xEF);
    assert!(!cpu.flag_b());
}

#[test]
fn test_php_plp_round_trip() {
    let mut cpu = setup_cpu();
    // PHP; CLI; SED; PLP
    cpu.memory_mut().load(0x8000, &[0x08, 0x58, 0xF8, 0x28]);
    cpu.set_status(0xC5);

    for _ in 0..4 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.status(), 0xE5);
}

#[test]
fn test_256_pushes_wrap_within_page_one() {
    let mut cpu = setup_cpu();
    // 256 x PHA
    cpu.memory_mut().load(0x8000, &[0x48; 256]);
    cpu.memory_mut().write(0x0200, 0x5A);
    cpu.memory_mut().write(0x00FF, 0x5A);
    cpu.set_a(0xA5);
    let start_sp = cpu.sp();

    for _ in 0..256 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.sp(), start_sp);
    for addr in 0x0100..=0x01FF {
        assert_eq!(cpu.memory().read(addr), 0xA5, "stack byte ${:04X}", addr);
    }
    // Neighbouring pages untouched
    assert_eq!(cpu.memory().read(0x0200), 0x5A);
    assert_eq!(cpu.memory().read(0x00FF), 0x5A);
}

#[test]
fn test_pla_from_empty_stack_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x68);
    cpu.memory_mut().write(0x0100, 0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.a(), 0x42);
}
