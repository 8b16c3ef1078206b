//! Zero-page indexed addressing under both indexing rules.
//!
//! `Wrapping` (default) keeps ZeroPage,X / ZeroPage,Y and the (Indirect,X)
//! pointer inside page zero. `SignedDelta` treats the index as a signed
//! offset with 16-bit wraparound.

use core6502::{CpuConfig, FlatMemory, MemoryBus, ZeroPageIndexing, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    setup_cpu_with(ZeroPageIndexing::Wrapping)
}

fn setup_cpu_with(indexing: ZeroPageIndexing) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let config = CpuConfig {
        zero_page_indexing: indexing,
        ..CpuConfig::default()
    };
    CPU::with_config(memory, config)
}

// ========== Wrapping ==========

#[test]
fn test_zero_page_x_wraps_within_page_zero() {
    let mut cpu = setup_cpu();
    // LDA $80,X with X=$FF reads $7F
    cpu.memory_mut().load(0x8000, &[0xB5, 0x80]);
    cpu.memory_mut().write(0x007F, 0x11);
    cpu.memory_mut().write(0x017F, 0x22);
    cpu.set_x(0xFF);

    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.a(), 0x11);
}

#[test]
fn test_zero_page_x_ff_plus_one_is_zero() {
    let mut cpu = setup_cpu();
    // STA $FF,X with X=1 writes $00, not $0100
    cpu.memory_mut().load(0x8000, &[0x95, 0xFF]);
    cpu.set_x(0x01);
    cpu.set_a(0x77);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0000), 0x77);
    assert_eq!(cpu.memory().read(0x0100), 0x00);
}

#[test]
fn test_zero_page_y_wraps() {
    let mut cpu = setup_cpu();
    // LDX $F0,Y with Y=$20 reads $10
    cpu.memory_mut().load(0x8000, &[0xB6, 0xF0]);
    cpu.memory_mut().write(0x0010, 0x33);
    cpu.set_y(0x20);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x33);
}

#[test]
fn test_indirect_x_pointer_wraps() {
    let mut cpu = setup_cpu();
    // LDA ($F0,X) with X=$0F: pointer at $FF, high byte from $00
    cpu.memory_mut().load(0x8000, &[0xA1, 0xF0]);
    cpu.memory_mut().write(0x00FF, 0x34);
    cpu.memory_mut().write(0x0000, 0x12);
    cpu.memory_mut().write(0x1234, 0x56);
    cpu.set_x(0x0F);

    assert_eq!(cpu.step().unwrap(), 6);
    assert_eq!(cpu.a(), 0x56);
}

#[test]
fn test_indirect_y_pointer_high_byte_wraps() {
    let mut cpu = setup_cpu();
    // LDA ($FF),Y: pointer low at $FF, high at $00
    cpu.memory_mut().load(0x8000, &[0xB1, 0xFF]);
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x30);
    cpu.memory_mut().write(0x3002, 0x9A);
    cpu.set_y(0x02);

    assert_eq!(cpu.step().unwrap(), 5);
    assert_eq!(cpu.a(), 0x9A);
}

// ========== Signed delta ==========

#[test]
fn test_signed_delta_negative_index() {
    let mut cpu = setup_cpu_with(ZeroPageIndexing::SignedDelta);
    // $80 + (-1) = $7F, same as wrapping
    cpu.memory_mut().load(0x8000, &[0xB5, 0x80]);
    cpu.memory_mut().write(0x007F, 0x11);
    cpu.set_x(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x11);
}

#[test]
fn test_signed_delta_escapes_page_zero() {
    let mut cpu = setup_cpu_with(ZeroPageIndexing::SignedDelta);
    // $FF + 1 = $0100
    cpu.memory_mut().load(0x8000, &[0xB5, 0xFF]);
    cpu.memory_mut().write(0x0000, 0x11);
    cpu.memory_mut().write(0x0100, 0x22);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x22);
}

#[test]
fn test_signed_delta_wraps_below_zero() {
    let mut cpu = setup_cpu_with(ZeroPageIndexing::SignedDelta);
    // $00 + (-1) = $FFFF
    cpu.memory_mut().load(0x8000, &[0xB5, 0x00]);
    cpu.memory_mut().write(0xFFFF, 0x44);
    cpu.memory_mut().write(0x00FF, 0x55);
    cpu.set_x(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x44);
}

#[test]
fn test_signed_delta_indirect_x_pointer() {
    let mut cpu = setup_cpu_with(ZeroPageIndexing::SignedDelta);
    // ($FF,X) with X=1: pointer at $0100/$0101
    cpu.memory_mut().load(0x8000, &[0xA1, 0xFF]);
    cpu.memory_mut().write_word(0x0100, 0x4000);
    cpu.memory_mut().write(0x4000, 0x66);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x66);
}
