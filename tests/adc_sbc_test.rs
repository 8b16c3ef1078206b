//! Tests for ADC and SBC in binary and decimal mode.
//!
//! Tests cover:
//! - Carry in and carry out
//! - Signed overflow
//! - Decimal mode selected by the D flag
//! - Logical operations sharing the accumulator path (AND, ORA, EOR, BIT)

use core6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn run_immediate(cpu: &mut CPU<FlatMemory>, opcode: u8, operand: u8) {
    cpu.memory_mut().load(0x8000, &[opcode, operand]);
    cpu.set_pc(0x8000);
    cpu.step().unwrap();
}

// ========== ADC ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);

    run_immediate(&mut cpu, 0x69, 0x05);

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_carry_in_and_out() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.set_flag_c(true);

    run_immediate(&mut cpu, 0x69, 0x00);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_signed_overflow() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x7F);

    run_immediate(&mut cpu, 0x69, 0x01);

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_two_negatives() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);

    run_immediate(&mut cpu, 0x69, 0xFF);

    assert_eq!(cpu.a(), 0xFE);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(cpu.flag_n());
}

#[test]
fn test_adc_absolute_x_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x7D, 0xFF, 0x20]);
    cpu.memory_mut().write(0x2100, 0x01);
    cpu.set_x(0x01);
    cpu.set_a(0x01);

    assert_eq!(cpu.step().unwrap(), 5);
    assert_eq!(cpu.a(), 0x02);
}

#[test]
fn test_adc_decimal() {
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);
    cpu.set_a(0x15);

    run_immediate(&mut cpu, 0x69, 0x28);

    assert_eq!(cpu.a(), 0x43);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_carry_and_zero() {
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);
    cpu.set_a(0x45);

    run_immediate(&mut cpu, 0x69, 0x55);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_decimal_with_carry_in() {
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x58);

    run_immediate(&mut cpu, 0x69, 0x46);

    assert_eq!(cpu.a(), 0x05);
    assert!(cpu.flag_c());
}

// ========== SBC ==========

#[test]
fn test_sbc_no_borrow() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x50);
    cpu.set_flag_c(true);

    run_immediate(&mut cpu, 0xE9, 0x30);

    assert_eq!(cpu.a(), 0x20);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_borrow_in() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x50);
    cpu.set_flag_c(false);

    run_immediate(&mut cpu, 0xE9, 0x30);

    assert_eq!(cpu.a(), 0x1F);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_borrow_out() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x00);
    cpu.set_flag_c(true);

    run_immediate(&mut cpu, 0xE9, 0x01);

    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_signed_overflow() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    run_immediate(&mut cpu, 0xE9, 0x01);

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_decimal() {
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x43);

    run_immediate(&mut cpu, 0xE9, 0x28);

    assert_eq!(cpu.a(), 0x15);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_borrow_out() {
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x10);

    run_immediate(&mut cpu, 0xE9, 0x20);

    assert_eq!(cpu.a(), 0x90);
    assert!(!cpu.flag_c());
}

// ========== Logic ==========

#[test]
fn test_and_ora_eor() {
    let mut cpu = setup_cpu();
    cpu.set_a(0b1100_1100);

    run_immediate(&mut cpu, 0x29, 0b1010_1010);
    assert_eq!(cpu.a(), 0b1000_1000);
    assert!(cpu.flag_n());

    run_immediate(&mut cpu, 0x09, 0b0000_0111);
    assert_eq!(cpu.a(), 0b1000_1111);

    run_immediate(&mut cpu, 0x49, 0b1000_1111);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_bit_copies_high_bits() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x24, 0x10]);
    cpu.memory_mut().write(0x0010, 0xC0);
    cpu.set_a(0x01);

    assert_eq!(cpu.step().unwrap(), 3);

    assert!(cpu.flag_z()); // 0x01 & 0xC0 == 0
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_bit_nonzero_and_clears_n_v() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x2C, 0x00, 0x30]);
    cpu.memory_mut().write(0x3000, 0x01);
    cpu.set_a(0x01);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);

    assert_eq!(cpu.step().unwrap(), 4);

    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}
