//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: packed NV-BDIZC byte
//! - **Cycle counter**: u64 monotonically increasing tick count
//! - **Interrupt lines**: NMI/IRQ "waiting for handler" bits, owned by the host
//!
//! ## Execution Model
//!
//! - `step()`: execute one instruction, returning its cycle cost
//! - `run_for_ticks()`: execute whole instructions until a tick budget is met
//! - `run_until_stopped()`: execute until a cancellation flag is raised
//!
//! Execution stops only on instruction boundaries. Every instruction's
//! register, flag and memory effects are complete before the next fetch.
//!
//! ## Threads
//!
//! The core is synchronous and holds no locks. A host that inspects CPU state
//! from another thread wraps the whole `CPU` in its own `Mutex` (or drives it
//! from a single owning task) and sets the stop flag to end an unbounded run.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::flags::{Flag, StatusFlags};
use crate::{decode, instructions, CpuConfig, ExecutionError, MemoryBus};

/// Address of the reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Address of the NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// 6502 CPU state and execution context.
///
/// The CPU is generic over its memory via the `MemoryBus` trait. It borrows
/// nothing itself; pass a [`crate::BorrowedMemory`] or `&mut bus` to lend it
/// host-owned memory.
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
/// memory.load(0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert!(cpu.flag_i());
///
/// assert_eq!(cpu.step().unwrap(), 2);
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Status register
    pub(crate) status: StatusFlags,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    pub(crate) waiting_for_nmi: bool,
    pub(crate) waiting_for_irq: bool,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU over `memory` with the default [`CpuConfig`] and resets it.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU over `memory` with an explicit configuration and resets it.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0xFF,
            status: StatusFlags::power_on(),
            cycles: 0,
            waiting_for_nmi: false,
            waiting_for_irq: false,
            config,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Puts the CPU into its reset state.
    ///
    /// - A, X, Y cleared, SP = 0xFF
    /// - Status = unused bit and I set, everything else clear
    /// - PC loaded from the little-endian word at [`RESET_VECTOR`]
    /// - Pending interrupt bits cleared
    ///
    /// The cycle counter is left alone; it only ever increases.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFF;
        self.status = StatusFlags::power_on();
        self.waiting_for_nmi = false;
        self.waiting_for_irq = false;
        self.pc = self.memory.read_word(RESET_VECTOR);

        log::debug!("reset: PC=${:04X} from vector ${:04X}", self.pc, RESET_VECTOR);
    }

    /// Executes one instruction and returns the cycles it took.
    ///
    /// On an illegal opcode nothing is changed: PC still points at the
    /// offending byte and no cycles are charged.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    /// mem.write(0x8000, 0x02); // undocumented
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::IllegalOpcode { opcode: 0x02, pc: 0x8000 })
    /// );
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        let pc = self.pc;
        let opcode = self.memory.read(pc);

        let Some(instruction) = decode(opcode) else {
            log::warn!("illegal opcode ${:02X} at ${:04X}", opcode, pc);
            return Err(ExecutionError::IllegalOpcode { opcode, pc });
        };

        self.pc = pc.wrapping_add(1);
        let resolved = self.resolve(instruction.mode);
        let branch_cycles = instructions::execute(self, instruction.mnemonic, resolved.operand);

        let mut cycles = instruction.base_cycles + branch_cycles;
        if resolved.page_crossed && instruction.page_penalty {
            cycles += 1;
        }
        self.cycles += cycles as u64;

        log::trace!(
            "${:04X}: {:02X} {} {:?} ({} cycles)",
            pc,
            opcode,
            instruction.mnemonic,
            resolved.operand,
            cycles
        );

        Ok(cycles)
    }

    /// Runs whole instructions until at least `budget` ticks have elapsed.
    ///
    /// Returns the ticks actually consumed, which may overshoot the budget by
    /// up to one instruction. A zero budget executes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    /// mem.load(0x8000, &[0xEA; 16]); // NOPs, 2 cycles each
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_ticks(5).unwrap(), 6);
    /// assert_eq!(cpu.pc(), 0x8003);
    /// ```
    pub fn run_for_ticks(&mut self, budget: u64) -> Result<u64, ExecutionError> {
        self.run(Some(budget), None)
    }

    /// Runs until `stop` is raised, checking it before every instruction.
    ///
    /// This is the unbounded mode; it only returns on the stop flag or an
    /// error.
    pub fn run_until_stopped(&mut self, stop: &AtomicBool) -> Result<u64, ExecutionError> {
        self.run(None, Some(stop))
    }

    /// Shared run loop: stops when the budget (if any) is met or `stop` (if
    /// any) is raised, whichever comes first. With neither it never returns
    /// except on error.
    pub fn run(
        &mut self,
        budget: Option<u64>,
        stop: Option<&AtomicBool>,
    ) -> Result<u64, ExecutionError> {
        let start = self.cycles;

        loop {
            let elapsed = self.cycles - start;
            if budget.is_some_and(|budget| elapsed >= budget) {
                break;
            }
            if stop.is_some_and(|stop| stop.load(Ordering::Relaxed)) {
                break;
            }
            self.step()?;
        }

        Ok(self.cycles - start)
    }

    // ========== Instruction Stream ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn next_byte(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Reads the little-endian word at PC and advances PC by two.
    pub(crate) fn next_word(&mut self) -> u16 {
        let lo = self.next_byte() as u16;
        let hi = self.next_byte() as u16;
        (hi << 8) | lo
    }

    // ========== Stack ==========
    //
    // The stack lives in page 1 and grows downward. SP wraps modulo 256, so
    // no push or pop ever touches memory outside 0x0100-0x01FF.

    pub(crate) fn push_byte(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pop_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes high byte first, then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte((value & 0xFF) as u8);
    }

    /// Pops low byte first, then high byte.
    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.pop_byte() as u16;
        let hi = self.pop_byte() as u16;
        (hi << 8) | lo
    }

    /// Loads the status register from a byte pulled off the stack (PLP, RTI).
    /// Bit 5 is forced on and B keeps its current value.
    pub(crate) fn restore_status(&mut self, pulled: u8) {
        let break_bit = self.status.bits() & Flag::Break.mask();
        self.status = StatusFlags::from_byte((pulled & !Flag::Break.mask()) | break_bit);
    }

    // ========== Register Getters and Setters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Returns the status register as a packed byte (bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Overwrites the whole status register. Bit 5 is forced on.
    pub fn set_status(&mut self, value: u8) {
        self.status = StatusFlags::from_byte(value);
    }

    /// Returns the status register.
    pub fn flags(&self) -> StatusFlags {
        self.status
    }

    /// Returns true if `flag` is set.
    pub fn flag(&self, flag: Flag) -> bool {
        self.status.test(flag)
    }

    /// Sets or clears `flag`.
    pub fn set_flag(&mut self, flag: Flag, on: bool) {
        self.status.assign(flag, on);
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Status Flag Shorthands ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.test(Flag::Negative)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.test(Flag::Overflow)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.test(Flag::Break)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.test(Flag::Decimal)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.test(Flag::InterruptDisable)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.test(Flag::Zero)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.test(Flag::Carry)
    }

    pub fn set_flag_n(&mut self, on: bool) {
        self.status.assign(Flag::Negative, on);
    }

    pub fn set_flag_v(&mut self, on: bool) {
        self.status.assign(Flag::Overflow, on);
    }

    pub fn set_flag_b(&mut self, on: bool) {
        self.status.assign(Flag::Break, on);
    }

    pub fn set_flag_d(&mut self, on: bool) {
        self.status.assign(Flag::Decimal, on);
    }

    pub fn set_flag_i(&mut self, on: bool) {
        self.status.assign(Flag::InterruptDisable, on);
    }

    pub fn set_flag_z(&mut self, on: bool) {
        self.status.assign(Flag::Zero, on);
    }

    pub fn set_flag_c(&mut self, on: bool) {
        self.status.assign(Flag::Carry, on);
    }

    // ========== Interrupt Lines ==========
    //
    // State only. Servicing NMI/IRQ belongs to the host's interrupt layer.

    pub fn waiting_for_nmi(&self) -> bool {
        self.waiting_for_nmi
    }

    pub fn set_waiting_for_nmi(&mut self, waiting: bool) {
        self.waiting_for_nmi = waiting;
    }

    pub fn waiting_for_irq(&self) -> bool {
        self.waiting_for_irq
    }

    pub fn set_waiting_for_irq(&mut self, waiting: bool) {
        self.waiting_for_irq = waiting;
    }

    // ========== Memory Access ==========

    /// Returns the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the memory bus mutably, for loading programs or poking state.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands the memory bus back.
    pub fn into_memory(self) -> M {
        self.memory
    }
}
