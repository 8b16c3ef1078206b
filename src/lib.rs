//! # 6502 Execution Core
//!
//! An NMOS 6502 instruction-execution engine: fetch, decode, resolve the
//! addressing mode, execute, and account cycles, over whatever 64KB memory
//! the host supplies.
//!
//! The crate is a component. It does not service interrupts, render
//! anything, or own a clock; a host embeds the CPU, drives it with
//! [`CPU::step`] or a tick budget, and reads back registers and memory.
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//!
//! // Reset vector points at the program
//! memory.write_word(0xFFFC, 0x8000);
//! memory.load(0x8000, &[
//!     0xA2, 0x05, // LDX #$05
//!     0xCA,       // loop: DEX
//!     0xD0, 0xFD, // BNE loop
//! ]);
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFF);
//! assert!(cpu.flag_i());
//!
//! // 2 + 4 * (2 + 3) + (2 + 2)
//! assert_eq!(cpu.run_for_ticks(26).unwrap(), 26);
//! assert_eq!(cpu.pc(), 0x8005);
//! assert_eq!(cpu.x(), 0);
//! assert!(cpu.flag_z());
//! ```
//!
//! ## Architecture
//!
//! - **Memory** is a trait ([`MemoryBus`]); the CPU is generic over it and
//!   can own a bus, borrow one (`&mut bus` or [`BorrowedMemory`]) or wrap one
//!   with I/O traps ([`TrappedMemory`]).
//! - **Decoding** is one index into [`OPCODE_TABLE`].
//! - **Execution** matches exhaustively on [`Mnemonic`].
//! - **Cycles** are the table's base cost plus page-crossing and
//!   branch-taken penalties, accumulated in a monotonic `u64` counter.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset and the run loop
//! - `memory` - MemoryBus trait and implementations
//! - `trap` - Memory-mapped I/O hooks
//! - `opcodes` - Opcode table and decoder
//! - `addressing` - Addressing modes and operand resolution
//! - `alu` - Pure arithmetic, compare and shift helpers
//! - `flags` - Status register
//! - `config` - Behaviour switches
//! - `keyboard` - Host-side input queue
//! - `wasm` - JavaScript bindings (feature `wasm`)

pub mod addressing;
pub mod alu;
pub mod config;
pub mod cpu;
pub mod flags;
pub mod keyboard;
pub mod memory;
pub mod opcodes;
pub mod trap;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use alu::AluOutput;
pub use config::{CpuConfig, ZeroPageIndexing};
pub use cpu::{CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_BASE};
pub use flags::{Flag, StatusFlags};
pub use keyboard::KeyboardBuffer;
pub use memory::{BorrowedMemory, FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{decode, Instruction, Mnemonic, OPCODE_TABLE};
pub use trap::{ReadHook, TrappedMemory, WriteHook};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// The byte at `pc` is not a documented opcode.
    ///
    /// The CPU is left untouched: PC still points at the byte and no cycles
    /// were charged.
    IllegalOpcode { opcode: u8, pc: u16 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, pc } => {
                write!(f, "Illegal opcode 0x{:02X} at ${:04X}", opcode, pc)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
