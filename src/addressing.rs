//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 and the
//! resolver that turns an instruction's trailing bytes into an operand.
//!
//! Resolution consumes the operand bytes (advancing PC) and reports whether
//! an indexed access crossed a page boundary, which costs an extra cycle on
//! read instructions.

use crate::{MemoryBus, ZeroPageIndexing, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// What an instruction operates on once its addressing mode is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (implicit instructions).
    Implied,
    /// The accumulator.
    Accumulator,
    /// A constant taken from the instruction stream.
    Immediate(u8),
    /// An effective memory address.
    Address(u16),
    /// A branch displacement.
    Relative(i8),
}

/// An operand plus the page-crossing report for cycle accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    pub page_crossed: bool,
}

impl Resolved {
    const fn flat(operand: Operand) -> Self {
        Self {
            operand,
            page_crossed: false,
        }
    }
}

/// Returns true if `a` and `b` lie in different 256-byte pages.
pub const fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Adds `delta` to `base` as a signed two's-complement byte, wrapping at 16 bits.
///
/// ```
/// use core6502::addressing::add_signed_byte;
///
/// assert_eq!(add_signed_byte(0x0200, 0x33), 0x0233);
/// assert_eq!(add_signed_byte(0x0200, 0xFF), 0x01FF);
/// ```
pub const fn add_signed_byte(base: u16, delta: u8) -> u16 {
    base.wrapping_add_signed(delta as i8 as i16)
}

/// Zero-page address for `base + index` under the chosen indexing rule.
pub const fn index_zero_page(base: u8, index: u8, indexing: ZeroPageIndexing) -> u16 {
    match indexing {
        ZeroPageIndexing::Wrapping => base.wrapping_add(index) as u16,
        ZeroPageIndexing::SignedDelta => add_signed_byte(base as u16, index),
    }
}

/// `base + index` with 16-bit wraparound, and whether the page changed.
pub const fn index_absolute(base: u16, index: u8) -> (u16, bool) {
    let addr = base.wrapping_add(index as u16);
    (addr, pages_differ(base, addr))
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` against the instruction bytes at PC, advancing PC
    /// past them.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Resolved {
        match mode {
            AddressingMode::Implicit => Resolved::flat(Operand::Implied),
            AddressingMode::Accumulator => Resolved::flat(Operand::Accumulator),
            AddressingMode::Immediate => Resolved::flat(Operand::Immediate(self.next_byte())),
            AddressingMode::Relative => Resolved::flat(Operand::Relative(self.next_byte() as i8)),
            AddressingMode::ZeroPage => {
                Resolved::flat(Operand::Address(self.next_byte() as u16))
            }
            AddressingMode::ZeroPageX => {
                let base = self.next_byte();
                let indexing = self.config.zero_page_indexing;
                Resolved::flat(Operand::Address(index_zero_page(base, self.x, indexing)))
            }
            AddressingMode::ZeroPageY => {
                let base = self.next_byte();
                let indexing = self.config.zero_page_indexing;
                Resolved::flat(Operand::Address(index_zero_page(base, self.y, indexing)))
            }
            AddressingMode::Absolute => Resolved::flat(Operand::Address(self.next_word())),
            AddressingMode::AbsoluteX => {
                let (addr, page_crossed) = index_absolute(self.next_word(), self.x);
                Resolved {
                    operand: Operand::Address(addr),
                    page_crossed,
                }
            }
            AddressingMode::AbsoluteY => {
                let (addr, page_crossed) = index_absolute(self.next_word(), self.y);
                Resolved {
                    operand: Operand::Address(addr),
                    page_crossed,
                }
            }
            AddressingMode::Indirect => {
                let ptr = self.next_word();
                Resolved::flat(Operand::Address(self.indirect_target(ptr)))
            }
            AddressingMode::IndirectX => {
                let base = self.next_byte();
                let ptr = index_zero_page(base, self.x, self.config.zero_page_indexing);
                Resolved::flat(Operand::Address(self.zero_page_pointer(ptr)))
            }
            AddressingMode::IndirectY => {
                let ptr = self.next_byte() as u16;
                let (addr, page_crossed) = index_absolute(self.zero_page_pointer(ptr), self.y);
                Resolved {
                    operand: Operand::Address(addr),
                    page_crossed,
                }
            }
        }
    }

    /// Reads the word a zero-page pointer refers to.
    ///
    /// With `Wrapping` indexing the high byte of a pointer at `$FF` comes
    /// from `$00`; with `SignedDelta` it comes from `ptr + 1`.
    fn zero_page_pointer(&self, ptr: u16) -> u16 {
        let hi_addr = match self.config.zero_page_indexing {
            ZeroPageIndexing::Wrapping => (ptr as u8).wrapping_add(1) as u16,
            ZeroPageIndexing::SignedDelta => ptr.wrapping_add(1),
        };
        let lo = self.memory.read(ptr) as u16;
        let hi = self.memory.read(hi_addr) as u16;
        (hi << 8) | lo
    }

    /// Target of `JMP (ptr)`.
    fn indirect_target(&self, ptr: u16) -> u16 {
        if self.config.indirect_jmp_page_bug && (ptr & 0x00FF) == 0x00FF {
            let lo = self.memory.read(ptr) as u16;
            let hi = self.memory.read(ptr & 0xFF00) as u16;
            (hi << 8) | lo
        } else {
            self.memory.read_word(ptr)
        }
    }
}
