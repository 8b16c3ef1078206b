//! # Memory Access Layer
//!
//! The CPU never touches memory directly. Every access goes through the
//! `MemoryBus` trait, which keeps the core independent of how the host lays
//! out its 64KB address space.
//!
//! Three buses are provided:
//!
//! - [`FlatMemory`] owns a boxed 64KB image (handy for tests and small hosts)
//! - [`BorrowedMemory`] leases a host-owned 64KB buffer for a lifetime `'a`
//! - `&mut M` for any bus `M`, so a host can lend a bus and take it back
//!
//! Memory-mapped I/O is layered on top by [`crate::trap::TrappedMemory`].
//!
//! Words are always little-endian: low byte at `addr`, high byte at
//! `addr + 1`, with the second address wrapping from 0xFFFF to 0x0000.

/// Number of addressable bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for the CPU to read and write bytes.
///
/// Addresses are `u16`, so every value an implementation receives is in
/// range; there is no bus-error path.
///
/// # Examples
///
/// ```
/// use core6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write_word(0x1234, 0xBEEF);
///
/// assert_eq!(mem.read(0x1234), 0xEF);
/// assert_eq!(mem.read(0x1235), 0xBE);
/// assert_eq!(mem.read_word(0x1234), 0xBEEF);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use core6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are dropped
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified address.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` and `addr + 1`.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word to `addr` and `addr + 1`.
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

impl<M: MemoryBus + ?Sized> MemoryBus for &mut M {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

/// Simple 64KB flat memory owned by the bus.
///
/// All addresses are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
/// memory.load(0x8000, &[0xEA]); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a zero-filled 64KB image.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the whole image.
    pub fn as_bytes(&self) -> &[u8; MEMORY_SIZE] {
        &self.data
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// A 64KB image owned by the host and leased to the CPU.
///
/// The exclusive borrow means nothing else can mutate the buffer while the
/// CPU holds it; the host gets it back when the CPU (or this lease) is
/// dropped.
///
/// # Examples
///
/// ```
/// use core6502::{BorrowedMemory, CPU, MEMORY_SIZE};
///
/// let mut ram = Box::new([0u8; MEMORY_SIZE]);
/// ram[0xFFFC] = 0x00;
/// ram[0xFFFD] = 0x02;
/// ram[0x0200] = 0xE8; // INX
///
/// {
///     let mut cpu = CPU::new(BorrowedMemory::new(&mut ram));
///     cpu.step().unwrap();
///     assert_eq!(cpu.x(), 1);
/// }
///
/// // Lease over, the host owns the buffer again
/// ram[0x0200] = 0xEA;
/// ```
pub struct BorrowedMemory<'a> {
    data: &'a mut [u8; MEMORY_SIZE],
}

impl<'a> BorrowedMemory<'a> {
    /// Leases `data` for the lifetime `'a`.
    pub fn new(data: &'a mut [u8; MEMORY_SIZE]) -> Self {
        Self { data }
    }
}

impl MemoryBus for BorrowedMemory<'_> {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
