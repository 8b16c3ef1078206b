//! # Processor Status Register
//!
//! The 6502 keeps its seven status flags (plus one hard-wired bit) in a single
//! byte. [`StatusFlags`] wraps that byte and exposes named single-bit access.
//!
//! Bit layout (NV-BDIZC):
//!
//! | Bit | Flag | Meaning                    |
//! |-----|------|----------------------------|
//! | 7   | N    | Negative                   |
//! | 6   | V    | Overflow                   |
//! | 5   | -    | Unused, always reads 1     |
//! | 4   | B    | Break                      |
//! | 3   | D    | Decimal mode               |
//! | 2   | I    | Interrupt disable          |
//! | 1   | Z    | Zero                       |
//! | 0   | C    | Carry                      |

/// A single bit of the status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Flag {
    /// Carry (bit 0)
    Carry = 0x01,
    /// Zero (bit 1)
    Zero = 0x02,
    /// Interrupt disable (bit 2)
    InterruptDisable = 0x04,
    /// Decimal mode (bit 3)
    Decimal = 0x08,
    /// Break (bit 4)
    Break = 0x10,
    /// Unused bit 5, conventionally always 1
    Unused = 0x20,
    /// Overflow (bit 6)
    Overflow = 0x40,
    /// Negative (bit 7)
    Negative = 0x80,
}

impl Flag {
    /// Returns the bit mask for this flag.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

/// The packed 8-bit status register.
///
/// Whole-byte loads go through [`StatusFlags::from_byte`], which forces the
/// unused bit on, so the register always reads with bit 5 set.
///
/// # Examples
///
/// ```
/// use core6502::{Flag, StatusFlags};
///
/// let mut flags = StatusFlags::power_on();
/// assert!(flags.test(Flag::InterruptDisable));
///
/// flags.set(Flag::Carry);
/// assert!(flags.test(Flag::Carry));
///
/// flags.clear(Flag::Carry);
/// assert!(!flags.test(Flag::Carry));
/// assert_eq!(flags.bits(), 0x24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusFlags(u8);

impl StatusFlags {
    /// Register value after reset: unused bit and interrupt disable set.
    pub const fn power_on() -> Self {
        Self(Flag::Unused.mask() | Flag::InterruptDisable.mask())
    }

    /// Builds a status register from a raw byte, forcing bit 5 on.
    pub const fn from_byte(value: u8) -> Self {
        Self(value | Flag::Unused.mask())
    }

    /// Returns the raw flags byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Sets `flag` to 1.
    pub fn set(&mut self, flag: Flag) {
        self.0 |= flag.mask();
    }

    /// Clears `flag` to 0. Clearing [`Flag::Unused`] is ignored.
    pub fn clear(&mut self, flag: Flag) {
        self.0 &= !flag.mask();
        self.0 |= Flag::Unused.mask();
    }

    /// Returns true if `flag` is 1.
    pub const fn test(self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Sets or clears `flag` according to `on`.
    pub fn assign(&mut self, flag: Flag, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }

    /// Updates N and Z from a result byte.
    pub fn update_nz(&mut self, value: u8) {
        self.assign(Flag::Zero, value == 0);
        self.assign(Flag::Negative, value & 0x80 != 0);
    }

    /// Byte pushed by PHP and BRK: B and bit 5 both set.
    pub const fn pushed_with_break(self) -> u8 {
        self.0 | Flag::Break.mask() | Flag::Unused.mask()
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        Self::power_on()
    }
}

impl From<StatusFlags> for u8 {
    fn from(flags: StatusFlags) -> Self {
        flags.bits()
    }
}
