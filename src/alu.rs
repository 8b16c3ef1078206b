//! # ALU Helpers
//!
//! Pure arithmetic, compare and shift primitives. None of them touch CPU
//! state; the instruction executors copy the returned carry/overflow into
//! the status register and derive N and Z from the result byte.
//!
//! ## Decimal mode
//!
//! [`add_decimal`] and [`subtract_decimal`] treat each nibble as a BCD
//! digit. Nibbles A-F have no defined result on the NMOS part; here they
//! are clamped to 9 before the arithmetic. Overflow is not meaningful in
//! decimal mode and is always reported clear.

/// The outcome of an ALU operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluOutput {
    pub result: u8,
    pub carry: bool,
    pub overflow: bool,
}

impl AluOutput {
    /// Z: the result byte is zero.
    pub const fn zero(&self) -> bool {
        self.result == 0
    }

    /// N: bit 7 of the result byte.
    pub const fn negative(&self) -> bool {
        self.result & 0x80 != 0
    }
}

/// Binary add with carry.
///
/// ```
/// use core6502::alu::add_hex;
///
/// let out = add_hex(0x7F, 0x01, false);
/// assert_eq!(out.result, 0x80);
/// assert!(out.overflow && out.negative() && !out.carry);
/// ```
pub const fn add_hex(a: u8, b: u8, carry_in: bool) -> AluOutput {
    let sum = a as u16 + b as u16 + carry_in as u16;
    let result = sum as u8;
    AluOutput {
        result,
        carry: sum > 0xFF,
        // Both operands share a sign the result does not
        overflow: (a ^ result) & (b ^ result) & 0x80 != 0,
    }
}

/// Binary subtract with borrow: `a - b - (1 - carry_in)`.
///
/// Carry out is set when no borrow occurred.
pub const fn subtract_hex(a: u8, b: u8, carry_in: bool) -> AluOutput {
    let borrow = !carry_in as i16;
    let diff = a as i16 - b as i16 - borrow;
    let result = diff as u8;
    AluOutput {
        result,
        carry: diff >= 0,
        // Operands of different sign, result's sign differs from the minuend
        overflow: (a ^ result) & (a ^ b) & 0x80 != 0,
    }
}

const fn bcd_digits(value: u8) -> (i16, i16) {
    let lo = value & 0x0F;
    let hi = value >> 4;
    let lo = if lo > 9 { 9 } else { lo };
    let hi = if hi > 9 { 9 } else { hi };
    (hi as i16, lo as i16)
}

/// Packed-BCD add with carry.
///
/// ```
/// use core6502::alu::add_decimal;
///
/// assert_eq!(add_decimal(0x15, 0x28, false).result, 0x43);
///
/// let out = add_decimal(0x45, 0x55, false);
/// assert_eq!(out.result, 0x00);
/// assert!(out.carry && out.zero());
/// ```
pub const fn add_decimal(a: u8, b: u8, carry_in: bool) -> AluOutput {
    let (a_hi, a_lo) = bcd_digits(a);
    let (b_hi, b_lo) = bcd_digits(b);

    let mut lo = a_lo + b_lo + carry_in as i16;
    let mut half_carry = 0;
    if lo > 9 {
        lo -= 10;
        half_carry = 1;
    }

    let mut hi = a_hi + b_hi + half_carry;
    let carry = hi > 9;
    if carry {
        hi -= 10;
    }

    AluOutput {
        result: ((hi << 4) | lo) as u8,
        carry,
        overflow: false,
    }
}

/// Packed-BCD subtract with borrow: `a - b - (1 - carry_in)`.
///
/// Carry out is set when no borrow occurred, matching the binary form.
pub const fn subtract_decimal(a: u8, b: u8, carry_in: bool) -> AluOutput {
    let (a_hi, a_lo) = bcd_digits(a);
    let (b_hi, b_lo) = bcd_digits(b);

    let mut lo = a_lo - b_lo - !carry_in as i16;
    let mut half_borrow = 0;
    if lo < 0 {
        lo += 10;
        half_borrow = 1;
    }

    let mut hi = a_hi - b_hi - half_borrow;
    let borrow = hi < 0;
    if borrow {
        hi += 10;
    }

    AluOutput {
        result: ((hi << 4) | lo) as u8,
        carry: !borrow,
        overflow: false,
    }
}

/// `register - value` for CMP/CPX/CPY; only the flags are kept.
///
/// Carry is `register >= value`; N and Z come from the difference, not from
/// the register.
///
/// ```
/// use core6502::alu::compare;
///
/// let out = compare(0x10, 0x20);
/// assert!(!out.carry);
/// assert!(out.negative()); // 0x10 - 0x20 = 0xF0
/// ```
pub const fn compare(register: u8, value: u8) -> AluOutput {
    AluOutput {
        result: register.wrapping_sub(value),
        carry: register >= value,
        overflow: false,
    }
}

/// ASL (`rotate == false`) or ROL (`rotate == true`).
///
/// Bit 7 goes to carry. ROL shifts the incoming carry into bit 0; ASL shifts
/// in zero.
pub const fn shift_left(value: u8, carry_in: bool, rotate: bool) -> AluOutput {
    let fill = if rotate { carry_in as u8 } else { 0 };
    AluOutput {
        result: (value << 1) | fill,
        carry: value & 0x80 != 0,
        overflow: false,
    }
}

/// LSR (`rotate == false`) or ROR (`rotate == true`).
///
/// Bit 0 goes to carry. ROR shifts the incoming carry into bit 7; LSR shifts
/// in zero.
pub const fn shift_right(value: u8, carry_in: bool, rotate: bool) -> AluOutput {
    let fill = if rotate { (carry_in as u8) << 7 } else { 0 };
    AluOutput {
        result: (value >> 1) | fill,
        carry: value & 0x01 != 0,
        overflow: false,
    }
}
