//! # CPU Configuration
//!
//! Behaviour switches for the places where real NMOS hardware and the
//! straightforward reading of the instruction set disagree. The defaults
//! follow hardware except for the indirect-jump errata, which is opt-in.

/// How ZeroPage,X / ZeroPage,Y and the (Indirect,X) pointer add the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroPageIndexing {
    /// Index added unsigned, modulo 256. The result never leaves page zero.
    #[default]
    Wrapping,

    /// Index treated as a signed two's-complement delta and added with
    /// 16-bit wraparound. `$80,X` with X=$FF reads `$007F`; `$10,X` with
    /// X=$F0 reads `$0000`, but `$00,X` with X=$FF reads `$FFFF`.
    SignedDelta,
}

/// Construction-time options for [`crate::CPU`].
///
/// # Examples
///
/// ```
/// use core6502::{CpuConfig, ZeroPageIndexing};
///
/// let config = CpuConfig {
///     indirect_jmp_page_bug: true,
///     ..CpuConfig::default()
/// };
/// assert_eq!(config.zero_page_indexing, ZeroPageIndexing::Wrapping);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    /// Index arithmetic for zero-page indexed modes.
    pub zero_page_indexing: ZeroPageIndexing,

    /// Reproduce the NMOS `JMP ($xxFF)` errata: the high byte of the target
    /// is fetched from `$xx00` instead of the next page.
    pub indirect_jmp_page_bug: bool,
}
