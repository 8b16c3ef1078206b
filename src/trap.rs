//! # Memory-Mapped I/O Trapping
//!
//! `TrappedMemory` wraps any [`MemoryBus`] and lets a peripheral layer watch
//! a set of designated addresses without the CPU knowing peripherals exist.
//!
//! - On a read from a trapped address the read hook runs first. If it
//!   returns `Some(byte)`, that byte is what the CPU sees; `None` falls
//!   through to the stored byte.
//! - On a write to a trapped address the write hook receives the address
//!   and value and returns the byte that actually gets stored.
//!
//! Untrapped addresses, and trapped addresses with no hook installed, go
//! straight to the inner bus.
//!
//! Hooks take `&self`-style closures (`Fn`). A peripheral that needs mutable
//! state shares it through `Rc<RefCell<_>>` or `Cell`, the same way the
//! WebAssembly binding shares its keyboard buffer.

use crate::MemoryBus;
use std::collections::HashSet;

/// Read intercept: `Some(byte)` overrides the stored byte.
pub type ReadHook = Box<dyn Fn(u16) -> Option<u8>>;

/// Write intercept: the returned byte is what gets stored.
pub type WriteHook = Box<dyn Fn(u16, u8) -> u8>;

/// A memory bus with an I/O trapping layer.
///
/// # Examples
///
/// ```
/// use core6502::{FlatMemory, MemoryBus, TrappedMemory};
///
/// let mut mem = TrappedMemory::new(FlatMemory::new(), [0xD010])
///     .with_read_hook(|_addr| Some(0x41))
///     .with_write_hook(|_addr, value| value & 0x7F);
///
/// // Reads of the trapped address come from the hook
/// assert_eq!(mem.read(0xD010), 0x41);
///
/// // Writes are transformed before being stored
/// mem.write(0xD010, 0xFF);
/// assert_eq!(mem.inner().read(0xD010), 0x7F);
///
/// // Everything else passes through
/// mem.write(0x0200, 0xFF);
/// assert_eq!(mem.read(0x0200), 0xFF);
/// ```
pub struct TrappedMemory<M: MemoryBus> {
    inner: M,
    io_addresses: HashSet<u16>,
    read_hook: Option<ReadHook>,
    write_hook: Option<WriteHook>,
}

impl<M: MemoryBus> TrappedMemory<M> {
    /// Wraps `inner`, trapping every address in `io_addresses`.
    pub fn new(inner: M, io_addresses: impl IntoIterator<Item = u16>) -> Self {
        Self {
            inner,
            io_addresses: io_addresses.into_iter().collect(),
            read_hook: None,
            write_hook: None,
        }
    }

    /// Installs the read hook, builder style.
    pub fn with_read_hook(mut self, hook: impl Fn(u16) -> Option<u8> + 'static) -> Self {
        self.read_hook = Some(Box::new(hook));
        self
    }

    /// Installs the write hook, builder style.
    pub fn with_write_hook(mut self, hook: impl Fn(u16, u8) -> u8 + 'static) -> Self {
        self.write_hook = Some(Box::new(hook));
        self
    }

    /// Replaces (or removes, with `None`) the read hook.
    pub fn set_read_hook(&mut self, hook: Option<ReadHook>) {
        self.read_hook = hook;
    }

    /// Replaces (or removes, with `None`) the write hook.
    pub fn set_write_hook(&mut self, hook: Option<WriteHook>) {
        self.write_hook = hook;
    }

    /// Adds `addr` to the trapped set.
    pub fn trap(&mut self, addr: u16) {
        self.io_addresses.insert(addr);
    }

    /// Removes `addr` from the trapped set.
    pub fn untrap(&mut self, addr: u16) {
        self.io_addresses.remove(&addr);
    }

    /// Returns true if `addr` is trapped.
    pub fn is_trapped(&self, addr: u16) -> bool {
        self.io_addresses.contains(&addr)
    }

    /// Returns the wrapped bus, bypassing the hooks.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Returns the wrapped bus mutably, bypassing the hooks.
    pub fn inner_mut(&mut self) -> &mut M {
        &mut self.inner
    }

    /// Unwraps the inner bus.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: MemoryBus> MemoryBus for TrappedMemory<M> {
    fn read(&self, addr: u16) -> u8 {
        if self.is_trapped(addr) {
            if let Some(value) = self.read_hook.as_ref().and_then(|hook| hook(addr)) {
                log::trace!("trapped read ${:04X} -> ${:02X}", addr, value);
                return value;
            }
        }
        self.inner.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        let stored = match &self.write_hook {
            Some(hook) if self.io_addresses.contains(&addr) => {
                let stored = hook(addr, value);
                log::trace!("trapped write ${:04X}: ${:02X} -> ${:02X}", addr, value, stored);
                stored
            }
            _ => value,
        };
        self.inner.write(addr, stored);
    }
}
