//! # Keyboard Buffer
//!
//! A FIFO of key bytes for hosts that model a keyboard peripheral. The CPU
//! never reads it; a host typically drains it from a trapped read hook.

use std::collections::VecDeque;

/// FIFO of pending key codes.
///
/// # Examples
///
/// ```
/// use core6502::KeyboardBuffer;
///
/// let mut keys = KeyboardBuffer::new();
/// keys.extend(b"HI".iter().copied());
///
/// assert_eq!(keys.pop_front(), Some(b'H'));
/// assert_eq!(keys.pop_front(), Some(b'I'));
/// assert!(keys.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyboardBuffer {
    keys: VecDeque<u8>,
}

impl KeyboardBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one key.
    pub fn push_back(&mut self, key: u8) {
        self.keys.push_back(key);
    }

    /// Removes and returns the oldest key.
    pub fn pop_front(&mut self) -> Option<u8> {
        self.keys.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

impl Extend<u8> for KeyboardBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}
