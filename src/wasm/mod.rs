//! WebAssembly bindings for the core6502 engine.
//!
//! This module provides a JavaScript-callable wrapper around the CPU with a
//! character output port and a keyboard input port, enough to run simple
//! interactive programs in a browser.

pub mod api;

pub use api::{Emulator6502, KEYBOARD_PORT, OUTPUT_PORT};
