//! WASM API for the 6502 engine.
//!
//! Provides JavaScript-callable interfaces for loading programs, driving
//! execution and inspecting CPU state.
//!
//! ## I/O map
//!
//! - [`OUTPUT_PORT`]: bytes written here are passed to the JS `on_output`
//!   callback and also stored, so a program reading the port back sees what
//!   it wrote.
//! - [`KEYBOARD_PORT`]: each read pops the next queued key, or returns 0
//!   when the queue is empty.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::{FlatMemory, KeyboardBuffer, MemoryBus, TrappedMemory, CPU, RESET_VECTOR};

/// Address whose writes go to the JS output callback.
pub const OUTPUT_PORT: u16 = 0xF001;

/// Address whose reads pop the keyboard queue.
pub const KEYBOARD_PORT: u16 = 0xF004;

fn trapped_memory(
    memory: FlatMemory,
    keyboard: Rc<RefCell<KeyboardBuffer>>,
    on_output: js_sys::Function,
) -> TrappedMemory<FlatMemory> {
    TrappedMemory::new(memory, [OUTPUT_PORT, KEYBOARD_PORT])
        .with_read_hook(move |addr| match addr {
            KEYBOARD_PORT => Some(keyboard.borrow_mut().pop_front().unwrap_or(0)),
            _ => None,
        })
        .with_write_hook(move |addr, value| {
            if addr == OUTPUT_PORT {
                let _ = on_output.call1(&JsValue::NULL, &JsValue::from(value));
            }
            value
        })
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<TrappedMemory<FlatMemory>>,
    keyboard: Rc<RefCell<KeyboardBuffer>>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with zeroed memory. `on_output` receives each byte
    /// the program writes to the output port.
    #[wasm_bindgen(constructor)]
    pub fn new(on_output: js_sys::Function) -> Self {
        let keyboard = Rc::new(RefCell::new(KeyboardBuffer::new()));
        let memory = trapped_memory(FlatMemory::new(), Rc::clone(&keyboard), on_output);

        Emulator6502 {
            cpu: CPU::new(memory),
            keyboard,
        }
    }

    /// Copy a program into memory at `start_addr` and point the reset
    /// vector at it. Call `reset` afterwards to start from the top.
    pub fn load(&mut self, program: &[u8], start_addr: u16) {
        let memory = self.cpu.memory_mut().inner_mut();
        memory.load(start_addr, program);
        memory.write_word(RESET_VECTOR, start_addr);
    }

    /// Reset the CPU. Memory and the cycle counter are kept; queued keys
    /// are dropped.
    pub fn reset(&mut self) {
        self.keyboard.borrow_mut().clear();
        self.cpu.reset();
    }

    /// Execute a single instruction and return its cycle cost
    pub fn step(&mut self) -> Result<u8, JsError> {
        self.cpu.step().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute whole instructions until at least `ticks` cycles elapsed
    pub fn run_for_ticks(&mut self, ticks: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for_ticks(ticks as u64)
            .map(|c| c as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Queue a key for the program to read from the keyboard port
    pub fn push_key(&mut self, key: u8) {
        self.keyboard.borrow_mut().push_back(key);
    }

    /// Queue every byte of `text`
    pub fn push_keys(&mut self, text: &str) {
        self.keyboard.borrow_mut().extend(text.bytes());
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Memory access methods. These bypass the I/O ports.

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().inner().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().inner_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as usize) << 8;
        self.cpu.memory().inner().as_bytes()[start..start + 256].to_vec()
    }
}
