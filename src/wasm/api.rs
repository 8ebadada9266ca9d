//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for loading programs, running the
//! CPU for a cycle budget and inspecting registers, flags and memory.

use wasm_bindgen::prelude::*;

use crate::{FlatMemory, MemoryBus, CPU};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

fn js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU,
    memory: FlatMemory,
    program_start: u16,
    program_end: u16,
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with zeroed memory and an uninitialized CPU
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(),
            memory: FlatMemory::new(),
            program_start: 0,
            program_end: 0,
        }
    }

    /// Clear memory, copy `program` to `origin` and point the reset vector
    /// at it. Call `initialize` afterwards to load PC.
    pub fn load_program(&mut self, origin: u16, program: &[u8]) -> Result<(), JsError> {
        self.memory = FlatMemory::from_program(origin, program).map_err(js_error)?;
        self.program_start = origin;
        self.program_end = origin.wrapping_add(program.len() as u16);
        Ok(())
    }

    /// Reset registers and flags and load PC from the reset vector
    pub fn initialize(&mut self) -> Result<(), JsError> {
        self.cpu.initialize(&self.memory).map_err(js_error)
    }

    /// Run for at least `cycles` cycles and return the cycles consumed
    pub fn execute(&mut self, cycles: u32) -> Result<u32, JsError> {
        self.cpu
            .execute(cycles, &mut self.memory)
            .map_err(js_error)
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step(&mut self.memory).map_err(js_error)
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.registers.a
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.registers.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.registers.y
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.registers.sp
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.flags.status()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flags.n
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flags.v
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flags.d
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flags.i
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flags.z
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flags.c
    }

    // Memory access methods

    /// Copy `length` bytes starting at `start`, truncated at 0xFFFF
    pub fn read_memory(&self, start: u16, length: u32) -> js_sys::Uint8Array {
        let bytes = self.memory.as_slice();
        let start = usize::from(start);
        let end = start.saturating_add(length as usize).min(bytes.len());
        js_sys::Uint8Array::from(&bytes[start..end])
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, address: u16, value: u8) -> Result<(), JsError> {
        self.memory.write_byte(address, value).map_err(js_error)
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}
