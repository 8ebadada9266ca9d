//! WebAssembly bindings for the emu6502 core.
//!
//! This module provides JavaScript-callable interfaces to the 6502 CPU
//! emulator, enabling browser-based execution of 6502 machine code.

pub mod api;

pub use api::Emulator6502;
