//! # 6502 CPU Emulator Core
//!
//! An instruction-level NMOS 6502 emulator: registers, status flags,
//! addressing modes and a flat 64KB memory, executing machine code with
//! per-instruction cycle counts that match the hardware.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{FlatMemory, MemoryBus, CPU};
//!
//! // LDX #$FF ; TXS ; LDA #$42 at the fixture origin 0x0200
//! let program = [0xA2, 0xFF, 0x9A, 0xA9, 0x42];
//! let mut memory = FlatMemory::from_program(0x0200, &program).unwrap();
//!
//! let mut cpu = CPU::new();
//! cpu.initialize(&memory).unwrap();
//!
//! assert_eq!(cpu.execute(6, &mut memory).unwrap(), 6);
//! assert_eq!(cpu.registers.sp, 0xFF);
//! assert_eq!(cpu.registers.a, 0x42);
//! ```
//!
//! ## Architecture
//!
//! - The CPU never owns memory; `initialize` and `execute` borrow a
//!   [`MemoryBus`] explicitly
//! - A `const` 256-entry [`OPCODE_TABLE`] maps opcode bytes to a handler tag
//! - Cycles are charged per memory access and internal operation as each
//!   instruction runs
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `addressing` - Addressing modes and the operand resolver
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode metadata and dispatch table
//! - `flags` / `registers` - Status flags and the register file

pub mod addressing;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand, PageCrossPenalty};
pub use cpu::CPU;
pub use flags::{Flag, Flags};
pub use memory::{FlatMemory, MemoryBus, MemoryError};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use registers::{Register, Registers};

/// Address of the little-endian word PC is loaded from on initialization.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Errors that can occur during CPU execution.
///
/// All are fatal to the current `execute` call. Register and memory state
/// may be partially updated when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte has no registered handler.
    ///
    /// `pc` is the program counter after the opcode fetch, i.e. the address
    /// of the byte following the opcode.
    InvalidOpcode { opcode: u8, pc: u16 },

    /// A memory access was out of range.
    Memory(MemoryError),

    /// The resolver was asked for an operand the addressing mode cannot
    /// produce, e.g. an address from `Immediate`.
    IllegalAddressingMode(AddressingMode),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::InvalidOpcode { opcode, pc } => {
                write!(f, "invalid opcode 0x{:02X} (PC 0x{:04X})", opcode, pc)
            }
            ExecutionError::Memory(err) => write!(f, "memory access failed: {}", err),
            ExecutionError::IllegalAddressingMode(mode) => {
                write!(f, "addressing mode {:?} cannot supply this operand", mode)
            }
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecutionError::Memory(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MemoryError> for ExecutionError {
    fn from(err: MemoryError) -> Self {
        ExecutionError::Memory(err)
    }
}
