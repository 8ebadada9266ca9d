//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA, LDX, LDY: Load a register from memory
//! - STA, STX, STY: Store a register to memory

use crate::{AddressingMode, ExecutionError, MemoryBus, PageCrossPenalty, Register, CPU};

/// Executes LDA, LDX or LDY.
///
/// Loads a byte of memory into `register`, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the loaded value is 0
/// - Negative (N): Set if bit 7 of the loaded value is set
/// - Other flags: Not affected
///
/// Indexed modes cost one extra cycle only when a page boundary is crossed.
pub(crate) fn execute_load<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    mode: AddressingMode,
    register: Register,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, mode)?;
    cpu.registers.set(register, value);
    cpu.flags.set_zn(value);
    Ok(())
}

/// Executes STA, STX or STY.
///
/// Writes `register` to the effective address. No flags are affected.
///
/// Indexed stores always pay the page-crossing cycle, so `STA abs,X` is
/// 5 cycles whether or not the page changes.
pub(crate) fn execute_store<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    register: Register,
) -> Result<(), ExecutionError> {
    let address = cpu.resolve_address(memory, mode, PageCrossPenalty::Always)?;
    let value = cpu.registers.get(register);
    cpu.write_byte(memory, address, value)
}
