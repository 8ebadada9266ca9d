//! # Shift and Rotate Instructions
//!
//! This module implements shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (2 cycles) or on memory as a
//! read-modify-write (5 to 7 cycles). Z and N follow the result; C receives
//! the bit shifted out.

use super::read_modify_write;
use crate::{AddressingMode, ExecutionError, MemoryBus, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to carry and bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, memory, mode, |cpu, value| {
        let result = value << 1;
        cpu.flags.c = (value & 0x80) != 0;
        cpu.flags.set_zn(result);
        result
    })
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry and bit 7 becomes 0, so N always ends up clear.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, memory, mode, |cpu, value| {
        let result = value >> 1;
        cpu.flags.c = (value & 0x01) != 0;
        cpu.flags.set_zn(result);
        result
    })
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0 and bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, memory, mode, |cpu, value| {
        let result = (value << 1) | u8::from(cpu.flags.c);
        cpu.flags.c = (value & 0x80) != 0;
        cpu.flags.set_zn(result);
        result
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7 and bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, memory, mode, |cpu, value| {
        let result = (value >> 1) | (u8::from(cpu.flags.c) << 7);
        cpu.flags.c = (value & 0x01) != 0;
        cpu.flags.set_zn(result);
        result
    })
}
