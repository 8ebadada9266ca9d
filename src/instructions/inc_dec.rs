//! # Increment and Decrement Instructions
//!
//! INC and DEC modify memory (read-modify-write, 5 to 7 cycles). INX, INY,
//! DEX and DEY modify an index register in 2 cycles. All wrap at the 8-bit
//! boundary and set Z and N from the result; carry is never touched.

use super::read_modify_write;
use crate::{AddressingMode, ExecutionError, MemoryBus, Register, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, memory, mode, |cpu, value| {
        let result = value.wrapping_add(1);
        cpu.flags.set_zn(result);
        result
    })
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, memory, mode, |cpu, value| {
        let result = value.wrapping_sub(1);
        cpu.flags.set_zn(result);
        result
    })
}

/// INX and INY.
pub(crate) fn execute_increment_register(cpu: &mut CPU, register: Register) {
    let result = cpu.registers.get(register).wrapping_add(1);
    cpu.registers.set(register, result);
    cpu.flags.set_zn(result);
    cpu.tick(1);
}

/// DEX and DEY.
pub(crate) fn execute_decrement_register(cpu: &mut CPU, register: Register) {
    let result = cpu.registers.get(register).wrapping_sub(1);
    cpu.registers.set(register, result);
    cpu.flags.set_zn(result);
    cpu.tick(1);
}
