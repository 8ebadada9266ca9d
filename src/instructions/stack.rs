//! # Stack Instructions
//!
//! PHA and PHP push in 3 cycles; PLA and PLP pull in 4. The status byte is
//! pushed exactly as packed, and pulling it forces bit 5 back to 1.

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
) -> Result<(), ExecutionError> {
    let value = cpu.registers.a;
    cpu.push_byte(memory, value)
}

/// Executes the PHP (Push Processor Status) instruction.
pub(crate) fn execute_php<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
) -> Result<(), ExecutionError> {
    let status = cpu.flags.status();
    cpu.push_byte(memory, status)
}

/// Executes the PLA (Pull Accumulator) instruction. Sets Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU, memory: &M) -> Result<(), ExecutionError> {
    let value = cpu.pop_byte(memory)?;
    cpu.tick(1);
    cpu.registers.a = value;
    cpu.flags.set_zn(value);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU, memory: &M) -> Result<(), ExecutionError> {
    let status = cpu.pop_byte(memory)?;
    cpu.tick(1);
    cpu.flags.set_status(status);
    Ok(())
}
