//! # Arithmetic and Logic Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise operations on the accumulator
//! - CMP, CPX, CPY: Compare a register with memory
//! - BIT: Bit Test
//!
//! All of them read their operand like a load does, so indexed modes cost
//! an extra cycle only on a page crossing.
//!
//! Arithmetic is binary only. The decimal flag can be set and cleared but
//! does not change ADC or SBC results.

use crate::{AddressingMode, ExecutionError, MemoryBus, Register, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand and the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Zero (Z): Set if result = 0
/// - Overflow (V): Set if the signed result is out of range
/// - Negative (N): Set if bit 7 of the result is set
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, mode)?;
    add_with_carry(cpu, value);
    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`, which is ADC of the operand's complement.
/// Carry ends up set when no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, mode)?;
    add_with_carry(cpu, !value);
    Ok(())
}

fn add_with_carry(cpu: &mut CPU, value: u8) {
    let a = cpu.registers.a;
    let sum = u16::from(a) + u16::from(value) + u16::from(cpu.flags.c);
    let result = sum as u8;

    cpu.flags.c = sum > 0xFF;
    // Overflow when both inputs share a sign the result does not
    cpu.flags.v = ((a ^ result) & (value ^ result) & 0x80) != 0;
    cpu.registers.a = result;
    cpu.flags.set_zn(result);
}

/// Executes the AND (Logical AND) instruction. Sets Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, mode)?;
    cpu.registers.a &= value;
    cpu.flags.set_zn(cpu.registers.a);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction. Sets Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, mode)?;
    cpu.registers.a |= value;
    cpu.flags.set_zn(cpu.registers.a);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction. Sets Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, mode)?;
    cpu.registers.a ^= value;
    cpu.flags.set_zn(cpu.registers.a);
    Ok(())
}

/// Executes CMP, CPX or CPY.
///
/// Subtracts the operand from `register` without storing the result.
///
/// # Flag Behavior
///
/// - Carry (C): Set if register >= operand
/// - Zero (Z): Set if register = operand
/// - Negative (N): Bit 7 of `register - operand`
pub(crate) fn execute_compare<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    mode: AddressingMode,
    register: Register,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, mode)?;
    let lhs = cpu.registers.get(register);

    cpu.flags.c = lhs >= value;
    cpu.flags.set_zn(lhs.wrapping_sub(value));
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects `A & M`; N and V are copied from bits 7 and 6 of the operand.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, mode)?;

    cpu.flags.z = (cpu.registers.a & value) == 0;
    cpu.flags.v = (value & 0x40) != 0;
    cpu.flags.n = (value & 0x80) != 0;
    Ok(())
}
