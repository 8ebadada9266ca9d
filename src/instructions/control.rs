//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump (absolute and indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - NOP: No Operation
//!
//! None of these affect the status flags.

use crate::{AddressingMode, ExecutionError, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// # Addressing Modes
///
/// - Absolute: PC = operand word. 3 cycles.
/// - Indirect: PC = word stored at the operand address. 6 cycles.
///
/// # Page-wrap bug
///
/// When the indirect pointer sits at the last byte of a page (`$xxFF`), the
/// high byte of the target is fetched from `$xx00` rather than the start of
/// the next page. `JMP ($30FF)` reads its target from `$30FF` and `$3000`.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    match mode {
        AddressingMode::Absolute => {
            cpu.pc = cpu.fetch_word(memory)?;
        }
        AddressingMode::Indirect => {
            let pointer = cpu.fetch_word(memory)?;
            let low = cpu.read_byte(memory, pointer)?;

            let high_address = if pointer & 0x00FF == 0x00FF {
                pointer & 0xFF00
            } else {
                pointer.wrapping_add(1)
            };
            let high = cpu.read_byte(memory, high_address)?;

            cpu.pc = u16::from_le_bytes([low, high]);
            cpu.tick(1);
        }
        _ => return Err(ExecutionError::IllegalAddressingMode(mode)),
    }

    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return
/// address minus one) and jumps to the operand. 6 cycles.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
) -> Result<(), ExecutionError> {
    let target = cpu.fetch_word(memory)?;
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(memory, return_address)?;
    cpu.pc = target;
    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the word JSR pushed and resumes one byte past it. 6 cycles: three
/// for the pop, one to increment the address and one to load PC.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU, memory: &M) -> Result<(), ExecutionError> {
    let return_address = cpu.pop_word(memory)?;
    cpu.tick(1);
    cpu.pc = return_address.wrapping_add(1);
    cpu.tick(1);
    Ok(())
}

pub(crate) fn execute_nop(cpu: &mut CPU) {
    cpu.tick(1);
}
