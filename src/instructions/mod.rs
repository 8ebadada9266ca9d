//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all supported 6502 instructions,
//! organized by category. Each handler receives the CPU, the memory bus and
//! the addressing mode from the opcode table. PC already points past the
//! opcode byte; handlers consume their own operand bytes and charge their own
//! cycles through the CPU's bus helpers.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::{
    AddressingMode, ExecutionError, MemoryBus, Operand, Operation, PageCrossPenalty, CPU,
};

/// Runs the handler for `operation` with the opcode's addressing mode.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    operation: Operation,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    match operation {
        Operation::Load(register) => load_store::execute_load(cpu, memory, mode, register),
        Operation::Store(register) => load_store::execute_store(cpu, memory, mode, register),
        Operation::Transfer { from, to } => {
            transfer::execute_transfer(cpu, from, to);
            Ok(())
        }

        Operation::And => alu::execute_and(cpu, memory, mode),
        Operation::Ora => alu::execute_ora(cpu, memory, mode),
        Operation::Eor => alu::execute_eor(cpu, memory, mode),
        Operation::Bit => alu::execute_bit(cpu, memory, mode),
        Operation::Adc => alu::execute_adc(cpu, memory, mode),
        Operation::Sbc => alu::execute_sbc(cpu, memory, mode),
        Operation::Compare(register) => alu::execute_compare(cpu, memory, mode, register),

        Operation::Asl => shifts::execute_asl(cpu, memory, mode),
        Operation::Lsr => shifts::execute_lsr(cpu, memory, mode),
        Operation::Rol => shifts::execute_rol(cpu, memory, mode),
        Operation::Ror => shifts::execute_ror(cpu, memory, mode),

        Operation::IncrementMemory => inc_dec::execute_inc(cpu, memory, mode),
        Operation::DecrementMemory => inc_dec::execute_dec(cpu, memory, mode),
        Operation::IncrementRegister(register) => {
            inc_dec::execute_increment_register(cpu, register);
            Ok(())
        }
        Operation::DecrementRegister(register) => {
            inc_dec::execute_decrement_register(cpu, register);
            Ok(())
        }

        Operation::Jmp => control::execute_jmp(cpu, memory, mode),
        Operation::Jsr => control::execute_jsr(cpu, memory),
        Operation::Rts => control::execute_rts(cpu, memory),
        Operation::Nop => {
            control::execute_nop(cpu);
            Ok(())
        }

        Operation::Pha => stack::execute_pha(cpu, memory),
        Operation::Php => stack::execute_php(cpu, memory),
        Operation::Pla => stack::execute_pla(cpu, memory),
        Operation::Plp => stack::execute_plp(cpu, memory),

        Operation::Branch { flag, when } => branches::execute_branch(cpu, memory, flag, when),
        Operation::SetFlag { flag, value } => {
            flags::execute_set_flag(cpu, flag, value);
            Ok(())
        }
    }
}

/// Shared read-modify-write sequence for shifts, rotates, INC and DEC.
///
/// In accumulator mode `modify` runs on A for one internal cycle. Otherwise
/// the byte at the effective address is read (1), modified (1) and written
/// back (1), with indexed modes always paying the page-crossing cycle.
/// `modify` owns the flag updates.
fn read_modify_write<M, F>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    modify: F,
) -> Result<(), ExecutionError>
where
    M: MemoryBus,
    F: FnOnce(&mut CPU, u8) -> u8,
{
    match cpu.resolve_operand(memory, mode, PageCrossPenalty::Always)? {
        Operand::Accumulator => {
            let value = cpu.registers.a;
            let result = modify(cpu, value);
            cpu.registers.a = result;
            cpu.tick(1);
            Ok(())
        }
        Operand::Address(address) => {
            let value = cpu.read_byte(memory, address)?;
            let result = modify(cpu, value);
            cpu.tick(1);
            cpu.write_byte(memory, address, result)
        }
        Operand::Immediate(_) => Err(ExecutionError::IllegalAddressingMode(mode)),
    }
}
