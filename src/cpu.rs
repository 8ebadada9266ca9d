//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: A, X, Y and the stack pointer (see [`Registers`])
//! - **Status flags**: N, V, B, D, I, Z, C (see [`Flags`])
//! - **Program counter** (PC): 16-bit address of next instruction byte
//! - **Consumed-cycle counter**: cycles spent in the current `execute` call
//!
//! Memory is not part of the CPU. Every entry point borrows a [`MemoryBus`]
//! for the duration of the call.
//!
//! ## Cycle Accounting
//!
//! Cycles are charged as the instruction runs rather than looked up:
//! one per memory byte touched and one per internal register operation.
//! `execute` never stops mid-instruction, so it may overshoot its budget.

use log::{debug, trace};

use crate::{ExecutionError, Flags, MemoryBus, Registers, OPCODE_TABLE, RESET_VECTOR};

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// 6502 CPU state and execution context.
///
/// # Examples
///
/// ```
/// use emu6502::{FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x0200).unwrap();
/// memory.write_byte(0x0200, 0xA9).unwrap(); // LDA #$42
/// memory.write_byte(0x0201, 0x42).unwrap();
///
/// let mut cpu = CPU::new();
/// cpu.initialize(&memory).unwrap();
///
/// assert_eq!(cpu.execute(2, &mut memory).unwrap(), 2);
/// assert_eq!(cpu.registers.a, 0x42);
/// assert!(!cpu.flags.z);
/// assert!(!cpu.flags.n);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CPU {
    /// Accumulator, index registers and stack pointer
    pub registers: Registers,

    /// Processor status flags
    pub flags: Flags,

    /// Program counter (address of next instruction byte)
    pub pc: u16,

    /// Cycles consumed since the start of the current `execute` call
    consumed_cycles: u32,
}

impl CPU {
    /// Creates a CPU with all registers, flags and PC zeroed.
    ///
    /// Call [`CPU::initialize`] to load PC from the reset vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the CPU to its power-on state and loads PC from the
    /// little-endian word at the reset vector (0xFFFC).
    ///
    /// A, X, Y and SP are zeroed and every flag is cleared (the status byte
    /// reads 0x20).
    pub fn initialize<M: MemoryBus>(&mut self, memory: &M) -> Result<(), ExecutionError> {
        self.registers = Registers::default();
        self.flags = Flags::default();
        self.consumed_cycles = 0;
        self.pc = memory.read_word(RESET_VECTOR)?;

        debug!("CPU initialized, PC loaded from reset vector: {:#06X}", self.pc);

        Ok(())
    }

    /// Runs instructions until at least `cycles` cycles have been consumed.
    ///
    /// Returns the cycles actually spent, which exceeds `cycles` when the
    /// last instruction runs past the budget. A budget of zero executes
    /// nothing.
    ///
    /// # Errors
    ///
    /// - `InvalidOpcode` if a fetched byte has no handler
    /// - `Memory` if an access falls outside the address space
    ///
    /// Either error aborts the call, possibly mid-instruction; re-initialize
    /// before trusting the CPU state again.
    pub fn execute<M: MemoryBus>(
        &mut self,
        cycles: u32,
        memory: &mut M,
    ) -> Result<u32, ExecutionError> {
        self.consumed_cycles = 0;

        while self.consumed_cycles < cycles {
            self.step(memory)?;
        }

        Ok(self.consumed_cycles)
    }

    /// Fetches, decodes and executes exactly one instruction.
    ///
    /// Cycles are added to the running consumed-cycle counter, which only
    /// `execute` and `initialize` reset.
    pub fn step<M: MemoryBus>(&mut self, memory: &mut M) -> Result<(), ExecutionError> {
        let address = self.pc;
        let opcode = self.fetch_byte(memory)?;
        let metadata = &OPCODE_TABLE[opcode as usize];

        let Some(operation) = metadata.operation else {
            debug!(
                "invalid opcode 0x{:02X} fetched at {:#06X}",
                opcode, address
            );
            return Err(ExecutionError::InvalidOpcode {
                opcode,
                pc: self.pc,
            });
        };

        trace!(
            "{:#06X}: {:02X} {} {:?}",
            address,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode
        );

        crate::instructions::execute(self, memory, operation, metadata.addressing_mode)
    }

    /// Returns the cycles consumed since the current `execute` call began.
    pub fn consumed_cycles(&self) -> u32 {
        self.consumed_cycles
    }

    // ========== Bus Access ==========

    pub(crate) fn tick(&mut self, cycles: u32) {
        self.consumed_cycles += cycles;
    }

    /// Reads the byte at PC and advances PC. 1 cycle.
    pub(crate) fn fetch_byte<M: MemoryBus>(&mut self, memory: &M) -> Result<u8, ExecutionError> {
        let value = memory.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        self.tick(1);
        Ok(value)
    }

    /// Reads the word at PC and advances PC by two. 2 cycles.
    pub(crate) fn fetch_word<M: MemoryBus>(&mut self, memory: &M) -> Result<u16, ExecutionError> {
        let value = memory.read_word(self.pc)?;
        self.pc = self.pc.wrapping_add(2);
        self.tick(2);
        Ok(value)
    }

    /// 1 cycle.
    pub(crate) fn read_byte<M: MemoryBus>(
        &mut self,
        memory: &M,
        address: u16,
    ) -> Result<u8, ExecutionError> {
        let value = memory.read_byte(address)?;
        self.tick(1);
        Ok(value)
    }

    /// 1 cycle.
    pub(crate) fn write_byte<M: MemoryBus>(
        &mut self,
        memory: &mut M,
        address: u16,
        value: u8,
    ) -> Result<(), ExecutionError> {
        memory.write_byte(address, value)?;
        self.tick(1);
        Ok(())
    }

    // ========== Stack ==========
    //
    // SP is decremented before a push and incremented after a pop, so it
    // always points at the most recently pushed byte.

    fn stack_address(&self) -> u16 {
        STACK_PAGE | u16::from(self.registers.sp)
    }

    /// 2 cycles.
    pub(crate) fn push_byte<M: MemoryBus>(
        &mut self,
        memory: &mut M,
        value: u8,
    ) -> Result<(), ExecutionError> {
        self.registers.sp = self.registers.sp.wrapping_sub(1);
        memory.write_byte(self.stack_address(), value)?;
        self.tick(2);
        Ok(())
    }

    /// 2 cycles.
    pub(crate) fn pop_byte<M: MemoryBus>(&mut self, memory: &M) -> Result<u8, ExecutionError> {
        let value = memory.read_byte(self.stack_address())?;
        self.registers.sp = self.registers.sp.wrapping_add(1);
        self.tick(2);
        Ok(value)
    }

    /// Pushes high byte then low byte, leaving the word little-endian on
    /// the stack. 3 cycles.
    pub(crate) fn push_word<M: MemoryBus>(
        &mut self,
        memory: &mut M,
        value: u16,
    ) -> Result<(), ExecutionError> {
        let [low, high] = value.to_le_bytes();
        self.registers.sp = self.registers.sp.wrapping_sub(1);
        memory.write_byte(self.stack_address(), high)?;
        self.registers.sp = self.registers.sp.wrapping_sub(1);
        memory.write_byte(self.stack_address(), low)?;
        self.tick(3);
        Ok(())
    }

    /// 3 cycles.
    pub(crate) fn pop_word<M: MemoryBus>(&mut self, memory: &M) -> Result<u16, ExecutionError> {
        let low = memory.read_byte(self.stack_address())?;
        self.registers.sp = self.registers.sp.wrapping_add(1);
        let high = memory.read_byte(self.stack_address())?;
        self.registers.sp = self.registers.sp.wrapping_add(1);
        self.tick(3);
        Ok(u16::from_le_bytes([low, high]))
    }
}
