//! # Addressing Modes
//!
//! This module defines the 6502 addressing modes and the resolver that turns
//! a mode into an effective operand, advancing the program counter and
//! charging cycles as the hardware does.
//!
//! ## Cycle costs (after the opcode fetch)
//!
//! | Mode            | Cycles                       |
//! |-----------------|------------------------------|
//! | Immediate       | 1                            |
//! | Accumulator     | 0                            |
//! | ZeroPage        | 1                            |
//! | ZeroPageX/Y     | 2                            |
//! | Absolute        | 2                            |
//! | AbsoluteX/Y     | 2 (+1 per page-cross policy) |
//! | IndirectX       | 4                            |
//! | IndirectY       | 3 (+1 per page-cross policy) |

use crate::memory::{offset_crosses_page_boundary, MemoryBus};
use crate::{ExecutionError, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset, used only by branches.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X. May cost a cycle on page crossing.
    AbsoluteX,

    /// 16-bit address indexed by Y. May cost a cycle on page crossing.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP, which
    /// resolves it itself to reproduce the page-wrap bug.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// When an indexed mode (AbsoluteX, AbsoluteY, IndirectY) charges its
/// page-crossing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCrossPenalty {
    /// Never charge.
    Never,
    /// Charge only when indexing moves the address onto another page.
    /// Used by reads.
    IfCrossed,
    /// Always charge, crossing or not. Used by stores and
    /// read-modify-write instructions.
    Always,
}

impl PageCrossPenalty {
    fn cost(self, base: u16, index: u8) -> u32 {
        match self {
            PageCrossPenalty::Never => 0,
            PageCrossPenalty::IfCrossed => {
                u32::from(offset_crosses_page_boundary(base, i16::from(index)))
            }
            PageCrossPenalty::Always => 1,
        }
    }
}

/// What an addressing mode resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Operate on the A register.
    Accumulator,
    /// The operand byte itself.
    Immediate(u8),
    /// An effective address in memory.
    Address(u16),
}

impl CPU {
    /// Resolves `mode` into an operand, consuming operand bytes at PC and
    /// charging cycles.
    ///
    /// Fails with `IllegalAddressingMode` for Implicit, Relative and
    /// Indirect, which have no operand in this sense.
    pub fn resolve_operand<M: MemoryBus>(
        &mut self,
        memory: &M,
        mode: AddressingMode,
        penalty: PageCrossPenalty,
    ) -> Result<Operand, ExecutionError> {
        let operand = match mode {
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte(memory)?),
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::ZeroPage => Operand::Address(u16::from(self.fetch_byte(memory)?)),
            AddressingMode::ZeroPageX => {
                let index = self.registers.x;
                Operand::Address(u16::from(self.zero_page_indexed(memory, index)?))
            }
            AddressingMode::ZeroPageY => {
                let index = self.registers.y;
                Operand::Address(u16::from(self.zero_page_indexed(memory, index)?))
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word(memory)?),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(memory)?;
                let index = self.registers.x;
                Operand::Address(self.index_address(base, index, penalty))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(memory)?;
                let index = self.registers.y;
                Operand::Address(self.index_address(base, index, penalty))
            }
            AddressingMode::IndirectX => {
                let index = self.registers.x;
                let pointer = self.zero_page_indexed(memory, index)?;
                Operand::Address(self.read_zero_page_pointer(memory, pointer)?)
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte(memory)?;
                let base = self.read_zero_page_pointer(memory, pointer)?;
                let index = self.registers.y;
                Operand::Address(self.index_address(base, index, penalty))
            }
            AddressingMode::Implicit | AddressingMode::Relative | AddressingMode::Indirect => {
                return Err(ExecutionError::IllegalAddressingMode(mode));
            }
        };

        Ok(operand)
    }

    /// Resolves `mode` to an effective memory address.
    ///
    /// Fails with `IllegalAddressingMode` when the mode yields no address
    /// (Immediate, Accumulator and the modes `resolve_operand` rejects).
    pub fn resolve_address<M: MemoryBus>(
        &mut self,
        memory: &M,
        mode: AddressingMode,
        penalty: PageCrossPenalty,
    ) -> Result<u16, ExecutionError> {
        match self.resolve_operand(memory, mode, penalty)? {
            Operand::Address(address) => Ok(address),
            Operand::Accumulator | Operand::Immediate(_) => {
                Err(ExecutionError::IllegalAddressingMode(mode))
            }
        }
    }

    /// Reads the operand value for `mode`: the immediate byte, the
    /// accumulator, or the byte at the effective address (1 cycle).
    ///
    /// Indexed reads charge the page-crossing cycle only when a page is
    /// actually crossed.
    pub fn read_operand<M: MemoryBus>(
        &mut self,
        memory: &M,
        mode: AddressingMode,
    ) -> Result<u8, ExecutionError> {
        match self.resolve_operand(memory, mode, PageCrossPenalty::IfCrossed)? {
            Operand::Immediate(value) => Ok(value),
            Operand::Accumulator => Ok(self.registers.a),
            Operand::Address(address) => self.read_byte(memory, address),
        }
    }

    /// Operand byte plus index, wrapped to zero page. 2 cycles.
    fn zero_page_indexed<M: MemoryBus>(
        &mut self,
        memory: &M,
        index: u8,
    ) -> Result<u8, ExecutionError> {
        let base = self.fetch_byte(memory)?;
        self.tick(1);
        Ok(base.wrapping_add(index))
    }

    /// Reads a pointer from zero page. The high byte wraps to 0x00 rather
    /// than leaving zero page. 2 cycles.
    fn read_zero_page_pointer<M: MemoryBus>(
        &mut self,
        memory: &M,
        pointer: u8,
    ) -> Result<u16, ExecutionError> {
        let low = memory.read_byte(u16::from(pointer))?;
        let high = memory.read_byte(u16::from(pointer.wrapping_add(1)))?;
        self.tick(2);
        Ok(u16::from_le_bytes([low, high]))
    }

    fn index_address(&mut self, base: u16, index: u8, penalty: PageCrossPenalty) -> u16 {
        self.tick(penalty.cost(base, index));
        base.wrapping_add(u16::from(index))
    }
}
