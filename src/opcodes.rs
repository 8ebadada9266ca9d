//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that maps every opcode byte
//! to its mnemonic, addressing mode, handler tag and documented timing.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. BRK and RTI are
//! listed for reference but carry no handler since interrupts are not
//! emulated. The remaining 105 undocumented opcodes are marked `"???"`.
//! Fetching any opcode without a handler fails with `InvalidOpcode`.

use crate::addressing::AddressingMode;
use crate::flags::Flag;
use crate::registers::Register;

/// Handler tag for an opcode. Dispatch happens on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// LDA, LDX, LDY
    Load(Register),
    /// STA, STX, STY
    Store(Register),
    /// TAX, TAY, TXA, TYA, TSX, TXS
    Transfer { from: Register, to: Register },

    And,
    Ora,
    Eor,
    Bit,

    Asl,
    Lsr,
    Rol,
    Ror,

    /// INC
    IncrementMemory,
    /// DEC
    DecrementMemory,
    /// INX, INY
    IncrementRegister(Register),
    /// DEX, DEY
    DecrementRegister(Register),

    Adc,
    Sbc,
    /// CMP, CPX, CPY
    Compare(Register),

    Jmp,
    Jsr,
    Rts,

    Pha,
    Pla,
    Php,
    Plp,

    /// Branch when `flag` equals `when`.
    Branch { flag: Flag, when: bool },
    /// CLC, SEC, CLI, SEI, CLD, SED, CLV
    SetFlag { flag: Flag, value: bool },

    Nop,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Operation, Register, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.operation, Some(Operation::Load(Register::A)));
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Handler tag, or `None` when the opcode is not executable.
    pub operation: Option<Operation>,

    /// Cycles including the opcode fetch, when no page boundary is crossed
    /// and no branch is taken. 0 for undocumented opcodes.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn new(
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        operation: Option<Operation>,
        base_cycles: u8,
    ) -> Self {
        Self {
            mnemonic,
            addressing_mode,
            operation,
            base_cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        }
    }

    /// Whether the engine can execute this opcode.
    pub const fn is_implemented(&self) -> bool {
        self.operation.is_some()
    }
}

const ILLEGAL: OpcodeMetadata = OpcodeMetadata::new("???", AddressingMode::Implicit, None, 0);

macro_rules! opcode_table {
    ($($opcode:literal => ($mnemonic:literal, $mode:ident, $operation:expr, $cycles:literal),)*) => {{
        let mut table = [ILLEGAL; 256];
        $(
            table[$opcode] =
                OpcodeMetadata::new($mnemonic, AddressingMode::$mode, $operation, $cycles);
        )*
        table
    }};
}

/// Complete 256-entry opcode table indexed by opcode byte value.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use Flag::{Carry, Decimal, InterruptDisable, Negative, Overflow, Zero};
    use Operation::*;
    use Register::{A, SP, X, Y};

    opcode_table! {
        // Load
        0xA9 => ("LDA", Immediate, Some(Load(A)), 2),
        0xA5 => ("LDA", ZeroPage, Some(Load(A)), 3),
        0xB5 => ("LDA", ZeroPageX, Some(Load(A)), 4),
        0xAD => ("LDA", Absolute, Some(Load(A)), 4),
        0xBD => ("LDA", AbsoluteX, Some(Load(A)), 4),
        0xB9 => ("LDA", AbsoluteY, Some(Load(A)), 4),
        0xA1 => ("LDA", IndirectX, Some(Load(A)), 6),
        0xB1 => ("LDA", IndirectY, Some(Load(A)), 5),
        0xA2 => ("LDX", Immediate, Some(Load(X)), 2),
        0xA6 => ("LDX", ZeroPage, Some(Load(X)), 3),
        0xB6 => ("LDX", ZeroPageY, Some(Load(X)), 4),
        0xAE => ("LDX", Absolute, Some(Load(X)), 4),
        0xBE => ("LDX", AbsoluteY, Some(Load(X)), 4),
        0xA0 => ("LDY", Immediate, Some(Load(Y)), 2),
        0xA4 => ("LDY", ZeroPage, Some(Load(Y)), 3),
        0xB4 => ("LDY", ZeroPageX, Some(Load(Y)), 4),
        0xAC => ("LDY", Absolute, Some(Load(Y)), 4),
        0xBC => ("LDY", AbsoluteX, Some(Load(Y)), 4),

        // Store
        0x85 => ("STA", ZeroPage, Some(Store(A)), 3),
        0x95 => ("STA", ZeroPageX, Some(Store(A)), 4),
        0x8D => ("STA", Absolute, Some(Store(A)), 4),
        0x9D => ("STA", AbsoluteX, Some(Store(A)), 5),
        0x99 => ("STA", AbsoluteY, Some(Store(A)), 5),
        0x81 => ("STA", IndirectX, Some(Store(A)), 6),
        0x91 => ("STA", IndirectY, Some(Store(A)), 6),
        0x86 => ("STX", ZeroPage, Some(Store(X)), 3),
        0x96 => ("STX", ZeroPageY, Some(Store(X)), 4),
        0x8E => ("STX", Absolute, Some(Store(X)), 4),
        0x84 => ("STY", ZeroPage, Some(Store(Y)), 3),
        0x94 => ("STY", ZeroPageX, Some(Store(Y)), 4),
        0x8C => ("STY", Absolute, Some(Store(Y)), 4),

        // Transfer
        0xAA => ("TAX", Implicit, Some(Transfer { from: A, to: X }), 2),
        0xA8 => ("TAY", Implicit, Some(Transfer { from: A, to: Y }), 2),
        0x8A => ("TXA", Implicit, Some(Transfer { from: X, to: A }), 2),
        0x98 => ("TYA", Implicit, Some(Transfer { from: Y, to: A }), 2),
        0xBA => ("TSX", Implicit, Some(Transfer { from: SP, to: X }), 2),
        0x9A => ("TXS", Implicit, Some(Transfer { from: X, to: SP }), 2),

        // Logical
        0x29 => ("AND", Immediate, Some(And), 2),
        0x25 => ("AND", ZeroPage, Some(And), 3),
        0x35 => ("AND", ZeroPageX, Some(And), 4),
        0x2D => ("AND", Absolute, Some(And), 4),
        0x3D => ("AND", AbsoluteX, Some(And), 4),
        0x39 => ("AND", AbsoluteY, Some(And), 4),
        0x21 => ("AND", IndirectX, Some(And), 6),
        0x31 => ("AND", IndirectY, Some(And), 5),
        0x09 => ("ORA", Immediate, Some(Ora), 2),
        0x05 => ("ORA", ZeroPage, Some(Ora), 3),
        0x15 => ("ORA", ZeroPageX, Some(Ora), 4),
        0x0D => ("ORA", Absolute, Some(Ora), 4),
        0x1D => ("ORA", AbsoluteX, Some(Ora), 4),
        0x19 => ("ORA", AbsoluteY, Some(Ora), 4),
        0x01 => ("ORA", IndirectX, Some(Ora), 6),
        0x11 => ("ORA", IndirectY, Some(Ora), 5),
        0x49 => ("EOR", Immediate, Some(Eor), 2),
        0x45 => ("EOR", ZeroPage, Some(Eor), 3),
        0x55 => ("EOR", ZeroPageX, Some(Eor), 4),
        0x4D => ("EOR", Absolute, Some(Eor), 4),
        0x5D => ("EOR", AbsoluteX, Some(Eor), 4),
        0x59 => ("EOR", AbsoluteY, Some(Eor), 4),
        0x41 => ("EOR", IndirectX, Some(Eor), 6),
        0x51 => ("EOR", IndirectY, Some(Eor), 5),
        0x24 => ("BIT", ZeroPage, Some(Bit), 3),
        0x2C => ("BIT", Absolute, Some(Bit), 4),

        // Arithmetic
        0x69 => ("ADC", Immediate, Some(Adc), 2),
        0x65 => ("ADC", ZeroPage, Some(Adc), 3),
        0x75 => ("ADC", ZeroPageX, Some(Adc), 4),
        0x6D => ("ADC", Absolute, Some(Adc), 4),
        0x7D => ("ADC", AbsoluteX, Some(Adc), 4),
        0x79 => ("ADC", AbsoluteY, Some(Adc), 4),
        0x61 => ("ADC", IndirectX, Some(Adc), 6),
        0x71 => ("ADC", IndirectY, Some(Adc), 5),
        0xE9 => ("SBC", Immediate, Some(Sbc), 2),
        0xE5 => ("SBC", ZeroPage, Some(Sbc), 3),
        0xF5 => ("SBC", ZeroPageX, Some(Sbc), 4),
        0xED => ("SBC", Absolute, Some(Sbc), 4),
        0xFD => ("SBC", AbsoluteX, Some(Sbc), 4),
        0xF9 => ("SBC", AbsoluteY, Some(Sbc), 4),
        0xE1 => ("SBC", IndirectX, Some(Sbc), 6),
        0xF1 => ("SBC", IndirectY, Some(Sbc), 5),

        // Compare
        0xC9 => ("CMP", Immediate, Some(Compare(A)), 2),
        0xC5 => ("CMP", ZeroPage, Some(Compare(A)), 3),
        0xD5 => ("CMP", ZeroPageX, Some(Compare(A)), 4),
        0xCD => ("CMP", Absolute, Some(Compare(A)), 4),
        0xDD => ("CMP", AbsoluteX, Some(Compare(A)), 4),
        0xD9 => ("CMP", AbsoluteY, Some(Compare(A)), 4),
        0xC1 => ("CMP", IndirectX, Some(Compare(A)), 6),
        0xD1 => ("CMP", IndirectY, Some(Compare(A)), 5),
        0xE0 => ("CPX", Immediate, Some(Compare(X)), 2),
        0xE4 => ("CPX", ZeroPage, Some(Compare(X)), 3),
        0xEC => ("CPX", Absolute, Some(Compare(X)), 4),
        0xC0 => ("CPY", Immediate, Some(Compare(Y)), 2),
        0xC4 => ("CPY", ZeroPage, Some(Compare(Y)), 3),
        0xCC => ("CPY", Absolute, Some(Compare(Y)), 4),

        // Shift and rotate
        0x0A => ("ASL", Accumulator, Some(Asl), 2),
        0x06 => ("ASL", ZeroPage, Some(Asl), 5),
        0x16 => ("ASL", ZeroPageX, Some(Asl), 6),
        0x0E => ("ASL", Absolute, Some(Asl), 6),
        0x1E => ("ASL", AbsoluteX, Some(Asl), 7),
        0x4A => ("LSR", Accumulator, Some(Lsr), 2),
        0x46 => ("LSR", ZeroPage, Some(Lsr), 5),
        0x56 => ("LSR", ZeroPageX, Some(Lsr), 6),
        0x4E => ("LSR", Absolute, Some(Lsr), 6),
        0x5E => ("LSR", AbsoluteX, Some(Lsr), 7),
        0x2A => ("ROL", Accumulator, Some(Rol), 2),
        0x26 => ("ROL", ZeroPage, Some(Rol), 5),
        0x36 => ("ROL", ZeroPageX, Some(Rol), 6),
        0x2E => ("ROL", Absolute, Some(Rol), 6),
        0x3E => ("ROL", AbsoluteX, Some(Rol), 7),
        0x6A => ("ROR", Accumulator, Some(Ror), 2),
        0x66 => ("ROR", ZeroPage, Some(Ror), 5),
        0x76 => ("ROR", ZeroPageX, Some(Ror), 6),
        0x6E => ("ROR", Absolute, Some(Ror), 6),
        0x7E => ("ROR", AbsoluteX, Some(Ror), 7),

        // Increment and decrement
        0xE6 => ("INC", ZeroPage, Some(IncrementMemory), 5),
        0xF6 => ("INC", ZeroPageX, Some(IncrementMemory), 6),
        0xEE => ("INC", Absolute, Some(IncrementMemory), 6),
        0xFE => ("INC", AbsoluteX, Some(IncrementMemory), 7),
        0xC6 => ("DEC", ZeroPage, Some(DecrementMemory), 5),
        0xD6 => ("DEC", ZeroPageX, Some(DecrementMemory), 6),
        0xCE => ("DEC", Absolute, Some(DecrementMemory), 6),
        0xDE => ("DEC", AbsoluteX, Some(DecrementMemory), 7),
        0xE8 => ("INX", Implicit, Some(IncrementRegister(X)), 2),
        0xC8 => ("INY", Implicit, Some(IncrementRegister(Y)), 2),
        0xCA => ("DEX", Implicit, Some(DecrementRegister(X)), 2),
        0x88 => ("DEY", Implicit, Some(DecrementRegister(Y)), 2),

        // Jumps and subroutines. JMP (ind) takes 6 cycles here, one more
        // than the data sheet, because the final PC load is charged.
        0x4C => ("JMP", Absolute, Some(Jmp), 3),
        0x6C => ("JMP", Indirect, Some(Jmp), 6),
        0x20 => ("JSR", Absolute, Some(Jsr), 6),
        0x60 => ("RTS", Implicit, Some(Rts), 6),

        // Stack
        0x48 => ("PHA", Implicit, Some(Pha), 3),
        0x68 => ("PLA", Implicit, Some(Pla), 4),
        0x08 => ("PHP", Implicit, Some(Php), 3),
        0x28 => ("PLP", Implicit, Some(Plp), 4),

        // Branches
        0x10 => ("BPL", Relative, Some(Branch { flag: Negative, when: false }), 2),
        0x30 => ("BMI", Relative, Some(Branch { flag: Negative, when: true }), 2),
        0x50 => ("BVC", Relative, Some(Branch { flag: Overflow, when: false }), 2),
        0x70 => ("BVS", Relative, Some(Branch { flag: Overflow, when: true }), 2),
        0x90 => ("BCC", Relative, Some(Branch { flag: Carry, when: false }), 2),
        0xB0 => ("BCS", Relative, Some(Branch { flag: Carry, when: true }), 2),
        0xD0 => ("BNE", Relative, Some(Branch { flag: Zero, when: false }), 2),
        0xF0 => ("BEQ", Relative, Some(Branch { flag: Zero, when: true }), 2),

        // Flag set/clear
        0x18 => ("CLC", Implicit, Some(SetFlag { flag: Carry, value: false }), 2),
        0x38 => ("SEC", Implicit, Some(SetFlag { flag: Carry, value: true }), 2),
        0x58 => ("CLI", Implicit, Some(SetFlag { flag: InterruptDisable, value: false }), 2),
        0x78 => ("SEI", Implicit, Some(SetFlag { flag: InterruptDisable, value: true }), 2),
        0xD8 => ("CLD", Implicit, Some(SetFlag { flag: Decimal, value: false }), 2),
        0xF8 => ("SED", Implicit, Some(SetFlag { flag: Decimal, value: true }), 2),
        0xB8 => ("CLV", Implicit, Some(SetFlag { flag: Overflow, value: false }), 2),

        // System
        0xEA => ("NOP", Implicit, Some(Nop), 2),
        0x00 => ("BRK", Implicit, None, 7),
        0x40 => ("RTI", Implicit, None, 6),
    }
};
