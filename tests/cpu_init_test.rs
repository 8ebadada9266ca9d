//! Tests for CPU initialization, the reset vector and error reporting.

use emu6502::{ExecutionError, FlatMemory, MemoryBus, MemoryError, CPU, RESET_VECTOR};

/// Helper function to create an initialized CPU running `program` at 0x0200
fn setup(program: &[u8]) -> (CPU, FlatMemory) {
    let memory = FlatMemory::from_program(0x0200, program).unwrap();
    let mut cpu = CPU::new();
    cpu.initialize(&memory).unwrap();
    (cpu, memory)
}

// ========== Initialization ==========

#[test]
fn test_initialize_loads_pc_from_reset_vector() {
    let mut memory = FlatMemory::new();
    memory.write_byte(0xFFFC, 0x34).unwrap();
    memory.write_byte(0xFFFD, 0x12).unwrap();

    let mut cpu = CPU::new();
    cpu.initialize(&memory).unwrap();

    assert_eq!(cpu.pc, 0x1234);
}

#[test]
fn test_initialize_zeroes_registers_and_flags() {
    let (cpu, _) = setup(&[]);

    assert_eq!(cpu.registers.a, 0);
    assert_eq!(cpu.registers.x, 0);
    assert_eq!(cpu.registers.y, 0);
    assert_eq!(cpu.registers.sp, 0);
    assert_eq!(cpu.flags.status(), 0x20);
    assert!(cpu.flags.unused());
    assert_eq!(cpu.pc, 0x0200);
}

#[test]
fn test_from_program_patches_reset_vector() {
    let memory = FlatMemory::from_program(0xC000, &[0xEA]).unwrap();

    assert_eq!(memory.read_word(RESET_VECTOR), Ok(0xC000));
    assert_eq!(memory.read_byte(0xC000), Ok(0xEA));
}

// ========== Execute Loop Basics ==========

#[test]
fn test_quick_start_program() {
    // LDX #$FF ; TXS ; LDA #$42
    let (mut cpu, mut memory) = setup(&[0xA2, 0xFF, 0x9A, 0xA9, 0x42]);

    assert_eq!(cpu.execute(6, &mut memory), Ok(6));
    assert_eq!(cpu.registers.sp, 0xFF);
    assert_eq!(cpu.registers.a, 0x42);
    assert_eq!(cpu.pc, 0x0205);
}

#[test]
fn test_zero_budget_executes_nothing() {
    let (mut cpu, mut memory) = setup(&[0xA9, 0x42]);

    assert_eq!(cpu.execute(0, &mut memory), Ok(0));
    assert_eq!(cpu.pc, 0x0200);
    assert_eq!(cpu.registers.a, 0);
}

// ========== Errors ==========

#[test]
fn test_invalid_opcode_reports_opcode_and_pc() {
    let (mut cpu, mut memory) = setup(&[0xFF]);

    assert_eq!(
        cpu.execute(1, &mut memory),
        Err(ExecutionError::InvalidOpcode {
            opcode: 0xFF,
            pc: 0x0201
        })
    );
}

#[test]
fn test_brk_and_rti_are_not_executable() {
    for opcode in [0x00, 0x40] {
        let (mut cpu, mut memory) = setup(&[opcode]);

        assert_eq!(
            cpu.execute(7, &mut memory),
            Err(ExecutionError::InvalidOpcode { opcode, pc: 0x0201 })
        );
    }
}

#[test]
fn test_invalid_opcode_after_valid_instructions() {
    // LDA #$01 ; undocumented 0x02
    let (mut cpu, mut memory) = setup(&[0xA9, 0x01, 0x02]);

    let err = cpu.execute(10, &mut memory).unwrap_err();

    assert_eq!(
        err,
        ExecutionError::InvalidOpcode {
            opcode: 0x02,
            pc: 0x0203
        }
    );
    // State up to the failure is kept
    assert_eq!(cpu.registers.a, 0x01);
}

#[test]
fn test_error_display() {
    let err = ExecutionError::InvalidOpcode {
        opcode: 0x02,
        pc: 0x0201,
    };
    assert_eq!(err.to_string(), "invalid opcode 0x02 (PC 0x0201)");

    let err = ExecutionError::from(MemoryError::AddressOutOfRange {
        address: 0x10000,
        max: 0xFFFF,
    });
    assert!(matches!(err, ExecutionError::Memory(_)));
    assert!(std::error::Error::source(&err).is_some());
}
