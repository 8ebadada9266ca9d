//! Tests for PHA, PLA, PHP and PLP.

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create an initialized CPU running `program` at 0x0200
fn setup(program: &[u8]) -> (CPU, FlatMemory) {
    let memory = FlatMemory::from_program(0x0200, program).unwrap();
    let mut cpu = CPU::new();
    cpu.initialize(&memory).unwrap();
    (cpu, memory)
}

#[test]
fn test_pha_pla_round_trip() {
    let program = [
        0xA2, 0xFF, // LDX #$FF
        0x9A, // TXS
        0xA9, 0x42, // LDA #$42
        0x48, // PHA
        0xA9, 0x00, // LDA #$00
        0x68, // PLA
    ];
    let (mut cpu, mut memory) = setup(&program);

    assert_eq!(cpu.execute(6, &mut memory), Ok(6));

    assert_eq!(cpu.execute(3, &mut memory), Ok(3));
    assert_eq!(cpu.registers.sp, 0xFE);
    assert_eq!(memory.read_byte(0x01FE), Ok(0x42));

    cpu.execute(2, &mut memory).unwrap();
    assert!(cpu.flags.z);

    assert_eq!(cpu.execute(4, &mut memory), Ok(4));
    assert_eq!(cpu.registers.a, 0x42);
    assert_eq!(cpu.registers.sp, 0xFF);
    assert!(!cpu.flags.z);
}

#[test]
fn test_pla_sets_flags() {
    let (mut cpu, mut memory) = setup(&[0x68]);
    cpu.registers.sp = 0xFE;
    memory.write_byte(0x01FE, 0x80).unwrap();

    assert_eq!(cpu.execute(4, &mut memory), Ok(4));
    assert_eq!(cpu.registers.a, 0x80);
    assert!(cpu.flags.n);
    assert!(!cpu.flags.z);
}

#[test]
fn test_php_plp_round_trip() {
    let (mut cpu, mut memory) = setup(&[0x08, 0x28]);
    cpu.registers.sp = 0xFF;
    cpu.flags.set_status(0xC3);

    assert_eq!(cpu.execute(3, &mut memory), Ok(3));
    assert_eq!(memory.read_byte(0x01FE), Ok(0xE3));

    cpu.flags.set_status(0x00);

    assert_eq!(cpu.execute(4, &mut memory), Ok(4));
    assert_eq!(cpu.flags.status(), 0xE3);
    assert_eq!(cpu.registers.sp, 0xFF);
}

#[test]
fn test_plp_forces_unused_bit() {
    let (mut cpu, mut memory) = setup(&[0x28]);
    cpu.registers.sp = 0xFE;
    memory.write_byte(0x01FE, 0x00).unwrap();

    cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.flags.status(), 0x20);
}

#[test]
fn test_push_wraps_stack_pointer() {
    let (mut cpu, mut memory) = setup(&[0x48]);
    cpu.registers.a = 0x99;

    cpu.execute(3, &mut memory).unwrap();

    assert_eq!(cpu.registers.sp, 0xFF);
    assert_eq!(memory.read_byte(0x01FF), Ok(0x99));
}
