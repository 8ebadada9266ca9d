//! Tests for the register transfer instructions: TAX, TAY, TXA, TYA, TSX, TXS.

use emu6502::{FlatMemory, CPU};

/// Helper function to create an initialized CPU running `program` at 0x0200
fn setup(program: &[u8]) -> (CPU, FlatMemory) {
    let memory = FlatMemory::from_program(0x0200, program).unwrap();
    let mut cpu = CPU::new();
    cpu.initialize(&memory).unwrap();
    (cpu, memory)
}

#[test]
fn test_tax() {
    let (mut cpu, mut memory) = setup(&[0xAA]);
    cpu.registers.a = 0x42;

    assert_eq!(cpu.execute(2, &mut memory), Ok(2));
    assert_eq!(cpu.registers.x, 0x42);
    assert!(!cpu.flags.z);
    assert!(!cpu.flags.n);
}

#[test]
fn test_tay_zero_flag() {
    let (mut cpu, mut memory) = setup(&[0xA8]);
    cpu.registers.y = 0x42;

    assert_eq!(cpu.execute(2, &mut memory), Ok(2));
    assert_eq!(cpu.registers.y, 0x00);
    assert!(cpu.flags.z);
}

#[test]
fn test_txa_negative_flag() {
    let (mut cpu, mut memory) = setup(&[0x8A]);
    cpu.registers.x = 0xF0;

    assert_eq!(cpu.execute(2, &mut memory), Ok(2));
    assert_eq!(cpu.registers.a, 0xF0);
    assert!(cpu.flags.n);
}

#[test]
fn test_tya() {
    let (mut cpu, mut memory) = setup(&[0x98]);
    cpu.registers.y = 0x17;

    assert_eq!(cpu.execute(2, &mut memory), Ok(2));
    assert_eq!(cpu.registers.a, 0x17);
}

#[test]
fn test_tsx_sets_flags() {
    let (mut cpu, mut memory) = setup(&[0xBA]);
    cpu.registers.sp = 0x80;

    assert_eq!(cpu.execute(2, &mut memory), Ok(2));
    assert_eq!(cpu.registers.x, 0x80);
    assert!(cpu.flags.n);
}

#[test]
fn test_txs_does_not_affect_flags() {
    let (mut cpu, mut memory) = setup(&[0x9A]);
    cpu.registers.x = 0x00;
    cpu.registers.sp = 0xFF;

    assert_eq!(cpu.execute(2, &mut memory), Ok(2));
    assert_eq!(cpu.registers.sp, 0x00);
    assert!(!cpu.flags.z);
    assert_eq!(cpu.flags.status(), 0x20);
}
