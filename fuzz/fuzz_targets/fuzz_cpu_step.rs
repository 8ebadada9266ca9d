//! Fuzz target for CPU execution.
//!
//! Builds an arbitrary register file, status byte and memory image, then
//! runs a small cycle budget. Errors are expected (undocumented opcodes);
//! panics and broken invariants are not.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{ExecutionError, FlatMemory, MemoryBus, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Code placed at the reset target
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Data at 0x4000 for absolute and indexed modes
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(mut memory) = FlatMemory::from_program(0x8000, &input.memory.program) else {
        return;
    };
    for (origin, bytes) in [
        (0x0000, &input.memory.zero_page),
        (0x0100, &input.memory.stack_page),
        (0x4000, &input.memory.main_memory),
    ] {
        if memory.load(origin, bytes).is_err() {
            return;
        }
    }

    let mut cpu = CPU::new();
    if cpu.initialize(&memory).is_err() {
        return;
    }

    cpu.registers.a = input.cpu_state.a;
    cpu.registers.x = input.cpu_state.x;
    cpu.registers.y = input.cpu_state.y;
    cpu.registers.sp = input.cpu_state.sp;
    cpu.flags.set_status(input.cpu_state.status);

    let budget = u32::from(input.budget);
    match cpu.execute(budget, &mut memory) {
        Ok(consumed) => {
            assert!(consumed >= budget);
            // No instruction costs more than 7 cycles
            assert!(consumed < budget + 7);
        }
        Err(ExecutionError::InvalidOpcode { opcode, pc }) => {
            assert!(OPCODE_TABLE[opcode as usize].operation.is_none());
            assert_eq!(memory.read_byte(pc.wrapping_sub(1)), Ok(opcode));
        }
        Err(_) => {}
    }

    assert_eq!(cpu.flags.status() & 0x20, 0x20);
});
