//! Tests for the MemoryBus seam: the CPU runs against any implementation
//! and propagates its errors.

use emu6502::{ExecutionError, FlatMemory, MemoryBus, MemoryError, CPU};

/// 4KB of RAM mirrored across the whole address space.
struct MirroredRam {
    data: Vec<u8>,
}

impl MirroredRam {
    fn new() -> Self {
        MirroredRam {
            data: vec![0; 0x1000],
        }
    }
}

impl MemoryBus for MirroredRam {
    fn read_byte(&self, address: u16) -> Result<u8, MemoryError> {
        Ok(self.data[usize::from(address & 0x0FFF)])
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), MemoryError> {
        self.data[usize::from(address & 0x0FFF)] = value;
        Ok(())
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }
}

/// Rejects every access at or above `limit`.
struct BoundedRam {
    inner: FlatMemory,
    limit: u16,
}

impl MemoryBus for BoundedRam {
    fn read_byte(&self, address: u16) -> Result<u8, MemoryError> {
        if address >= self.limit {
            return Err(MemoryError::AddressOutOfRange {
                address: u32::from(address),
                max: self.limit - 1,
            });
        }
        self.inner.read_byte(address)
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), MemoryError> {
        if address >= self.limit {
            return Err(MemoryError::AddressOutOfRange {
                address: u32::from(address),
                max: self.limit - 1,
            });
        }
        self.inner.write_byte(address, value)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

#[test]
fn test_cpu_runs_on_custom_bus() {
    let mut memory = MirroredRam::new();
    // Reset vector at 0xFFFC mirrors to 0x0FFC
    memory.write_word(0xFFFC, 0x0200).unwrap();
    // LDA #$42 ; STA $1010 (mirrors to $0010)
    for (offset, byte) in [0xA9, 0x42, 0x8D, 0x10, 0x10].into_iter().enumerate() {
        memory.write_byte(0x0200 + offset as u16, byte).unwrap();
    }

    let mut cpu = CPU::new();
    cpu.initialize(&memory).unwrap();
    assert_eq!(cpu.execute(6, &mut memory), Ok(6));

    assert_eq!(memory.read_byte(0x0010), Ok(0x42));
    assert_eq!(memory.read_byte(0xF010), Ok(0x42));
}

#[test]
fn test_bus_error_propagates_from_execute() {
    let inner = FlatMemory::from_program(0x0200, &[0x8D, 0x00, 0x90]).unwrap();
    let mut cpu = CPU::new();
    cpu.initialize(&inner).unwrap();
    let mut memory = BoundedRam {
        inner,
        limit: 0x8000,
    };

    assert_eq!(
        cpu.execute(4, &mut memory),
        Err(ExecutionError::Memory(MemoryError::AddressOutOfRange {
            address: 0x9000,
            max: 0x7FFF
        }))
    );
}

#[test]
fn test_clear_zeroes_flat_memory() {
    let mut memory = FlatMemory::from_program(0x0200, &[0xEA]).unwrap();

    memory.clear();

    assert_eq!(memory.read_byte(0x0200), Ok(0x00));
    assert_eq!(memory.read_word(0xFFFC), Ok(0x0000));
}

#[test]
fn test_load_out_of_range() {
    let mut memory = FlatMemory::new();

    assert!(memory.load(0xFFF0, &[0; 32]).is_err());
    assert!(memory.load(0xFFF0, &[0; 16]).is_ok());
}
