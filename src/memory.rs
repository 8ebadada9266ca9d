//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from its
//! memory collaborator, plus `FlatMemory`, a plain 64KB RAM implementation.
//!
//! ## Design Principles
//!
//! - Every access is range-checked and reports `MemoryError::AddressOutOfRange`
//! - Words are little-endian (low byte at the lower address)
//! - The CPU borrows memory per call; it never owns or copies it

use std::fmt;

/// Highest valid address in the 16-bit address space.
pub const MAX_ADDRESS: u16 = 0xFFFF;

/// Total number of addressable cells.
pub const MEMORY_SIZE: usize = MAX_ADDRESS as usize + 1;

/// Errors raised by memory accesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// The access touched an address outside `0x0000..=max`.
    ///
    /// `address` is wider than 16 bits so that the second byte of a word
    /// access at `0xFFFF` (i.e. `0x10000`) can be reported faithfully.
    AddressOutOfRange { address: u32, max: u16 },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryError::AddressOutOfRange { address, max } => write!(
                f,
                "address 0x{:04X} is outside the valid range 0x0000-0x{:04X}",
                address, max
            ),
        }
    }
}

impl std::error::Error for MemoryError {}

/// Returns true if adding `offset` to `base` lands on a different page.
///
/// A page is 256 bytes; crossing one changes the high byte of the address.
/// The offset is signed so that backwards branches use the same rule.
///
/// # Examples
///
/// ```
/// use emu6502::memory::offset_crosses_page_boundary;
///
/// assert!(offset_crosses_page_boundary(0x30FF, 1));
/// assert!(!offset_crosses_page_boundary(0x3000, 1));
/// assert!(offset_crosses_page_boundary(0x3000, -1));
/// ```
pub fn offset_crosses_page_boundary(base: u16, offset: i16) -> bool {
    (base & 0xFF00) != (base.wrapping_add_signed(offset) & 0xFF00)
}

/// Memory bus trait for the CPU to read and write bytes and words.
///
/// Implementors provide the byte accessors and `clear`; the word accessors
/// are derived from them and additionally validate `address + 1`.
///
/// # Examples
///
/// ```
/// use emu6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write_word(0x1234, 0xBEEF).unwrap();
///
/// assert_eq!(mem.read_byte(0x1234).unwrap(), 0xEF);
/// assert_eq!(mem.read_byte(0x1235).unwrap(), 0xBE);
/// assert!(mem.read_word(0xFFFF).is_err());
/// ```
pub trait MemoryBus {
    /// Reads a byte from `address`.
    fn read_byte(&self, address: u16) -> Result<u8, MemoryError>;

    /// Writes `value` to `address`.
    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), MemoryError>;

    /// Resets every cell to zero.
    fn clear(&mut self);

    /// Reads a little-endian word starting at `address`.
    fn read_word(&self, address: u16) -> Result<u16, MemoryError> {
        let high_address = next_address(address)?;
        let low = self.read_byte(address)?;
        let high = self.read_byte(high_address)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Writes `value` as a little-endian word starting at `address`.
    fn write_word(&mut self, address: u16, value: u16) -> Result<(), MemoryError> {
        let high_address = next_address(address)?;
        let [low, high] = value.to_le_bytes();
        self.write_byte(address, low)?;
        self.write_byte(high_address, high)
    }
}

fn next_address(address: u16) -> Result<u16, MemoryError> {
    address
        .checked_add(1)
        .ok_or(MemoryError::AddressOutOfRange {
            address: u32::from(address) + 1,
            max: MAX_ADDRESS,
        })
}

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) map to a single contiguous RAM array
/// initialized to 0x00.
///
/// # Examples
///
/// ```
/// use emu6502::{FlatMemory, MemoryBus, CPU};
///
/// // LDA #$42 at 0x0200, reset vector pointing at it
/// let mut memory = FlatMemory::from_program(0x0200, &[0xA9, 0x42]).unwrap();
///
/// let mut cpu = CPU::new();
/// cpu.initialize(&memory).unwrap();
/// assert_eq!(cpu.pc, 0x0200);
///
/// assert_eq!(cpu.execute(2, &mut memory).unwrap(), 2);
/// assert_eq!(cpu.registers.a, 0x42);
/// ```
pub struct FlatMemory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Creates memory holding `program` at `origin`, with the reset vector
    /// pointing at `origin`.
    ///
    /// This is the layout the test fixtures use: raw machine code plus a
    /// patched reset vector.
    pub fn from_program(origin: u16, program: &[u8]) -> Result<Self, MemoryError> {
        let mut memory = Self::new();
        memory.load(origin, program)?;
        memory.write_word(crate::RESET_VECTOR, origin)?;
        Ok(memory)
    }

    /// Copies `bytes` into memory starting at `origin`.
    ///
    /// Fails without writing anything if the image would run past 0xFFFF.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) -> Result<(), MemoryError> {
        let start = usize::from(origin);
        let end = start + bytes.len();
        if end > MEMORY_SIZE {
            return Err(MemoryError::AddressOutOfRange {
                address: end as u32 - 1,
                max: MAX_ADDRESS,
            });
        }
        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Returns a view of the whole address space.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    fn out_of_range(address: u16) -> MemoryError {
        MemoryError::AddressOutOfRange {
            address: u32::from(address),
            max: MAX_ADDRESS,
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read_byte(&self, address: u16) -> Result<u8, MemoryError> {
        self.data
            .get(usize::from(address))
            .copied()
            .ok_or_else(|| Self::out_of_range(address))
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), MemoryError> {
        let cell = self
            .data
            .get_mut(usize::from(address))
            .ok_or_else(|| Self::out_of_range(address))?;
        *cell = value;
        Ok(())
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read_byte(0x0000), Ok(0x00));
        assert_eq!(mem.read_byte(0xFFFF), Ok(0x00));

        mem.write_byte(0x1234, 0x42).unwrap();
        assert_eq!(mem.read_byte(0x1234), Ok(0x42));

        // Neighbours untouched
        assert_eq!(mem.read_byte(0x1233), Ok(0x00));
        assert_eq!(mem.read_byte(0x1235), Ok(0x00));
    }

    #[test]
    fn test_word_is_little_endian() {
        let mut mem = FlatMemory::new();
        mem.write_word(0x2000, 0x1234).unwrap();

        assert_eq!(mem.read_byte(0x2000), Ok(0x34));
        assert_eq!(mem.read_byte(0x2001), Ok(0x12));
        assert_eq!(mem.read_word(0x2000), Ok(0x1234));
    }

    #[test]
    fn test_word_access_at_top_of_memory_fails() {
        let mut mem = FlatMemory::new();
        let expected = MemoryError::AddressOutOfRange {
            address: 0x10000,
            max: 0xFFFF,
        };

        assert_eq!(mem.read_word(0xFFFF), Err(expected));
        assert_eq!(mem.write_word(0xFFFF, 0xABCD), Err(expected));
        // Nothing was written by the failed word store
        assert_eq!(mem.read_byte(0xFFFF), Ok(0x00));
    }

    #[test]
    fn test_load_rejects_image_past_end() {
        let mut mem = FlatMemory::new();

        let result = mem.load(0xFFFE, &[1, 2, 3]);
        assert_eq!(
            result,
            Err(MemoryError::AddressOutOfRange {
                address: 0x10000,
                max: 0xFFFF
            })
        );
        assert_eq!(mem.read_byte(0xFFFE), Ok(0x00));

        mem.load(0xFFFE, &[1, 2]).unwrap();
        assert_eq!(mem.read_word(0xFFFE), Ok(0x0201));
    }

    #[test]
    fn test_clear() {
        let mut mem = FlatMemory::new();
        mem.write_byte(0x0000, 0x01).unwrap();
        mem.write_byte(0xFFFF, 0xFF).unwrap();

        mem.clear();

        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_page_boundary() {
        assert!(offset_crosses_page_boundary(0x30FF, 0x01));
        assert!(!offset_crosses_page_boundary(0x3000, 0x01));
        assert!(!offset_crosses_page_boundary(0x30FE, 0x01));
        assert!(offset_crosses_page_boundary(0x3000, -1));
        assert!(!offset_crosses_page_boundary(0x3080, -0x80));
        // Wrapping off the top of memory lands on page 0x00
        assert!(offset_crosses_page_boundary(0xFFFF, 1));
    }
}
