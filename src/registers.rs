//! # Register File
//!
//! Accumulator, index registers and stack pointer. All are 8-bit and wrap
//! on overflow. The program counter lives on the CPU, not here.

/// Names one of the four 8-bit registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    X,
    Y,
    SP,
}

/// The 6502's 8-bit registers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Stack pointer, an offset into page 0x01
    pub sp: u8,
}

impl Registers {
    pub fn get(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
            Register::SP => self.sp,
        }
    }

    pub fn set(&mut self, register: Register, value: u8) {
        match register {
            Register::A => self.a = value,
            Register::X => self.x = value,
            Register::Y => self.y = value,
            Register::SP => self.sp = value,
        }
    }
}
