//! # Status Flags
//!
//! The 6502 status register viewed two ways: seven named booleans for the
//! instruction handlers, and a packed byte (`NV-BDIZC`) for the stack and
//! for callers. Bit 5 is not stored; it reads as 1 in every packed value.

/// Bit masks for the packed status byte.
pub mod mask {
    pub const CARRY: u8 = 0b0000_0001;
    pub const ZERO: u8 = 0b0000_0010;
    pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
    pub const DECIMAL: u8 = 0b0000_1000;
    pub const BREAK: u8 = 0b0001_0000;
    pub const UNUSED: u8 = 0b0010_0000;
    pub const OVERFLOW: u8 = 0b0100_0000;
    pub const NEGATIVE: u8 = 0b1000_0000;
}

/// Names a single writable status flag.
///
/// Used by the opcode table to describe which flag a branch tests or a
/// set/clear instruction changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Carry,
    Zero,
    InterruptDisable,
    Decimal,
    Break,
    Overflow,
    Negative,
}

impl Flag {
    /// The flag's bit in the packed status byte.
    pub const fn mask(self) -> u8 {
        match self {
            Flag::Carry => mask::CARRY,
            Flag::Zero => mask::ZERO,
            Flag::InterruptDisable => mask::INTERRUPT_DISABLE,
            Flag::Decimal => mask::DECIMAL,
            Flag::Break => mask::BREAK,
            Flag::Overflow => mask::OVERFLOW,
            Flag::Negative => mask::NEGATIVE,
        }
    }
}

/// Processor status flags.
///
/// # Examples
///
/// ```
/// use emu6502::Flags;
///
/// let mut flags = Flags::default();
/// assert_eq!(flags.status(), 0b0010_0000);
///
/// flags.set_status(0x00);
/// assert_eq!(flags.status(), 0x20); // Unused bit forced
///
/// flags.set_status(0xFF);
/// assert!(flags.n && flags.v && flags.b && flags.d && flags.i && flags.z && flags.c);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Carry
    pub c: bool,
    /// Zero
    pub z: bool,
    /// Interrupt disable
    pub i: bool,
    /// Decimal mode
    pub d: bool,
    /// Break
    pub b: bool,
    /// Overflow
    pub v: bool,
    /// Negative
    pub n: bool,
}

impl Flags {
    /// Bit 5 of the status byte. Always set on the NMOS 6502.
    pub const fn unused(&self) -> bool {
        true
    }

    /// Returns the flags packed into a status byte, bit 5 always 1.
    pub fn status(&self) -> u8 {
        let mut status = mask::UNUSED;

        if self.n {
            status |= mask::NEGATIVE;
        }
        if self.v {
            status |= mask::OVERFLOW;
        }
        if self.b {
            status |= mask::BREAK;
        }
        if self.d {
            status |= mask::DECIMAL;
        }
        if self.i {
            status |= mask::INTERRUPT_DISABLE;
        }
        if self.z {
            status |= mask::ZERO;
        }
        if self.c {
            status |= mask::CARRY;
        }

        status
    }

    /// Unpacks a status byte into the individual flags.
    ///
    /// Bit 5 of `status` is ignored; it always reads back as 1.
    pub fn set_status(&mut self, status: u8) {
        self.n = status & mask::NEGATIVE != 0;
        self.v = status & mask::OVERFLOW != 0;
        self.b = status & mask::BREAK != 0;
        self.d = status & mask::DECIMAL != 0;
        self.i = status & mask::INTERRUPT_DISABLE != 0;
        self.z = status & mask::ZERO != 0;
        self.c = status & mask::CARRY != 0;
    }

    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Carry => self.c,
            Flag::Zero => self.z,
            Flag::InterruptDisable => self.i,
            Flag::Decimal => self.d,
            Flag::Break => self.b,
            Flag::Overflow => self.v,
            Flag::Negative => self.n,
        }
    }

    pub fn set(&mut self, flag: Flag, value: bool) {
        let slot = match flag {
            Flag::Carry => &mut self.c,
            Flag::Zero => &mut self.z,
            Flag::InterruptDisable => &mut self.i,
            Flag::Decimal => &mut self.d,
            Flag::Break => &mut self.b,
            Flag::Overflow => &mut self.v,
            Flag::Negative => &mut self.n,
        };
        *slot = value;
    }

    /// Sets Z and N from a result byte.
    pub fn set_zn(&mut self, value: u8) {
        self.z = value == 0;
        self.n = value & mask::NEGATIVE != 0;
    }
}
