//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX and TXS. All take 2 cycles.

use crate::{Register, CPU};

/// Copies `from` into `to`.
///
/// Sets Z and N from the copied value, except for TXS which leaves the
/// flags untouched.
pub(crate) fn execute_transfer(cpu: &mut CPU, from: Register, to: Register) {
    let value = cpu.registers.get(from);
    cpu.registers.set(to, value);

    if to != Register::SP {
        cpu.flags.set_zn(value);
    }

    cpu.tick(1);
}
