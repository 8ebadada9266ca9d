//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV.

use crate::{Flag, CPU};

/// Sets or clears a single flag. 2 cycles, no other flags affected.
pub(crate) fn execute_set_flag(cpu: &mut CPU, flag: Flag, value: bool) {
    cpu.flags.set(flag, value);
    cpu.tick(1);
}
