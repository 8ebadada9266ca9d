//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC and BVS share one handler, keyed by
//! the flag they test and the value that takes the branch.
//!
//! All branch instructions use relative addressing with a signed 8-bit
//! offset measured from the byte after the instruction. Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::memory::offset_crosses_page_boundary;
use crate::{ExecutionError, Flag, MemoryBus, CPU};

pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    flag: Flag,
    when: bool,
) -> Result<(), ExecutionError> {
    let offset = i16::from(cpu.fetch_byte(memory)? as i8);

    if cpu.flags.get(flag) != when {
        return Ok(());
    }

    let origin = cpu.pc;
    cpu.tick(1);
    if offset_crosses_page_boundary(origin, offset) {
        cpu.tick(1);
    }
    cpu.pc = origin.wrapping_add_signed(offset);

    Ok(())
}
