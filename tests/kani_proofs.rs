//! Kani formal verification proofs for the 6502 emulator.
//!
//! These proofs use bounded model checking to verify invariants of the
//! flag register, the page-crossing rule and the opcode table for ALL
//! possible inputs.
//!
//! To run these proofs, install Kani and run:
//! ```
//! cargo kani --tests
//! ```
//!
//! They are ignored when running regular tests.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use emu6502::memory::offset_crosses_page_boundary;
    use emu6502::{Flag, Flags, OPCODE_TABLE};

    // ========== Status Register Proofs ==========

    /// Proof: status round-trips with bit 5 forced
    #[kani::proof]
    fn proof_status_round_trip() {
        let status: u8 = kani::any();
        let mut flags = Flags::default();

        flags.set_status(status);

        kani::assert(flags.status() == status | 0x20, "status must round-trip");
    }

    /// Proof: each named flag maps to its own status bit
    #[kani::proof]
    fn proof_flag_masks_match_status_bits() {
        let status: u8 = kani::any();
        let mut flags = Flags::default();
        flags.set_status(status);

        for flag in [
            Flag::Carry,
            Flag::Zero,
            Flag::InterruptDisable,
            Flag::Decimal,
            Flag::Break,
            Flag::Overflow,
            Flag::Negative,
        ] {
            kani::assert(
                flags.get(flag) == (status & flag.mask() != 0),
                "flag must mirror its status bit",
            );
        }
    }

    /// Proof: set_zn derives Z and N from the value alone
    #[kani::proof]
    fn proof_set_zn() {
        let value: u8 = kani::any();
        let mut flags = Flags::default();

        flags.set_zn(value);

        kani::assert(flags.z == (value == 0), "Z iff zero");
        kani::assert(flags.n == (value >= 0x80), "N iff bit 7");
    }

    // ========== Page Crossing Proofs ==========

    /// Proof: positive indexing crosses a page iff the low byte overflows
    #[kani::proof]
    fn proof_page_crossing_detection() {
        let base: u16 = kani::any();
        let index: u8 = kani::any();

        let crossed = offset_crosses_page_boundary(base, i16::from(index));
        let low_overflow = u16::from(base as u8) + u16::from(index) > 0xFF;

        kani::assert(crossed == low_overflow, "page crossing must match");
    }

    /// Proof: negative offsets cross iff the low byte underflows
    #[kani::proof]
    fn proof_backward_page_crossing() {
        let base: u16 = kani::any();
        let offset: i8 = kani::any();
        kani::assume(offset < 0);

        let crossed = offset_crosses_page_boundary(base, i16::from(offset));
        let underflow = i16::from(base as u8) + i16::from(offset) < 0;

        kani::assert(crossed == underflow, "backward crossing must match");
    }

    // ========== Opcode Table Proofs ==========

    /// Proof: all opcode sizes are 1-3 bytes
    #[kani::proof]
    fn proof_all_opcode_sizes_valid() {
        let opcode: u8 = kani::any();
        let metadata = &OPCODE_TABLE[opcode as usize];

        kani::assert(
            metadata.size_bytes >= 1 && metadata.size_bytes <= 3,
            "All opcode sizes must be 1-3 bytes",
        );
    }

    /// Proof: executable opcodes take 2-7 cycles
    #[kani::proof]
    fn proof_all_opcode_cycles_reasonable() {
        let opcode: u8 = kani::any();
        let metadata = &OPCODE_TABLE[opcode as usize];

        if metadata.is_implemented() {
            kani::assert(
                metadata.base_cycles >= 2 && metadata.base_cycles <= 7,
                "Implemented opcode cycles must be 2-7",
            );
        }
    }
}

#[cfg(not(kani))]
mod placeholder_tests {
    #[test]
    fn test_kani_proofs_placeholder() {
        // Actual verification happens when running `cargo kani --tests`
    }
}
