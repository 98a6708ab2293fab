//! Kani formal verification proofs for the 6502 core.
//!
//! These proofs use bounded model checking to verify that the pure flag and
//! addressing helpers hold for ALL possible inputs.
//!
//! To run these proofs, install Kani and run:
//! ```text
//! cargo kani --tests
//! ```
//!
//! They are compiled only under the `kani` cfg and are ignored by a regular
//! `cargo test`.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use core6502::flags::{adc_binary, adc_decimal, compare, overflow, sbc_binary};
    use core6502::{Registers, Status, OPCODE_TABLE};

    // ========== Stack Address Proofs ==========

    /// Proof: Stack address is always in range 0x0100-0x01FF
    #[kani::proof]
    fn proof_stack_address_always_in_stack_page() {
        let mut regs = Registers::new();
        regs.sp = kani::any();

        let stack_addr = regs.stack_addr();

        kani::assert(
            (0x0100..=0x01FF).contains(&stack_addr),
            "Stack address must be in range 0x0100-0x01FF",
        );
    }

    // ========== Status Proofs ==========

    /// Proof: Every status byte built from raw bits has bit 5 set and keeps
    /// the other bits
    #[kani::proof]
    fn proof_from_byte_forces_unused() {
        let raw: u8 = kani::any();
        let status = Status::from_byte(raw);

        kani::assert(status.bits() & 0x20 != 0, "Bit 5 must be set");
        kani::assert(status.bits() & !0x20 == raw & !0x20, "Other bits preserved");
    }

    // ========== Arithmetic Proofs ==========

    /// Proof: Binary ADC carry is exactly the 9th bit of the sum
    #[kani::proof]
    fn proof_adc_carry_is_ninth_bit() {
        let a: u8 = kani::any();
        let m: u8 = kani::any();
        let c: bool = kani::any();

        let out = adc_binary(a, m, c);
        let sum = a as u16 + m as u16 + c as u16;

        kani::assert(out.result == sum as u8, "Result is the low byte");
        kani::assert(out.carry == (sum > 0xFF), "Carry is bit 8");
        kani::assert(out.zero == (out.result == 0), "Zero follows result");
        kani::assert(out.negative == (out.result & 0x80 != 0), "Sign follows bit 7");
    }

    /// Proof: Overflow matches the signed-arithmetic definition
    #[kani::proof]
    fn proof_adc_overflow_is_signed_overflow() {
        let a: u8 = kani::any();
        let m: u8 = kani::any();
        let c: bool = kani::any();

        let out = adc_binary(a, m, c);
        let signed = a as i8 as i16 + m as i8 as i16 + c as i16;

        kani::assert(
            out.overflow == !(-128..=127).contains(&signed),
            "V set iff the signed sum leaves i8 range",
        );
    }

    /// Proof: SBC is ADC of the one's complement
    #[kani::proof]
    fn proof_sbc_is_adc_of_complement() {
        let a: u8 = kani::any();
        let m: u8 = kani::any();
        let c: bool = kani::any();

        kani::assert(
            sbc_binary(a, m, c) == adc_binary(a, !m, c),
            "SBC must equal ADC of !M",
        );
    }

    /// Proof: Decimal ADC takes Z from the binary sum, and N/V agree with
    /// the binary sum whenever the low nibble needs no correction
    #[kani::proof]
    fn proof_decimal_adc_flags() {
        let a: u8 = kani::any();
        let m: u8 = kani::any();
        let c: bool = kani::any();

        let decimal = adc_decimal(a, m, c);
        let binary = adc_binary(a, m, c);

        kani::assert(decimal.zero == binary.zero, "Z from binary sum");

        if (a & 0x0F) + (m & 0x0F) + c as u8 <= 9 {
            kani::assert(decimal.overflow == binary.overflow, "V matches binary");
            kani::assert(decimal.negative == binary.negative, "N matches binary");
        }
    }

    /// Proof: Compare carry is unsigned >=
    #[kani::proof]
    fn proof_compare() {
        let r: u8 = kani::any();
        let m: u8 = kani::any();

        let (diff, carry) = compare(r, m);

        kani::assert(carry == (r >= m), "C iff register >= operand");
        kani::assert((diff == 0) == (r == m), "Z iff equal");
    }

    /// Proof: Overflow helper is symmetric in its operands
    #[kani::proof]
    fn proof_overflow_symmetric() {
        let result: u16 = kani::any();
        let a: u8 = kani::any();
        let m: u8 = kani::any();

        kani::assert(
            overflow(result, a, m) == overflow(result, m, a),
            "Operand order must not matter",
        );
    }

    // ========== Opcode Table Proofs ==========

    /// Proof: Every opcode's size is 1 + its operand length, at most 3
    #[kani::proof]
    fn proof_opcode_sizes() {
        let opcode: u8 = kani::any();
        let metadata = &OPCODE_TABLE[opcode as usize];

        kani::assert(
            metadata.size_bytes == 1 + metadata.addressing_mode.operand_len(),
            "Size follows addressing mode",
        );
        kani::assert(
            (1..=3).contains(&metadata.size_bytes),
            "Instructions are 1 to 3 bytes",
        );
        kani::assert(
            (2..=8).contains(&metadata.base_cycles),
            "Base cycles are 2 to 8",
        );
    }
}
