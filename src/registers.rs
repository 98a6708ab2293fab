//! # Register File
//!
//! The 6502 has minimal registers:
//! - **A**: 8-bit accumulator
//! - **X, Y**: 8-bit index registers
//! - **SP**: 8-bit stack pointer, an offset into the stack page (0x0100-0x01FF)
//! - **PC**: 16-bit program counter
//! - **P**: 8-bit processor status
//!
//! The register file is plain state. It is owned by a [`CPU`](crate::CPU)
//! and only mutated by the instruction handlers and interrupt sequences.

use bitflags::bitflags;

bitflags! {
    /// Processor status register (P).
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative / Sign)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Status: u8 {
        /// Set on unsigned overflow out of bit 7 (or no borrow on subtract).
        const CARRY = 0x01;
        /// Set when the result is zero.
        const ZERO = 0x02;
        /// Blocks maskable interrupts when set.
        const INTERRUPT_DISABLE = 0x04;
        /// Enables BCD arithmetic for ADC and SBC.
        const DECIMAL = 0x08;
        /// Distinguishes BRK/PHP pushes from hardware interrupt pushes.
        const BREAK = 0x10;
        /// Reads back as 1 on the real chip.
        const UNUSED = 0x20;
        /// Set on signed overflow.
        const OVERFLOW = 0x40;
        /// Copy of bit 7 of the result.
        const NEGATIVE = 0x80;
    }
}

impl Status {
    /// Builds a status value from a raw byte, forcing the unused bit.
    pub const fn from_byte(value: u8) -> Self {
        Self::from_bits_retain(value | Self::UNUSED.bits())
    }

    /// Updates Z and N from an 8-bit result.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::UNUSED | Status::INTERRUPT_DISABLE
    }
}

/// 6502 register set.
///
/// `Registers` is `Copy`, so hosts can take cheap snapshots with
/// [`CPU::registers`](crate::CPU::registers) and compare or restore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Processor status flags
    pub status: Status,
}

impl Registers {
    /// Power-on register state: zeroed registers, SP at 0xFD, I and the
    /// unused bit set.
    pub fn new() -> Self {
        Self {
            pc: 0x0000,
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0xFD,
            status: Status::default(),
        }
    }

    /// Full address of the current stack slot.
    pub const fn stack_addr(&self) -> u16 {
        0x0100 | (self.sp as u16)
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let regs = Registers::new();
        assert_eq!(regs.sp, 0xFD);
        assert_eq!(regs.status.bits(), 0x24);
        assert_eq!(regs.stack_addr(), 0x01FD);
    }

    #[test]
    fn test_from_byte_forces_unused_bit() {
        assert_eq!(Status::from_byte(0x00).bits(), 0x20);
        assert_eq!(Status::from_byte(0xDF).bits(), 0xFF);
    }

    #[test]
    fn test_set_zn() {
        let mut status = Status::from_byte(0);
        status.set_zn(0x00);
        assert!(status.contains(Status::ZERO));
        assert!(!status.contains(Status::NEGATIVE));

        status.set_zn(0x80);
        assert!(!status.contains(Status::ZERO));
        assert!(status.contains(Status::NEGATIVE));
    }
}
