//! # Flag Engine
//!
//! Pure functions computing the processor status flags from an operation's
//! inputs and result, plus the binary and decimal (BCD) forms of the
//! adder used by ADC and SBC.
//!
//! The 16-bit helpers take the widened intermediate of an 8-bit operation,
//! so bit 8 holds the carry out of bit 7.

/// Carry: set iff bit 8 of the 16-bit intermediate is set.
pub const fn carry(result: u16) -> bool {
    result & 0x0100 != 0
}

/// Zero: set iff the low 8 bits of the result are zero.
pub const fn zero(result: u16) -> bool {
    result & 0x00FF == 0
}

/// Sign: set iff bit 7 of the low byte is set.
pub const fn sign(result: u16) -> bool {
    result & 0x0080 != 0
}

/// Overflow: set iff both operands share a sign that the result does not.
pub const fn overflow(result: u16, accumulator: u8, operand: u8) -> bool {
    (result ^ accumulator as u16) & (result ^ operand as u16) & 0x0080 != 0
}

/// Result and flags of an ADC/SBC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticOutput {
    /// New accumulator value
    pub result: u8,
    /// Carry out (no borrow for subtraction)
    pub carry: bool,
    /// Signed overflow
    pub overflow: bool,
    /// Negative / sign
    pub negative: bool,
    /// Zero
    pub zero: bool,
}

/// Binary add with carry.
///
/// # Examples
///
/// ```
/// use core6502::flags::adc_binary;
///
/// // Two positives summing to a negative overflow
/// let out = adc_binary(0x50, 0x50, false);
/// assert_eq!(out.result, 0xA0);
/// assert!(out.overflow && out.negative);
/// assert!(!out.carry && !out.zero);
/// ```
pub fn adc_binary(accumulator: u8, value: u8, carry_in: bool) -> ArithmeticOutput {
    let sum = accumulator as u16 + value as u16 + carry_in as u16;

    ArithmeticOutput {
        result: sum as u8,
        carry: carry(sum),
        overflow: overflow(sum, accumulator, value),
        negative: sign(sum),
        zero: zero(sum),
    }
}

/// Binary subtract with borrow: ADC of the operand's one's complement.
pub fn sbc_binary(accumulator: u8, value: u8, carry_in: bool) -> ArithmeticOutput {
    adc_binary(accumulator, !value, carry_in)
}

/// BCD add with carry, as performed by the NMOS 6502.
///
/// Each nibble above 9 is corrected by 6 and the low-nibble carry feeds the
/// high nibble. Zero comes from the binary sum. Negative and Overflow come
/// from the intermediate whose low nibble is corrected but whose high nibble
/// is not.
///
/// # Examples
///
/// ```
/// use core6502::flags::adc_decimal;
///
/// let out = adc_decimal(0x09, 0x01, false);
/// assert_eq!(out.result, 0x10);
///
/// let out = adc_decimal(0x99, 0x01, false);
/// assert_eq!(out.result, 0x00);
/// assert!(out.carry);
/// ```
pub fn adc_decimal(accumulator: u8, value: u8, carry_in: bool) -> ArithmeticOutput {
    let binary = accumulator as u16 + value as u16 + carry_in as u16;

    let mut lo = (accumulator & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in as u16;
    if lo > 0x09 {
        lo += 0x06;
    }

    let mut hi = (accumulator >> 4) as u16 + (value >> 4) as u16 + (lo > 0x0F) as u16;
    let intermediate = (hi << 4) | (lo & 0x0F);
    if hi > 0x09 {
        hi += 0x06;
    }

    ArithmeticOutput {
        result: (((hi & 0x0F) << 4) | (lo & 0x0F)) as u8,
        carry: hi > 0x0F,
        overflow: overflow(intermediate, accumulator, value),
        negative: sign(intermediate),
        zero: zero(binary),
    }
}

/// BCD subtract with borrow, as performed by the NMOS 6502.
///
/// Flags are those of the binary subtraction; each borrowing nibble of the
/// result is corrected by 6.
pub fn sbc_decimal(accumulator: u8, value: u8, carry_in: bool) -> ArithmeticOutput {
    let flags = sbc_binary(accumulator, value, carry_in);
    let borrow = (!carry_in) as i16;

    let mut lo = (accumulator & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (accumulator >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }

    ArithmeticOutput {
        result: ((hi << 4) as u8) | ((lo & 0x0F) as u8),
        ..flags
    }
}

/// Compare a register with an operand as CMP/CPX/CPY do.
///
/// Returns the wrapped difference (for Z and N) and the carry (register >= operand).
pub fn compare(register: u8, value: u8) -> (u8, bool) {
    (register.wrapping_sub(value), register >= value)
}
