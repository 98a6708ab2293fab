//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register comparison
//! - BIT: Bit test
//!
//! ADC and SBC take the BCD path when the Decimal flag is set and the CPU
//! was configured with decimal mode enabled.

use crate::addressing::Operand;
use crate::flags::{self, ArithmeticOutput};
use crate::registers::Status;
use crate::{MemoryBus, CPU};

use super::read_operand;

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. Updates C, Z, V
/// and N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    add_to_accumulator(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the inverted carry (borrow) from the
/// accumulator. Carry is set when no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    subtract_from_accumulator(cpu, value);
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    cpu.regs.a &= value;
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    cpu.regs.a |= value;
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    cpu.regs.a ^= value;
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// Executes CMP, CPX or CPY against `register`.
///
/// Carry is set when `register >= operand`; Z and N come from the
/// difference. No register is modified.
pub(crate) fn execute_compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    let value = read_operand(cpu, operand);
    compare_with(cpu, register, value);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects `A & M`. N and V are copied from bits 7 and 6 of the operand.
/// The accumulator is unchanged.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    let status = &mut cpu.regs.status;

    status.set(Status::ZERO, cpu.regs.a & value == 0);
    status.set(Status::NEGATIVE, value & 0x80 != 0);
    status.set(Status::OVERFLOW, value & 0x40 != 0);
}

pub(crate) fn add_to_accumulator<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let carry_in = cpu.regs.status.contains(Status::CARRY);
    let out = if cpu.decimal_active() {
        flags::adc_decimal(cpu.regs.a, value, carry_in)
    } else {
        flags::adc_binary(cpu.regs.a, value, carry_in)
    };
    apply(cpu, out);
}

pub(crate) fn subtract_from_accumulator<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let carry_in = cpu.regs.status.contains(Status::CARRY);
    let out = if cpu.decimal_active() {
        flags::sbc_decimal(cpu.regs.a, value, carry_in)
    } else {
        flags::sbc_binary(cpu.regs.a, value, carry_in)
    };
    apply(cpu, out);
}

pub(crate) fn compare_with<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let (diff, carry) = flags::compare(register, value);
    cpu.regs.status.set(Status::CARRY, carry);
    cpu.regs.status.set_zn(diff);
}

fn apply<M: MemoryBus>(cpu: &mut CPU<M>, out: ArithmeticOutput) {
    cpu.regs.a = out.result;

    let status = &mut cpu.regs.status;
    status.set(Status::CARRY, out.carry);
    status.set(Status::OVERFLOW, out.overflow);
    status.set(Status::NEGATIVE, out.negative);
    status.set(Status::ZERO, out.zero);
}
