//! # Shift and Rotate Instructions
//!
//! This module implements shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each operates on the accumulator or, as a read-modify-write, on memory.
//! The bit shifted out lands in Carry; Z and N follow the result.

use crate::addressing::Operand;
use crate::registers::Status;
use crate::{MemoryBus, CPU};

use super::modify;

/// Executes the ASL instruction. Returns the shifted value.
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0x0A); // ASL A
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x81);
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0x02);
/// assert!(cpu.flag_c());
/// ```
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    shift(cpu, operand, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR instruction. Returns the shifted value.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    shift(cpu, operand, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL instruction. Returns the rotated value.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    shift(cpu, operand, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR instruction. Returns the rotated value.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    shift(cpu, operand, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}

/// Applies `op(value, carry_in) -> (result, carry_out)` to the operand.
fn shift<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    op: impl FnOnce(u8, bool) -> (u8, bool),
) -> u8 {
    let carry_in = cpu.regs.status.contains(Status::CARRY);
    let mut carry_out = false;

    let result = modify(cpu, operand, |value| {
        let (result, carry) = op(value, carry_in);
        carry_out = carry;
        result
    });

    cpu.regs.status.set(Status::CARRY, carry_out);
    cpu.regs.status.set_zn(result);
    result
}

#[cfg(test)]
mod tests {
    use crate::{FlatMemory, MemoryBus, CPU};

    fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x80);
        memory.load(0x8000, program);
        CPU::new(memory)
    }

    #[test]
    fn test_ror_memory_through_carry() {
        let mut cpu = setup_cpu(&[0x66, 0x20]); // ROR $20
        cpu.memory_mut().write(0x0020, 0x01);
        cpu.set_flag_c(true);

        cpu.step();

        assert_eq!(cpu.memory().peek(0x0020), 0x80);
        assert!(cpu.flag_c());
        assert!(cpu.flag_n());
    }

    #[test]
    fn test_lsr_clears_negative() {
        let mut cpu = setup_cpu(&[0x4A]); // LSR A
        cpu.set_a(0x01);

        cpu.step();

        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.flag_c());
        assert!(cpu.flag_z());
        assert!(!cpu.flag_n());
    }

    #[test]
    fn test_rol_accumulator() {
        let mut cpu = setup_cpu(&[0x2A]); // ROL A
        cpu.set_a(0x40);
        cpu.set_flag_c(true);

        cpu.step();

        assert_eq!(cpu.a(), 0x81);
        assert!(!cpu.flag_c());
        assert!(cpu.flag_n());
    }
}
