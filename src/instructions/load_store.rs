//! # Load and Store Instructions
//!
//! This module implements the load and store instructions:
//! - LDA, LDX, LDY: Load a register from the operand, updating Z and N
//! - STA, STX, STY: Store a register to memory; no flags are affected

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

use super::{read_operand, write_operand};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.load(0x8000, &[0xA9, 0x80]); // LDA #$80
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.flag_n());
/// assert!(!cpu.flag_z());
/// ```
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.regs.a = read_operand(cpu, operand);
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.regs.x = read_operand(cpu, operand);
    cpu.regs.status.set_zn(cpu.regs.x);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.regs.y = read_operand(cpu, operand);
    cpu.regs.status.set_zn(cpu.regs.y);
}

/// Executes STA, STX or STY with the register's value.
pub(crate) fn execute_store<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, value: u8) {
    write_operand(cpu, operand, value);
}
