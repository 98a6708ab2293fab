//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Read-modify-write on memory
//! - INX, INY, DEX, DEY: Index registers
//!
//! All of them wrap at 8 bits and update only Z and N.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

use super::modify;

/// Executes the INC instruction. Returns the new memory value.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    let result = modify(cpu, operand, |value| value.wrapping_add(1));
    cpu.regs.status.set_zn(result);
    result
}

/// Executes the DEC instruction. Returns the new memory value.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    let result = modify(cpu, operand, |value| value.wrapping_sub(1));
    cpu.regs.status.set_zn(result);
    result
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.status.set_zn(cpu.regs.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.status.set_zn(cpu.regs.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.status.set_zn(cpu.regs.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.status.set_zn(cpu.regs.y);
}
