//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags are affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push8(cpu.regs.a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has the Break and unused bits set. The live
/// status register is not modified.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pushed = cpu.regs.status | Status::BREAK | Status::UNUSED;
    cpu.push8(pushed.bits());
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.pull8();
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Bit 5 is forced on; every other bit is taken from the stack.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull8();
    cpu.regs.status = Status::from_byte(value);
}
