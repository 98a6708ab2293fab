//! # Control Flow Instructions
//!
//! This module implements control flow instructions:
//! - JMP: Jump (absolute and indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//! - BRK: Force Interrupt

use crate::addressing::Operand;
use crate::interrupts::Interrupt;
use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// Executes the JMP instruction.
///
/// The indirect form's page-wrap quirk is handled by the resolver.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        cpu.regs.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return
/// address - 1), high byte first, then jumps to the target.
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
///
/// assert_eq!(cpu.pc(), 0x9000);
/// assert_eq!(cpu.sp(), 0xFB);
/// assert_eq!(cpu.memory().peek(0x01FD), 0x80);
/// assert_eq!(cpu.memory().peek(0x01FC), 0x02);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        let return_addr = cpu.regs.pc.wrapping_sub(1);
        cpu.push16(return_addr);
        cpu.regs.pc = target;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.pc = cpu.pull16().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (bit 5 forced on) and then the program
/// counter. Unlike RTS, the pulled address is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull8();
    cpu.regs.status = Status::from_byte(status);
    cpu.regs.pc = cpu.pull16();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is followed by a padding byte that is skipped, so the pushed
/// return address is the opcode address + 2.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.pc = cpu.regs.pc.wrapping_add(1);
    cpu.interrupt(Interrupt::Brk);
}
