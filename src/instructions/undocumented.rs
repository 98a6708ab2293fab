//! # Undocumented Instructions
//!
//! The NMOS 6502 decodes several opcode bytes outside the official set into
//! two documented operations running on the same operand. The ones below
//! behave identically across chips and are relied on by real software:
//!
//! - LAX: LDA + LDX
//! - SAX: store A & X (no flags)
//! - DCP: DEC memory, then CMP with A
//! - ISB: INC memory, then SBC (honors decimal mode)
//! - SLO: ASL memory, then ORA
//! - RLA: ROL memory, then AND
//! - SRE: LSR memory, then EOR
//! - RRA: ROR memory, then ADC (honors decimal mode)
//!
//! The read-modify-write forms read the operand once and write it once.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

use super::alu::{add_to_accumulator, compare_with, subtract_from_accumulator};
use super::{modify, read_operand, shifts, write_operand};

pub(crate) fn execute_lax<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    cpu.regs.a = value;
    cpu.regs.x = value;
    cpu.regs.status.set_zn(value);
}

pub(crate) fn execute_sax<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.a & cpu.regs.x;
    write_operand(cpu, operand, value);
}

pub(crate) fn execute_dcp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = modify(cpu, operand, |value| value.wrapping_sub(1));
    let a = cpu.regs.a;
    compare_with(cpu, a, value);
}

pub(crate) fn execute_isb<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = modify(cpu, operand, |value| value.wrapping_add(1));
    subtract_from_accumulator(cpu, value);
}

pub(crate) fn execute_slo<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = shifts::execute_asl(cpu, operand);
    cpu.regs.a |= value;
    cpu.regs.status.set_zn(cpu.regs.a);
}

pub(crate) fn execute_rla<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = shifts::execute_rol(cpu, operand);
    cpu.regs.a &= value;
    cpu.regs.status.set_zn(cpu.regs.a);
}

pub(crate) fn execute_sre<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = shifts::execute_lsr(cpu, operand);
    cpu.regs.a ^= value;
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// ROR feeds its carry-out into the ADC.
pub(crate) fn execute_rra<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = shifts::execute_ror(cpu, operand);
    add_to_accumulator(cpu, value);
}
