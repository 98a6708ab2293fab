//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function that takes a mutable reference to the CPU and
//! the operand produced by the addressing-mode resolver.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **undocumented**: Combined operations (LAX, SAX, DCP, ISB, SLO, RLA, SRE, RRA)

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;
mod undocumented;

use crate::addressing::{resolve, Operand};
use crate::opcodes::{OpcodeMetadata, Operation};
use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// Runs one decoded instruction. `cpu.pc` points at the byte after the opcode.
///
/// The operand is resolved first and `pc` is advanced past the operand
/// bytes, so control-flow handlers see the address of the next instruction.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) {
    let (operand, len) = resolve(
        metadata.addressing_mode,
        cpu.regs.pc,
        cpu.regs.x,
        cpu.regs.y,
        &mut cpu.memory,
    );
    cpu.regs.pc = cpu.regs.pc.wrapping_add(len);

    match metadata.operation {
        Operation::Adc => alu::execute_adc(cpu, operand),
        Operation::Sbc => alu::execute_sbc(cpu, operand),
        Operation::And => alu::execute_and(cpu, operand),
        Operation::Ora => alu::execute_ora(cpu, operand),
        Operation::Eor => alu::execute_eor(cpu, operand),
        Operation::Cmp => {
            let a = cpu.regs.a;
            alu::execute_compare(cpu, a, operand)
        }
        Operation::Cpx => {
            let x = cpu.regs.x;
            alu::execute_compare(cpu, x, operand)
        }
        Operation::Cpy => {
            let y = cpu.regs.y;
            alu::execute_compare(cpu, y, operand)
        }
        Operation::Bit => alu::execute_bit(cpu, operand),

        Operation::Bcc => branches::execute_branch(cpu, operand, Status::CARRY, false),
        Operation::Bcs => branches::execute_branch(cpu, operand, Status::CARRY, true),
        Operation::Bne => branches::execute_branch(cpu, operand, Status::ZERO, false),
        Operation::Beq => branches::execute_branch(cpu, operand, Status::ZERO, true),
        Operation::Bpl => branches::execute_branch(cpu, operand, Status::NEGATIVE, false),
        Operation::Bmi => branches::execute_branch(cpu, operand, Status::NEGATIVE, true),
        Operation::Bvc => branches::execute_branch(cpu, operand, Status::OVERFLOW, false),
        Operation::Bvs => branches::execute_branch(cpu, operand, Status::OVERFLOW, true),

        Operation::Asl => {
            shifts::execute_asl(cpu, operand);
        }
        Operation::Lsr => {
            shifts::execute_lsr(cpu, operand);
        }
        Operation::Rol => {
            shifts::execute_rol(cpu, operand);
        }
        Operation::Ror => {
            shifts::execute_ror(cpu, operand);
        }

        Operation::Lda => load_store::execute_lda(cpu, operand),
        Operation::Ldx => load_store::execute_ldx(cpu, operand),
        Operation::Ldy => load_store::execute_ldy(cpu, operand),
        Operation::Sta => {
            let a = cpu.regs.a;
            load_store::execute_store(cpu, operand, a)
        }
        Operation::Stx => {
            let x = cpu.regs.x;
            load_store::execute_store(cpu, operand, x)
        }
        Operation::Sty => {
            let y = cpu.regs.y;
            load_store::execute_store(cpu, operand, y)
        }

        Operation::Inc => {
            inc_dec::execute_inc(cpu, operand);
        }
        Operation::Dec => {
            inc_dec::execute_dec(cpu, operand);
        }
        Operation::Inx => inc_dec::execute_inx(cpu),
        Operation::Iny => inc_dec::execute_iny(cpu),
        Operation::Dex => inc_dec::execute_dex(cpu),
        Operation::Dey => inc_dec::execute_dey(cpu),

        Operation::Jmp => control::execute_jmp(cpu, operand),
        Operation::Jsr => control::execute_jsr(cpu, operand),
        Operation::Rts => control::execute_rts(cpu),
        Operation::Rti => control::execute_rti(cpu),
        Operation::Brk => control::execute_brk(cpu),
        Operation::Nop => {}

        Operation::Pha => stack::execute_pha(cpu),
        Operation::Php => stack::execute_php(cpu),
        Operation::Pla => stack::execute_pla(cpu),
        Operation::Plp => stack::execute_plp(cpu),

        Operation::Clc => flags::execute_flag(cpu, Status::CARRY, false),
        Operation::Sec => flags::execute_flag(cpu, Status::CARRY, true),
        Operation::Cli => flags::execute_flag(cpu, Status::INTERRUPT_DISABLE, false),
        Operation::Sei => flags::execute_flag(cpu, Status::INTERRUPT_DISABLE, true),
        Operation::Cld => flags::execute_flag(cpu, Status::DECIMAL, false),
        Operation::Sed => flags::execute_flag(cpu, Status::DECIMAL, true),
        Operation::Clv => flags::execute_flag(cpu, Status::OVERFLOW, false),

        Operation::Tax => transfer::execute_tax(cpu),
        Operation::Tay => transfer::execute_tay(cpu),
        Operation::Txa => transfer::execute_txa(cpu),
        Operation::Tya => transfer::execute_tya(cpu),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txs => transfer::execute_txs(cpu),

        Operation::Lax => undocumented::execute_lax(cpu, operand),
        Operation::Sax => undocumented::execute_sax(cpu, operand),
        Operation::Dcp => undocumented::execute_dcp(cpu, operand),
        Operation::Isb => undocumented::execute_isb(cpu, operand),
        Operation::Slo => undocumented::execute_slo(cpu, operand),
        Operation::Rla => undocumented::execute_rla(cpu, operand),
        Operation::Sre => undocumented::execute_sre(cpu, operand),
        Operation::Rra => undocumented::execute_rra(cpu, operand),
    }
}

/// Reads the value an operand designates.
///
/// Implied operands are never passed by operations that read; they yield 0.
pub(crate) fn read_operand<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    match operand {
        Operand::Accumulator => cpu.regs.a,
        Operand::Address(addr) => cpu.memory.read(addr),
        Operand::Implied => 0,
    }
}

/// Writes `value` to the location an operand designates.
pub(crate) fn write_operand<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, value: u8) {
    match operand {
        Operand::Accumulator => cpu.regs.a = value,
        Operand::Address(addr) => cpu.memory.write(addr, value),
        Operand::Implied => {}
    }
}

/// Read-modify-write: one read, then one write of `f(value)`.
///
/// Returns the written value.
pub(crate) fn modify<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    f: impl FnOnce(u8) -> u8,
) -> u8 {
    let value = read_operand(cpu, operand);
    let result = f(value);
    write_operand(cpu, operand, result);
    result
}
