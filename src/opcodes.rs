//! # Opcode Dispatch Tables
//!
//! This module contains the 256-entry opcode tables that drive instruction
//! dispatch. Every byte value maps to exactly one entry naming the
//! operation, its addressing mode, its base cycle cost and its length.
//!
//! Two tables exist:
//! - [`OPCODE_TABLE`] - the documented instruction set plus the predictable
//!   undocumented opcodes (LAX, SAX, DCP, ISB, SLO, RLA, SRE, RRA, SBC #imm
//!   at 0xEB, and the multi-byte NOPs)
//! - [`DOCUMENTED_TABLE`] - the same table with every undocumented operation
//!   replaced by a NOP of the same addressing mode, so instruction lengths
//!   are identical between the two
//!
//! Unstable undocumented opcodes (ANC, ALR, ARR, XAA, LXA, AXS, AHX, SHX,
//! SHY, TAS, LAS) execute as NOPs of their real length in both tables. The
//! JAM opcodes, which halt a real chip, are one-byte NOPs marked `"???"`.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;
use Operation::*;

/// The operation an opcode performs, independent of its addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// LDA + LDX from the same operand
    Lax,
    /// Store A & X
    Sax,
    /// DEC memory, then CMP with it
    Dcp,
    /// INC memory, then SBC with it
    Isb,
    /// ASL memory, then ORA with it
    Slo,
    /// ROL memory, then AND with it
    Rla,
    /// LSR memory, then EOR with it
    Sre,
    /// ROR memory, then ADC with it
    Rra,
}

impl Operation {
    /// True for operations that load `pc` themselves (jumps, calls,
    /// returns, branches and BRK).
    pub const fn is_control_flow(self) -> bool {
        matches!(
            self,
            Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs | Jmp | Jsr | Rts | Rti | Brk
        )
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use core6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(!lda_imm.undocumented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for JAM opcodes).
    pub mnemonic: &'static str,

    /// Operation performed by the handler.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost, used only for the cycle counter estimate.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// - 1 byte: Implicit, Accumulator modes
    /// - 2 bytes: Immediate, Zero Page, Relative, Indexed Indirect modes
    /// - 3 bytes: Absolute, Indirect modes
    pub size_bytes: u8,

    /// Whether the opcode is outside the official instruction set.
    pub undocumented: bool,
}

const fn op(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operation,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_len(),
        undocumented: false,
    }
}

const fn undoc(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        undocumented: true,
        ..op(mnemonic, operation, addressing_mode, base_cycles)
    }
}

const fn nop(addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    undoc("NOP", Nop, addressing_mode, base_cycles)
}

const fn jam() -> OpcodeMetadata {
    undoc("???", Nop, Implicit, 2)
}

/// Complete 256-entry opcode table indexed by opcode byte value, including
/// the predictable undocumented opcodes.
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = NMOS_TABLE;

/// The documented instruction set: [`OPCODE_TABLE`] with every
/// undocumented operation turned into a NOP of the same length.
pub static DOCUMENTED_TABLE: [OpcodeMetadata; 256] = documented_only(NMOS_TABLE);

const NMOS_TABLE: [OpcodeMetadata; 256] = [
    op("BRK", Brk, Implicit, 7),      // 0x00
    op("ORA", Ora, IndirectX, 6),     // 0x01
    jam(),                            // 0x02
    undoc("SLO", Slo, IndirectX, 8),  // 0x03
    nop(ZeroPage, 3),                 // 0x04
    op("ORA", Ora, ZeroPage, 3),      // 0x05
    op("ASL", Asl, ZeroPage, 5),      // 0x06
    undoc("SLO", Slo, ZeroPage, 5),   // 0x07
    op("PHP", Php, Implicit, 3),      // 0x08
    op("ORA", Ora, Immediate, 2),     // 0x09
    op("ASL", Asl, Accumulator, 2),   // 0x0A
    nop(Immediate, 2),                // 0x0B ANC
    nop(Absolute, 4),                 // 0x0C
    op("ORA", Ora, Absolute, 4),      // 0x0D
    op("ASL", Asl, Absolute, 6),      // 0x0E
    undoc("SLO", Slo, Absolute, 6),   // 0x0F
    op("BPL", Bpl, Relative, 2),      // 0x10
    op("ORA", Ora, IndirectY, 5),     // 0x11
    jam(),                            // 0x12
    undoc("SLO", Slo, IndirectY, 8),  // 0x13
    nop(ZeroPageX, 4),                // 0x14
    op("ORA", Ora, ZeroPageX, 4),     // 0x15
    op("ASL", Asl, ZeroPageX, 6),     // 0x16
    undoc("SLO", Slo, ZeroPageX, 6),  // 0x17
    op("CLC", Clc, Implicit, 2),      // 0x18
    op("ORA", Ora, AbsoluteY, 4),     // 0x19
    nop(Implicit, 2),                 // 0x1A
    undoc("SLO", Slo, AbsoluteY, 7),  // 0x1B
    nop(AbsoluteX, 4),                // 0x1C
    op("ORA", Ora, AbsoluteX, 4),     // 0x1D
    op("ASL", Asl, AbsoluteX, 7),     // 0x1E
    undoc("SLO", Slo, AbsoluteX, 7),  // 0x1F
    op("JSR", Jsr, Absolute, 6),      // 0x20
    op("AND", And, IndirectX, 6),     // 0x21
    jam(),                            // 0x22
    undoc("RLA", Rla, IndirectX, 8),  // 0x23
    op("BIT", Bit, ZeroPage, 3),      // 0x24
    op("AND", And, ZeroPage, 3),      // 0x25
    op("ROL", Rol, ZeroPage, 5),      // 0x26
    undoc("RLA", Rla, ZeroPage, 5),   // 0x27
    op("PLP", Plp, Implicit, 4),      // 0x28
    op("AND", And, Immediate, 2),     // 0x29
    op("ROL", Rol, Accumulator, 2),   // 0x2A
    nop(Immediate, 2),                // 0x2B ANC
    op("BIT", Bit, Absolute, 4),      // 0x2C
    op("AND", And, Absolute, 4),      // 0x2D
    op("ROL", Rol, Absolute, 6),      // 0x2E
    undoc("RLA", Rla, Absolute, 6),   // 0x2F
    op("BMI", Bmi, Relative, 2),      // 0x30
    op("AND", And, IndirectY, 5),     // 0x31
    jam(),                            // 0x32
    undoc("RLA", Rla, IndirectY, 8),  // 0x33
    nop(ZeroPageX, 4),                // 0x34
    op("AND", And, ZeroPageX, 4),     // 0x35
    op("ROL", Rol, ZeroPageX, 6),     // 0x36
    undoc("RLA", Rla, ZeroPageX, 6),  // 0x37
    op("SEC", Sec, Implicit, 2),      // 0x38
    op("AND", And, AbsoluteY, 4),     // 0x39
    nop(Implicit, 2),                 // 0x3A
    undoc("RLA", Rla, AbsoluteY, 7),  // 0x3B
    nop(AbsoluteX, 4),                // 0x3C
    op("AND", And, AbsoluteX, 4),     // 0x3D
    op("ROL", Rol, AbsoluteX, 7),     // 0x3E
    undoc("RLA", Rla, AbsoluteX, 7),  // 0x3F
    op("RTI", Rti, Implicit, 6),      // 0x40
    op("EOR", Eor, IndirectX, 6),     // 0x41
    jam(),                            // 0x42
    undoc("SRE", Sre, IndirectX, 8),  // 0x43
    nop(ZeroPage, 3),                 // 0x44
    op("EOR", Eor, ZeroPage, 3),      // 0x45
    op("LSR", Lsr, ZeroPage, 5),      // 0x46
    undoc("SRE", Sre, ZeroPage, 5),   // 0x47
    op("PHA", Pha, Implicit, 3),      // 0x48
    op("EOR", Eor, Immediate, 2),     // 0x49
    op("LSR", Lsr, Accumulator, 2),   // 0x4A
    nop(Immediate, 2),                // 0x4B ALR
    op("JMP", Jmp, Absolute, 3),      // 0x4C
    op("EOR", Eor, Absolute, 4),      // 0x4D
    op("LSR", Lsr, Absolute, 6),      // 0x4E
    undoc("SRE", Sre, Absolute, 6),   // 0x4F
    op("BVC", Bvc, Relative, 2),      // 0x50
    op("EOR", Eor, IndirectY, 5),     // 0x51
    jam(),                            // 0x52
    undoc("SRE", Sre, IndirectY, 8),  // 0x53
    nop(ZeroPageX, 4),                // 0x54
    op("EOR", Eor, ZeroPageX, 4),     // 0x55
    op("LSR", Lsr, ZeroPageX, 6),     // 0x56
    undoc("SRE", Sre, ZeroPageX, 6),  // 0x57
    op("CLI", Cli, Implicit, 2),      // 0x58
    op("EOR", Eor, AbsoluteY, 4),     // 0x59
    nop(Implicit, 2),                 // 0x5A
    undoc("SRE", Sre, AbsoluteY, 7),  // 0x5B
    nop(AbsoluteX, 4),                // 0x5C
    op("EOR", Eor, AbsoluteX, 4),     // 0x5D
    op("LSR", Lsr, AbsoluteX, 7),     // 0x5E
    undoc("SRE", Sre, AbsoluteX, 7),  // 0x5F
    op("RTS", Rts, Implicit, 6),      // 0x60
    op("ADC", Adc, IndirectX, 6),     // 0x61
    jam(),                            // 0x62
    undoc("RRA", Rra, IndirectX, 8),  // 0x63
    nop(ZeroPage, 3),                 // 0x64
    op("ADC", Adc, ZeroPage, 3),      // 0x65
    op("ROR", Ror, ZeroPage, 5),      // 0x66
    undoc("RRA", Rra, ZeroPage, 5),   // 0x67
    op("PLA", Pla, Implicit, 4),      // 0x68
    op("ADC", Adc, Immediate, 2),     // 0x69
    op("ROR", Ror, Accumulator, 2),   // 0x6A
    nop(Immediate, 2),                // 0x6B ARR
    op("JMP", Jmp, Indirect, 5),      // 0x6C
    op("ADC", Adc, Absolute, 4),      // 0x6D
    op("ROR", Ror, Absolute, 6),      // 0x6E
    undoc("RRA", Rra, Absolute, 6),   // 0x6F
    op("BVS", Bvs, Relative, 2),      // 0x70
    op("ADC", Adc, IndirectY, 5),     // 0x71
    jam(),                            // 0x72
    undoc("RRA", Rra, IndirectY, 8),  // 0x73
    nop(ZeroPageX, 4),                // 0x74
    op("ADC", Adc, ZeroPageX, 4),     // 0x75
    op("ROR", Ror, ZeroPageX, 6),     // 0x76
    undoc("RRA", Rra, ZeroPageX, 6),  // 0x77
    op("SEI", Sei, Implicit, 2),      // 0x78
    op("ADC", Adc, AbsoluteY, 4),     // 0x79
    nop(Implicit, 2),                 // 0x7A
    undoc("RRA", Rra, AbsoluteY, 7),  // 0x7B
    nop(AbsoluteX, 4),                // 0x7C
    op("ADC", Adc, AbsoluteX, 4),     // 0x7D
    op("ROR", Ror, AbsoluteX, 7),     // 0x7E
    undoc("RRA", Rra, AbsoluteX, 7),  // 0x7F
    nop(Immediate, 2),                // 0x80
    op("STA", Sta, IndirectX, 6),     // 0x81
    nop(Immediate, 2),                // 0x82
    undoc("SAX", Sax, IndirectX, 6),  // 0x83
    op("STY", Sty, ZeroPage, 3),      // 0x84
    op("STA", Sta, ZeroPage, 3),      // 0x85
    op("STX", Stx, ZeroPage, 3),      // 0x86
    undoc("SAX", Sax, ZeroPage, 3),   // 0x87
    op("DEY", Dey, Implicit, 2),      // 0x88
    nop(Immediate, 2),                // 0x89
    op("TXA", Txa, Implicit, 2),      // 0x8A
    nop(Immediate, 2),                // 0x8B XAA
    op("STY", Sty, Absolute, 4),      // 0x8C
    op("STA", Sta, Absolute, 4),      // 0x8D
    op("STX", Stx, Absolute, 4),      // 0x8E
    undoc("SAX", Sax, Absolute, 4),   // 0x8F
    op("BCC", Bcc, Relative, 2),      // 0x90
    op("STA", Sta, IndirectY, 6),     // 0x91
    jam(),                            // 0x92
    nop(IndirectY, 6),                // 0x93 AHX
    op("STY", Sty, ZeroPageX, 4),     // 0x94
    op("STA", Sta, ZeroPageX, 4),     // 0x95
    op("STX", Stx, ZeroPageY, 4),     // 0x96
    undoc("SAX", Sax, ZeroPageY, 4),  // 0x97
    op("TYA", Tya, Implicit, 2),      // 0x98
    op("STA", Sta, AbsoluteY, 5),     // 0x99
    op("TXS", Txs, Implicit, 2),      // 0x9A
    nop(AbsoluteY, 5),                // 0x9B TAS
    nop(AbsoluteX, 5),                // 0x9C SHY
    op("STA", Sta, AbsoluteX, 5),     // 0x9D
    nop(AbsoluteY, 5),                // 0x9E SHX
    nop(AbsoluteY, 5),                // 0x9F AHX
    op("LDY", Ldy, Immediate, 2),     // 0xA0
    op("LDA", Lda, IndirectX, 6),     // 0xA1
    op("LDX", Ldx, Immediate, 2),     // 0xA2
    undoc("LAX", Lax, IndirectX, 6),  // 0xA3
    op("LDY", Ldy, ZeroPage, 3),      // 0xA4
    op("LDA", Lda, ZeroPage, 3),      // 0xA5
    op("LDX", Ldx, ZeroPage, 3),      // 0xA6
    undoc("LAX", Lax, ZeroPage, 3),   // 0xA7
    op("TAY", Tay, Implicit, 2),      // 0xA8
    op("LDA", Lda, Immediate, 2),     // 0xA9
    op("TAX", Tax, Implicit, 2),      // 0xAA
    nop(Immediate, 2),                // 0xAB LXA
    op("LDY", Ldy, Absolute, 4),      // 0xAC
    op("LDA", Lda, Absolute, 4),      // 0xAD
    op("LDX", Ldx, Absolute, 4),      // 0xAE
    undoc("LAX", Lax, Absolute, 4),   // 0xAF
    op("BCS", Bcs, Relative, 2),      // 0xB0
    op("LDA", Lda, IndirectY, 5),     // 0xB1
    jam(),                            // 0xB2
    undoc("LAX", Lax, IndirectY, 5),  // 0xB3
    op("LDY", Ldy, ZeroPageX, 4),     // 0xB4
    op("LDA", Lda, ZeroPageX, 4),     // 0xB5
    op("LDX", Ldx, ZeroPageY, 4),     // 0xB6
    undoc("LAX", Lax, ZeroPageY, 4),  // 0xB7
    op("CLV", Clv, Implicit, 2),      // 0xB8
    op("LDA", Lda, AbsoluteY, 4),     // 0xB9
    op("TSX", Tsx, Implicit, 2),      // 0xBA
    nop(AbsoluteY, 4),                // 0xBB LAS
    op("LDY", Ldy, AbsoluteX, 4),     // 0xBC
    op("LDA", Lda, AbsoluteX, 4),     // 0xBD
    op("LDX", Ldx, AbsoluteY, 4),     // 0xBE
    undoc("LAX", Lax, AbsoluteY, 4),  // 0xBF
    op("CPY", Cpy, Immediate, 2),     // 0xC0
    op("CMP", Cmp, IndirectX, 6),     // 0xC1
    nop(Immediate, 2),                // 0xC2
    undoc("DCP", Dcp, IndirectX, 8),  // 0xC3
    op("CPY", Cpy, ZeroPage, 3),      // 0xC4
    op("CMP", Cmp, ZeroPage, 3),      // 0xC5
    op("DEC", Dec, ZeroPage, 5),      // 0xC6
    undoc("DCP", Dcp, ZeroPage, 5),   // 0xC7
    op("INY", Iny, Implicit, 2),      // 0xC8
    op("CMP", Cmp, Immediate, 2),     // 0xC9
    op("DEX", Dex, Implicit, 2),      // 0xCA
    nop(Immediate, 2),                // 0xCB AXS
    op("CPY", Cpy, Absolute, 4),      // 0xCC
    op("CMP", Cmp, Absolute, 4),      // 0xCD
    op("DEC", Dec, Absolute, 6),      // 0xCE
    undoc("DCP", Dcp, Absolute, 6),   // 0xCF
    op("BNE", Bne, Relative, 2),      // 0xD0
    op("CMP", Cmp, IndirectY, 5),     // 0xD1
    jam(),                            // 0xD2
    undoc("DCP", Dcp, IndirectY, 8),  // 0xD3
    nop(ZeroPageX, 4),                // 0xD4
    op("CMP", Cmp, ZeroPageX, 4),     // 0xD5
    op("DEC", Dec, ZeroPageX, 6),     // 0xD6
    undoc("DCP", Dcp, ZeroPageX, 6),  // 0xD7
    op("CLD", Cld, Implicit, 2),      // 0xD8
    op("CMP", Cmp, AbsoluteY, 4),     // 0xD9
    nop(Implicit, 2),                 // 0xDA
    undoc("DCP", Dcp, AbsoluteY, 7),  // 0xDB
    nop(AbsoluteX, 4),                // 0xDC
    op("CMP", Cmp, AbsoluteX, 4),     // 0xDD
    op("DEC", Dec, AbsoluteX, 7),     // 0xDE
    undoc("DCP", Dcp, AbsoluteX, 7),  // 0xDF
    op("CPX", Cpx, Immediate, 2),     // 0xE0
    op("SBC", Sbc, IndirectX, 6),     // 0xE1
    nop(Immediate, 2),                // 0xE2
    undoc("ISB", Isb, IndirectX, 8),  // 0xE3
    op("CPX", Cpx, ZeroPage, 3),      // 0xE4
    op("SBC", Sbc, ZeroPage, 3),      // 0xE5
    op("INC", Inc, ZeroPage, 5),      // 0xE6
    undoc("ISB", Isb, ZeroPage, 5),   // 0xE7
    op("INX", Inx, Implicit, 2),      // 0xE8
    op("SBC", Sbc, Immediate, 2),     // 0xE9
    op("NOP", Nop, Implicit, 2),      // 0xEA
    undoc("SBC", Sbc, Immediate, 2),  // 0xEB
    op("CPX", Cpx, Absolute, 4),      // 0xEC
    op("SBC", Sbc, Absolute, 4),      // 0xED
    op("INC", Inc, Absolute, 6),      // 0xEE
    undoc("ISB", Isb, Absolute, 6),   // 0xEF
    op("BEQ", Beq, Relative, 2),      // 0xF0
    op("SBC", Sbc, IndirectY, 5),     // 0xF1
    jam(),                            // 0xF2
    undoc("ISB", Isb, IndirectY, 8),  // 0xF3
    nop(ZeroPageX, 4),                // 0xF4
    op("SBC", Sbc, ZeroPageX, 4),     // 0xF5
    op("INC", Inc, ZeroPageX, 6),     // 0xF6
    undoc("ISB", Isb, ZeroPageX, 6),  // 0xF7
    op("SED", Sed, Implicit, 2),      // 0xF8
    op("SBC", Sbc, AbsoluteY, 4),     // 0xF9
    nop(Implicit, 2),                 // 0xFA
    undoc("ISB", Isb, AbsoluteY, 7),  // 0xFB
    nop(AbsoluteX, 4),                // 0xFC
    op("SBC", Sbc, AbsoluteX, 4),     // 0xFD
    op("INC", Inc, AbsoluteX, 7),     // 0xFE
    undoc("ISB", Isb, AbsoluteX, 7),  // 0xFF
];

const fn documented_only(mut table: [OpcodeMetadata; 256]) -> [OpcodeMetadata; 256] {
    let mut i = 0;
    while i < table.len() {
        let entry = table[i];
        if entry.undocumented && !matches!(entry.operation, Nop) {
            table[i] = OpcodeMetadata {
                mnemonic: "NOP",
                operation: Nop,
                ..entry
            };
        }
        i += 1;
    }
    table
}

/// Selects the dispatch table for a configuration.
pub(crate) fn table_for(enable_undocumented_opcodes: bool) -> &'static [OpcodeMetadata; 256] {
    if enable_undocumented_opcodes {
        &OPCODE_TABLE
    } else {
        &DOCUMENTED_TABLE
    }
}
