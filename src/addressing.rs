//! # Addressing Modes
//!
//! This module defines the addressing modes of the 6502 and the resolver
//! that turns an instruction's operand bytes into an effective operand.
//! Each mode determines how many bytes follow the opcode and how the
//! effective address is derived from them and from the index registers.

use crate::memory::MemoryBus;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (offset is relative to the next instruction)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40, read 16-bit address from that ZP location)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y)
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// The operand an instruction acts on once its addressing mode is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,

    /// The accumulator register.
    Accumulator,

    /// A memory location. For immediate mode this is the address of the
    /// immediate byte; for relative mode it is the branch target.
    Address(u16),
}

/// Resolves an addressing mode at `pc` (the byte after the opcode).
///
/// Returns the operand and the number of instruction bytes consumed. The
/// caller advances the program counter by that amount. Pointer and operand
/// bytes are fetched through `bus` in instruction order.
///
/// # Examples
///
/// ```
/// use core6502::{addressing::resolve, AddressingMode, FlatMemory, MemoryBus, Operand};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x0200, 0xF0); // operand byte
///
/// // $F0,X with X = 0x20 wraps to $10
/// let (operand, len) = resolve(AddressingMode::ZeroPageX, 0x0200, 0x20, 0, &mut mem);
/// assert_eq!(operand, Operand::Address(0x0010));
/// assert_eq!(len, 1);
/// ```
pub fn resolve<M: MemoryBus + ?Sized>(
    mode: AddressingMode,
    pc: u16,
    x: u8,
    y: u8,
    bus: &mut M,
) -> (Operand, u16) {
    let operand = match mode {
        AddressingMode::Implicit => Operand::Implied,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Address(pc),
        AddressingMode::ZeroPage => Operand::Address(bus.read(pc) as u16),
        AddressingMode::ZeroPageX => Operand::Address(bus.read(pc).wrapping_add(x) as u16),
        AddressingMode::ZeroPageY => Operand::Address(bus.read(pc).wrapping_add(y) as u16),
        AddressingMode::Relative => {
            let offset = bus.read(pc) as i8;
            let next = pc.wrapping_add(1);
            Operand::Address(next.wrapping_add_signed(offset as i16))
        }
        AddressingMode::Absolute => Operand::Address(read_word(bus, pc)),
        AddressingMode::AbsoluteX => {
            Operand::Address(read_word(bus, pc).wrapping_add(x as u16))
        }
        AddressingMode::AbsoluteY => {
            Operand::Address(read_word(bus, pc).wrapping_add(y as u16))
        }
        AddressingMode::Indirect => {
            let ptr = read_word(bus, pc);
            // The high byte never carries into the next page: JMP ($10FF)
            // reads $10FF and $1000.
            let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
            let lo = bus.read(ptr) as u16;
            let hi = bus.read(hi_addr) as u16;
            Operand::Address((hi << 8) | lo)
        }
        AddressingMode::IndirectX => {
            let zp = bus.read(pc).wrapping_add(x);
            Operand::Address(read_zero_page_word(bus, zp))
        }
        AddressingMode::IndirectY => {
            let zp = bus.read(pc);
            let base = read_zero_page_word(bus, zp);
            Operand::Address(base.wrapping_add(y as u16))
        }
    };

    (operand, mode.operand_len() as u16)
}

/// Reads a little-endian word at `addr`, `addr + 1`.
pub(crate) fn read_word<M: MemoryBus + ?Sized>(bus: &mut M, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi = bus.read(addr.wrapping_add(1)) as u16;
    (hi << 8) | lo
}

/// Reads a little-endian pointer from zero page, wrapping within page 0.
fn read_zero_page_word<M: MemoryBus + ?Sized>(bus: &mut M, zp: u8) -> u16 {
    let lo = bus.read(zp as u16) as u16;
    let hi = bus.read(zp.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}
