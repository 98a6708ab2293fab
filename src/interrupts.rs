//! # Interrupts, Reset and BRK
//!
//! The 6502 enters its service routines through fixed vectors at the top of
//! the address space:
//!
//! | Source | Vector          | Pushes | Break bit in pushed status |
//! |--------|-----------------|--------|----------------------------|
//! | NMI    | 0xFFFA / 0xFFFB | PC, P  | clear                      |
//! | RESET  | 0xFFFC / 0xFFFD | -      | -                          |
//! | IRQ    | 0xFFFE / 0xFFFF | PC, P  | clear                      |
//! | BRK    | 0xFFFE / 0xFFFF | PC, P  | set                        |
//!
//! Interrupts are not queued. The host calls [`CPU::irq`] or [`CPU::nmi`]
//! between instructions and the entry sequence runs immediately.

use log::debug;

use crate::addressing::read_word;
use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// A source of control transfer through one of the hardware vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interrupt {
    /// Power-on or reset line.
    Reset,
    /// Maskable interrupt request.
    Irq,
    /// Non-maskable interrupt.
    Nmi,
    /// Software interrupt raised by the BRK instruction.
    Brk,
}

impl Interrupt {
    /// Address of the little-endian vector for this interrupt.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::Interrupt;
    ///
    /// assert_eq!(Interrupt::Nmi.vector(), 0xFFFA);
    /// assert_eq!(Interrupt::Reset.vector(), 0xFFFC);
    /// assert_eq!(Interrupt::Irq.vector(), Interrupt::Brk.vector());
    /// ```
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Nmi => 0xFFFA,
            Interrupt::Reset => 0xFFFC,
            Interrupt::Irq | Interrupt::Brk => 0xFFFE,
        }
    }

    /// Whether the status byte pushed on entry carries the Break bit.
    pub const fn sets_break(self) -> bool {
        matches!(self, Interrupt::Brk)
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Runs the entry sequence for `kind`.
    ///
    /// Reset reinitialises the registers (see [`CPU::reset`]). The other
    /// sources push `pc` and the status byte, set Interrupt Disable and
    /// load `pc` from the vector. For BRK, `pc` must already point past
    /// the padding byte.
    ///
    /// The Interrupt Disable flag is not consulted here, so an IRQ is
    /// always taken. Use [`CPU::irq_if_enabled`] to honour the mask.
    pub fn interrupt(&mut self, kind: Interrupt) {
        if kind == Interrupt::Reset {
            self.reset();
            return;
        }

        debug!(
            "{:?} at pc={:04X} sp={:02X} p={:02X}",
            kind,
            self.regs.pc,
            self.regs.sp,
            self.regs.status.bits()
        );

        self.push16(self.regs.pc);

        let mut pushed = self.regs.status | Status::UNUSED;
        pushed.set(Status::BREAK, kind.sets_break());
        self.push8(pushed.bits());

        self.regs.status.insert(Status::INTERRUPT_DISABLE);
        self.regs.pc = read_word(&mut self.memory, kind.vector());
    }
}
