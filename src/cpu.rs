//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: a [`Registers`] value holding A, X, Y, PC, SP and the status byte
//! - **Memory bus**: the host-supplied [`MemoryBus`] implementation
//! - **Configuration**: the [`CpuConfig`] chosen at construction, which selects
//!   the dispatch table and whether BCD arithmetic is honored
//! - **Counters**: instructions executed and the base-cycle estimate
//! - **Hook**: an optional callback fired after every instruction
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction
//! - `exec(count)`: Execute `count` instructions
//!
//! Dispatch is total. Every one of the 256 opcode bytes has a handler, so
//! neither method can fail.

use std::fmt;

use log::{debug, trace};

use crate::addressing::read_word;
use crate::interrupts::Interrupt;
use crate::opcodes::{self, OpcodeMetadata};
use crate::registers::{Registers, Status};
use crate::{instructions, CpuConfig, MemoryBus};

/// Callback invoked after each executed instruction.
pub type Hook = Box<dyn FnMut()>;

/// 6502 CPU state and execution context.
///
/// The CPU struct owns the register file, the memory bus it was given, its
/// configuration and its counters. It is generic over the memory
/// implementation via the `MemoryBus` trait.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.flag_i(), true); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Register file
    pub(crate) regs: Registers,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Chip variant switches
    config: CpuConfig,

    /// Dispatch table selected from `config`
    table: &'static [OpcodeMetadata; 256],

    /// Base-cycle estimate of all instructions executed
    cycles: u64,

    /// Number of instructions executed
    instructions: u64,

    /// Post-instruction callback
    hook: Option<Hook>,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the default (NMOS) configuration and performs
    /// a reset.
    ///
    /// - Program counter (PC) is loaded from the reset vector at 0xFFFC/0xFFFD
    /// - Stack pointer (SP) is set to 0xFD
    /// - Status register has Interrupt Disable and the unused bit set
    /// - A, X and Y are zeroed
    /// - Both counters start at 0
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU for the given chip variant and performs a reset.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        debug!("creating CPU with {:?}", config);

        let mut cpu = Self {
            regs: Registers::new(),
            memory,
            config,
            table: opcodes::table_for(config.enable_undocumented_opcodes),
            cycles: 0,
            instructions: 0,
            hook: None,
        };
        cpu.reset();
        cpu
    }

    /// Resets the CPU.
    ///
    /// Loads PC from the reset vector, zeroes A, X and Y, sets SP to 0xFD
    /// and sets the Interrupt Disable and unused status bits. The other
    /// status bits keep their values. The counters are not cleared.
    pub fn reset(&mut self) {
        self.regs.pc = read_word(&mut self.memory, Interrupt::Reset.vector());
        self.regs.a = 0;
        self.regs.x = 0;
        self.regs.y = 0;
        self.regs.sp = 0xFD;
        self.regs
            .status
            .insert(Status::UNUSED | Status::INTERRUPT_DISABLE);

        debug!("reset: pc={:04X}", self.regs.pc);
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up the entry in the dispatch table
    /// 3. Resolve the operand and run the operation
    /// 4. Bump the instruction counter and add the base cycles
    /// 5. Fire the hook, if one is installed
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP instruction
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.step();
    ///
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert_eq!(cpu.cycles(), 2);
    /// assert_eq!(cpu.instructions(), 1);
    /// ```
    pub fn step(&mut self) {
        let pc = self.regs.pc;
        let opcode = self.memory.read(pc);
        let metadata = self.table[opcode as usize];

        trace!(
            "{:04X}  {:02X}  {:<3}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            pc,
            opcode,
            metadata.mnemonic,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.status.bits(),
            self.regs.sp
        );

        self.regs.pc = pc.wrapping_add(1);
        instructions::execute(self, &metadata);

        self.instructions += 1;
        self.cycles += metadata.base_cycles as u64;

        if let Some(hook) = self.hook.as_mut() {
            hook();
        }
    }

    /// Executes `count` instructions.
    ///
    /// The count is in instructions, not cycles. The batch always runs to
    /// completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xEA; 16]); // NOPs
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.exec(10);
    ///
    /// assert_eq!(cpu.instructions(), 10);
    /// assert_eq!(cpu.pc(), 0x800A);
    /// ```
    pub fn exec(&mut self, count: u32) {
        for _ in 0..count {
            self.step();
        }
    }

    /// Triggers a maskable interrupt request.
    ///
    /// The request is serviced immediately, regardless of the Interrupt
    /// Disable flag.
    pub fn irq(&mut self) {
        self.interrupt(Interrupt::Irq);
    }

    /// Services an IRQ only when the Interrupt Disable flag is clear.
    ///
    /// Returns `true` if the interrupt was taken.
    pub fn irq_if_enabled(&mut self) -> bool {
        if self.regs.status.contains(Status::INTERRUPT_DISABLE) {
            return false;
        }
        self.irq();
        true
    }

    /// Triggers a non-maskable interrupt.
    pub fn nmi(&mut self) {
        self.interrupt(Interrupt::Nmi);
    }

    /// Installs or removes the post-instruction hook.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use core6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xEA; 4]);
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_hook(Some(Box::new(move || counter.set(counter.get() + 1))));
    /// cpu.exec(3);
    ///
    /// assert_eq!(calls.get(), 3);
    /// ```
    pub fn set_hook(&mut self, hook: Option<Hook>) {
        self.hook = hook;
    }

    // ========== Stack ==========

    /// Pushes a byte at 0x0100 + SP and decrements SP.
    pub fn push8(&mut self, value: u8) {
        self.memory.write(self.regs.stack_addr(), value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Increments SP and reads the byte at 0x0100 + SP.
    pub fn pull8(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read(self.regs.stack_addr())
    }

    /// Pushes a word, high byte first.
    pub fn push16(&mut self, value: u16) {
        self.push8((value >> 8) as u8);
        self.push8(value as u8);
    }

    /// Pulls a word, low byte first.
    pub fn pull16(&mut self) -> u16 {
        let lo = self.pull8() as u16;
        let hi = self.pull8() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let cpu = CPU::new(mem);
    /// let status = cpu.status();
    ///
    /// // I flag set (bit 2), bit 5 always 1
    /// assert_eq!(status & 0b00100100, 0b00100100);
    /// ```
    pub fn status(&self) -> u8 {
        self.regs.status.bits()
    }

    /// Returns a copy of the full register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the total base-cycle estimate since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the number of instructions executed since construction.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Returns the configuration the CPU was built with.
    pub fn config(&self) -> CpuConfig {
        self.config
    }

    /// Borrows the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.status.contains(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.status.contains(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.status.contains(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.status.contains(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.status.contains(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.status.contains(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.status.contains(Status::CARRY)
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Sets the status register from a packed byte. Bit 5 is forced on.
    pub fn set_status(&mut self, value: u8) {
        self.regs.status = Status::from_byte(value);
    }

    /// Restores a register snapshot. Bit 5 of the status is forced on.
    pub fn set_registers(&mut self, registers: Registers) {
        self.regs = registers;
        self.regs.status.insert(Status::UNUSED);
    }

    // ========== Status Flag Setters ==========

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.status.set(Status::NEGATIVE, value);
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.status.set(Status::OVERFLOW, value);
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.status.set(Status::BREAK, value);
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.status.set(Status::DECIMAL, value);
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.status.set(Status::INTERRUPT_DISABLE, value);
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.status.set(Status::ZERO, value);
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.status.set(Status::CARRY, value);
    }

    /// True when ADC/SBC should take the BCD path.
    pub(crate) fn decimal_active(&self) -> bool {
        self.config.enable_decimal_mode && self.regs.status.contains(Status::DECIMAL)
    }
}

impl<M: MemoryBus> fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CPU")
            .field("regs", &self.regs)
            .field("config", &self.config)
            .field("cycles", &self.cycles)
            .field("instructions", &self.instructions)
            .field("hook", &self.hook.is_some())
            .finish_non_exhaustive()
    }
}
