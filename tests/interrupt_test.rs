//! Reset, IRQ, NMI, BRK and RTI tests
//!
//! Verifies the entry sequences (stack contents, vectors, flag updates) and
//! the return path through RTI.

use core6502::{FlatMemory, Interrupt, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000,
/// NMI vector at 0x9000 and IRQ/BRK vector at 0xA000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFA, 0x00);
    memory.write(0xFFFB, 0x90);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0xA0);
    CPU::new(memory)
}

// ========== Reset ==========

#[test]
fn test_reset_state() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x12);
    cpu.set_x(0x34);
    cpu.set_y(0x56);
    cpu.set_sp(0x00);
    cpu.set_pc(0x4321);
    cpu.set_flag_i(false);

    cpu.reset();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.pc(), 0x8000);
    assert!(cpu.flag_i());
}

#[test]
fn test_reset_does_not_clear_counters() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xEA, 0xEA, 0xEA]);
    cpu.exec(3);

    cpu.reset();

    assert_eq!(cpu.instructions(), 3);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_reset_reads_vector_again() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0xFFFC, 0x34);
    cpu.memory_mut().write(0xFFFD, 0x12);

    cpu.reset();

    assert_eq!(cpu.pc(), 0x1234);
}

// ========== BRK / RTI ==========

#[test]
fn test_brk_entry() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x00, 0xFF]); // BRK + padding
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.sp(), 0xFA);
    assert!(cpu.flag_i());
    assert_eq!(cpu.cycles(), 7);

    // Return address is the opcode address + 2
    assert_eq!(cpu.memory().peek(0x01FD), 0x80);
    assert_eq!(cpu.memory().peek(0x01FC), 0x02);

    // Pushed status: C, B and bit 5, I still clear at push time
    assert_eq!(cpu.memory().peek(0x01FB), 0x31);
}

#[test]
fn test_brk_then_rti_round_trip() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x00, 0xFF, 0xEA]); // BRK; NOP
    cpu.memory_mut().write(0xA000, 0x40); // RTI
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);
    cpu.set_flag_n(true);

    cpu.step(); // BRK
    cpu.step(); // RTI

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_i());
}

#[test]
fn test_rti_forces_unused_bit() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x40); // RTI

    // Hand-built frame: status 0x00, return to 0x1234
    cpu.push16(0x1234);
    cpu.push8(0x00);

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.status(), 0x20);
}

// ========== IRQ / NMI ==========

#[test]
fn test_irq_entry_pushes_break_clear() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x8123);
    cpu.set_flag_i(false);

    cpu.irq();

    assert_eq!(cpu.pc(), 0xA000);
    assert!(cpu.flag_i());
    assert_eq!(cpu.memory().peek(0x01FD), 0x81);
    assert_eq!(cpu.memory().peek(0x01FC), 0x23);

    let pushed = cpu.memory().peek(0x01FB);
    assert_eq!(pushed & 0x10, 0x00);
    assert_eq!(pushed & 0x20, 0x20);
}

#[test]
fn test_irq_is_unconditional() {
    let mut cpu = setup_cpu();
    assert!(cpu.flag_i());

    cpu.irq();

    assert_eq!(cpu.pc(), 0xA000);
}

#[test]
fn test_irq_if_enabled() {
    let mut cpu = setup_cpu();

    assert!(!cpu.irq_if_enabled());
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);

    cpu.set_flag_i(false);
    assert!(cpu.irq_if_enabled());
    assert_eq!(cpu.pc(), 0xA000);
}

#[test]
fn test_nmi_entry() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x8456);

    cpu.nmi();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFA);
    assert!(cpu.flag_i());
    assert_eq!(cpu.memory().peek(0x01FB) & 0x10, 0x00);
}

#[test]
fn test_irq_handler_returns_to_interrupted_code() {
    let mut cpu = setup_cpu();

    // CLI; NOP; NOP
    cpu.memory_mut().load(0x8000, &[0x58, 0xEA, 0xEA]);
    // Handler: INX; RTI
    cpu.memory_mut().load(0xA000, &[0xE8, 0x40]);

    cpu.step(); // CLI
    cpu.irq();
    cpu.exec(2); // INX; RTI

    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.pc(), 0x8001);
    assert!(!cpu.flag_i());
}

#[test]
fn test_interrupt_vectors() {
    assert_eq!(Interrupt::Nmi.vector(), 0xFFFA);
    assert_eq!(Interrupt::Reset.vector(), 0xFFFC);
    assert_eq!(Interrupt::Irq.vector(), 0xFFFE);
    assert_eq!(Interrupt::Brk.vector(), 0xFFFE);
}

#[test]
fn test_interrupts_do_not_count_as_instructions() {
    let mut cpu = setup_cpu();

    cpu.irq();
    cpu.nmi();

    assert_eq!(cpu.instructions(), 0);
    assert_eq!(cpu.cycles(), 0);
}
