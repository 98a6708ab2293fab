//! Tests for the load/store, logic, compare, increment/decrement, transfer
//! and flag instructions.

use core6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Load / Store ==========

#[test]
fn test_lda_zero_flag() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x00]);
    cpu.set_a(0x55);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_ldx_ldy_immediate() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA2, 0x80, 0xA0, 0x01]);

    cpu.exec(2);

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.y(), 0x01);
    assert!(!cpu.flag_n());
}

#[test]
fn test_stores_do_not_touch_flags() {
    let mut cpu = setup_cpu();
    // STA $10; STX $11; STY $12
    cpu.memory_mut()
        .load(0x8000, &[0x85, 0x10, 0x86, 0x11, 0x84, 0x12]);
    cpu.set_a(0x00);
    cpu.set_x(0x80);
    cpu.set_y(0x7F);
    cpu.set_status(0x00);

    cpu.exec(3);

    assert_eq!(cpu.memory().peek(0x0010), 0x00);
    assert_eq!(cpu.memory().peek(0x0011), 0x80);
    assert_eq!(cpu.memory().peek(0x0012), 0x7F);
    assert_eq!(cpu.status(), 0x20);
}

// ========== Logic ==========

#[test]
fn test_and_ora_eor() {
    let mut cpu = setup_cpu();
    // AND #$0F; ORA #$80; EOR #$FF
    cpu.memory_mut()
        .load(0x8000, &[0x29, 0x0F, 0x09, 0x80, 0x49, 0xFF]);
    cpu.set_a(0x3C);

    cpu.step();
    assert_eq!(cpu.a(), 0x0C);
    assert!(!cpu.flag_n());

    cpu.step();
    assert_eq!(cpu.a(), 0x8C);
    assert!(cpu.flag_n());

    cpu.step();
    assert_eq!(cpu.a(), 0x73);
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_bit_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x2C, 0x00, 0x20]); // BIT $2000
    cpu.memory_mut().write(0x2000, 0x40);
    cpu.set_a(0x40);

    cpu.step();

    assert!(!cpu.flag_z());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 4);
}

// ========== Compare ==========

#[test]
fn test_cmp_cpx_cpy() {
    let mut cpu = setup_cpu();
    // CMP #$10; CPX #$20; CPY #$30
    cpu.memory_mut()
        .load(0x8000, &[0xC9, 0x10, 0xE0, 0x20, 0xC0, 0x30]);
    cpu.set_a(0x10);
    cpu.set_x(0x10);
    cpu.set_y(0x40);

    cpu.step();
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());

    cpu.step();
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());

    cpu.step();
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

// ========== Increment / Decrement ==========

#[test]
fn test_inc_dec_memory_wrap() {
    let mut cpu = setup_cpu();
    // INC $10; DEC $11
    cpu.memory_mut().load(0x8000, &[0xE6, 0x10, 0xC6, 0x11]);
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.memory_mut().write(0x0011, 0x00);

    cpu.step();
    assert_eq!(cpu.memory().peek(0x0010), 0x00);
    assert!(cpu.flag_z());

    cpu.step();
    assert_eq!(cpu.memory().peek(0x0011), 0xFF);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 10);
}

#[test]
fn test_index_register_increments() {
    let mut cpu = setup_cpu();
    // INX; INY; DEX; DEY; DEY
    cpu.memory_mut()
        .load(0x8000, &[0xE8, 0xC8, 0xCA, 0x88, 0x88]);
    cpu.set_x(0xFF);
    cpu.set_y(0x00);

    cpu.step();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());

    cpu.step();
    assert_eq!(cpu.y(), 0x01);

    cpu.step();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());

    cpu.exec(2);
    assert_eq!(cpu.y(), 0xFF);
}

// ========== Transfers ==========

#[test]
fn test_register_transfers() {
    let mut cpu = setup_cpu();
    // TAX; TAY; LDA #$00; TXA; TYA
    cpu.memory_mut()
        .load(0x8000, &[0xAA, 0xA8, 0xA9, 0x00, 0x8A, 0x98]);
    cpu.set_a(0x85);

    cpu.exec(2);
    assert_eq!(cpu.x(), 0x85);
    assert_eq!(cpu.y(), 0x85);

    cpu.step();
    assert!(cpu.flag_z());

    cpu.step();
    assert_eq!(cpu.a(), 0x85);
    assert!(cpu.flag_n());

    cpu.step();
    assert_eq!(cpu.a(), 0x85);
}

// ========== Flags ==========

#[test]
fn test_flag_instructions() {
    let mut cpu = setup_cpu();
    // SEC; SED; CLI; CLC; CLD; SEI
    cpu.memory_mut()
        .load(0x8000, &[0x38, 0xF8, 0x58, 0x18, 0xD8, 0x78]);

    cpu.exec(3);
    assert!(cpu.flag_c());
    assert!(cpu.flag_d());
    assert!(!cpu.flag_i());

    cpu.exec(3);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_d());
    assert!(cpu.flag_i());
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xB8); // CLV
    cpu.set_flag_v(true);

    cpu.step();

    assert!(!cpu.flag_v());
}
