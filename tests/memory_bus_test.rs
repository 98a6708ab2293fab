//! Memory bus tests
//!
//! Verifies the MemoryBus trait boundary: access ordering, side-effecting
//! reads, and the blanket implementations for references and boxes.

use core6502::{FlatMemory, MemoryBus, CPU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Read(u16),
    Write(u16, u8),
}

/// Flat RAM that records every access.
struct RecordingBus {
    ram: FlatMemory,
    log: Vec<Access>,
}

impl RecordingBus {
    fn new() -> Self {
        let mut ram = FlatMemory::new();
        ram.write(0xFFFC, 0x00);
        ram.write(0xFFFD, 0x80);
        Self {
            ram,
            log: Vec::new(),
        }
    }
}

impl MemoryBus for RecordingBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.log.push(Access::Read(addr));
        self.ram.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.log.push(Access::Write(addr, value));
        self.ram.write(addr, value);
    }
}

/// A status register that clears itself when read, like a UART.
struct LatchBus {
    ram: FlatMemory,
    latch: u8,
}

const LATCH_ADDR: u16 = 0x1700;

impl MemoryBus for LatchBus {
    fn read(&mut self, addr: u16) -> u8 {
        if addr == LATCH_ADDR {
            std::mem::take(&mut self.latch)
        } else {
            self.ram.read(addr)
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.ram.write(addr, value);
    }
}

#[test]
fn test_reset_reads_vector() {
    let cpu = CPU::new(RecordingBus::new());

    assert_eq!(
        cpu.memory().log,
        vec![Access::Read(0xFFFC), Access::Read(0xFFFD)]
    );
}

#[test]
fn test_read_modify_write_order() {
    let mut cpu = CPU::new(RecordingBus::new());
    cpu.memory_mut().ram.load(0x8000, &[0xE6, 0x10]); // INC $10
    cpu.memory_mut().ram.write(0x0010, 0x41);
    cpu.memory_mut().log.clear();

    cpu.step();

    assert_eq!(
        cpu.memory().log,
        vec![
            Access::Read(0x8000),
            Access::Read(0x8001),
            Access::Read(0x0010),
            Access::Write(0x0010, 0x42),
        ]
    );
}

#[test]
fn test_store_does_not_read_target() {
    let mut cpu = CPU::new(RecordingBus::new());
    cpu.memory_mut().ram.load(0x8000, &[0x8D, 0x00, 0x17]); // STA $1700
    cpu.memory_mut().log.clear();
    cpu.set_a(0x99);

    cpu.step();

    assert!(!cpu.memory().log.contains(&Access::Read(0x1700)));
    assert_eq!(cpu.memory().log.last(), Some(&Access::Write(0x1700, 0x99)));
}

#[test]
fn test_side_effecting_read_happens_once() {
    let mut ram = FlatMemory::new();
    ram.write(0xFFFC, 0x00);
    ram.write(0xFFFD, 0x80);
    ram.load(0x8000, &[0xAD, 0x00, 0x17, 0xAD, 0x00, 0x17]); // LDA $1700 twice

    let mut cpu = CPU::new(LatchBus { ram, latch: 0x81 });

    cpu.step();
    assert_eq!(cpu.a(), 0x81);

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_cpu_over_borrowed_memory() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &[0xA9, 0x7E, 0x85, 0x20]); // LDA #$7E; STA $20

    {
        let mut cpu = CPU::new(&mut memory);
        cpu.exec(2);
    }

    assert_eq!(memory.peek(0x0020), 0x7E);
}

#[test]
fn test_cpu_over_boxed_trait_object() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &[0xA2, 0x03]); // LDX #$03

    let bus: Box<dyn MemoryBus> = Box::new(memory);
    let mut cpu = CPU::new(bus);
    cpu.step();

    assert_eq!(cpu.x(), 0x03);
}

#[test]
fn test_into_memory_returns_bus() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &[0xA9, 0x11, 0x8D, 0x00, 0x03]); // LDA #$11; STA $0300

    let mut cpu = CPU::new(memory);
    cpu.exec(2);
    let memory = cpu.into_memory();

    assert_eq!(memory.peek(0x0300), 0x11);
}
