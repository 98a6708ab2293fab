//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file, memory image and chip preset, then
//! runs a short burst of instructions and checks the invariants that must
//! hold for every opcode.

#![no_main]

use arbitrary::Arbitrary;
use core6502::{CpuConfig, FlatMemory, MemoryBus, CPU, DOCUMENTED_TABLE, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzPreset {
    Nmos,
    Documented,
    Ricoh2A03,
}

impl FuzzPreset {
    fn config(&self) -> CpuConfig {
        match self {
            FuzzPreset::Nmos => CpuConfig::nmos(),
            FuzzPreset::Documented => CpuConfig::documented(),
            FuzzPreset::Ricoh2A03 => CpuConfig::ricoh_2a03(),
        }
    }
}

/// Register file applied after reset
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory regions that instructions are likely to touch
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the reset target (opcodes and operands)
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Loaded at 0x4000 for absolute and indexed modes
    data: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    preset: FuzzPreset,
    registers: FuzzRegisters,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset, IRQ and NMI vectors
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.write(0xFFFA, 0x00);
    memory.write(0xFFFB, 0xA0);

    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.data);

    let mut cpu = CPU::with_config(memory, input.preset.config());
    cpu.set_a(input.registers.a);
    cpu.set_x(input.registers.x);
    cpu.set_y(input.registers.y);
    cpu.set_sp(input.registers.sp);
    cpu.set_status(input.registers.status);

    let steps = u64::from(input.steps % 32);
    let mut expected_cycles = 0u64;

    for _ in 0..steps {
        let pc = cpu.pc();
        let opcode = cpu.memory().peek(pc);
        let table = if cpu.config().enable_undocumented_opcodes {
            &OPCODE_TABLE
        } else {
            &DOCUMENTED_TABLE
        };
        expected_cycles += u64::from(table[opcode as usize].base_cycles);

        cpu.step();

        assert_eq!(cpu.status() & 0x20, 0x20, "bit 5 must stay set");
    }

    assert_eq!(cpu.instructions(), steps);
    assert_eq!(cpu.cycles(), expected_cycles);
});
