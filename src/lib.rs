//! # 6502 CPU Core
//!
//! An instruction-level emulator of the MOS Technology 6502, meant to be
//! embedded in a larger machine emulator that supplies the memory map,
//! peripherals and the run loop.
//!
//! The crate provides the register file, a trait-based memory bus
//! abstraction, the addressing-mode resolver, the flag engine (including
//! BCD arithmetic), a table-driven opcode dispatcher and the reset /
//! interrupt / stack semantics of the chip.
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$42
//! memory.write(0x8000, 0xA9);
//! memory.write(0x8001, 0x42);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! cpu.step();
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//! ```
//!
//! ## Chip Variants
//!
//! Decimal mode and the undocumented opcodes are selected per CPU through
//! [`CpuConfig`]:
//!
//! ```rust
//! use core6502::{CpuConfig, CPU, FlatMemory};
//!
//! // The NES CPU has no BCD support
//! let cpu = CPU::with_config(FlatMemory::new(), CpuConfig::ricoh_2a03());
//! assert!(!cpu.config().enable_decimal_mode);
//!
//! let config: CpuConfig = "documented".parse().unwrap();
//! assert!(!config.enable_undocumented_opcodes);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `registers` - Register file and status flags
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `addressing` - Addressing modes and the effective address resolver
//! - `flags` - Flag computation and BCD arithmetic
//! - `opcodes` - Opcode dispatch tables
//! - `interrupts` - Reset / IRQ / NMI / BRK entry sequences
//! - `config` - Chip variant configuration

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod flags;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::{ConfigError, CpuConfig};
pub use cpu::CPU;
pub use interrupts::Interrupt;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, DOCUMENTED_TABLE, OPCODE_TABLE};
pub use registers::{Registers, Status};
