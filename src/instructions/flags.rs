//! # Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV each set or clear a single status
//! bit and touch nothing else.

use crate::registers::Status;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_flag<M: MemoryBus>(cpu: &mut CPU<M>, flag: Status, value: bool) {
    cpu.regs.status.set(flag, value);
}
