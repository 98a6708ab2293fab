//! # Branch Instructions
//!
//! Each conditional branch tests one status flag against a fixed polarity:
//!
//! | Taken when | Clear | Set |
//! |------------|-------|-----|
//! | Carry      | BCC   | BCS |
//! | Zero       | BNE   | BEQ |
//! | Negative   | BPL   | BMI |
//! | Overflow   | BVC   | BVS |
//!
//! The resolver has already turned the signed offset into the target
//! address, so a taken branch simply loads it into PC.

use crate::addressing::Operand;
use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// Branches to the resolved target if `flag` equals `when_set`.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    flag: Status,
    when_set: bool,
) {
    if cpu.regs.status.contains(flag) != when_set {
        return;
    }

    if let Operand::Address(target) = operand {
        cpu.regs.pc = target;
    }
}
