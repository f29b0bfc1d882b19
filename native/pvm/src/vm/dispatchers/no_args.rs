use crate::vm::instructions::opcodes::*;
use crate::vm::InstructionResult;

/// `trap` and every unknown opcode panic.
#[inline(always)]
pub fn dispatch_no_args(opcode: u8) -> InstructionResult {
    match opcode {
        FALLTHROUGH => InstructionResult::Continue,
        _ => InstructionResult::Panic,
    }
}
