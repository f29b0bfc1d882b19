use crate::vm::instructions::opcodes::*;
use crate::vm::{InstructionResult, VmContext};

#[inline(always)]
pub fn dispatch_one_offset(opcode: u8, target: usize, context: &VmContext) -> InstructionResult {
    match opcode {
        JUMP => context.branch(target, true),
        _ => InstructionResult::Panic,
    }
}
