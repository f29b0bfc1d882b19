use crate::vm::instructions::opcodes::*;
use crate::vm::InstructionResult;

#[inline(always)]
pub fn dispatch_one_immediate(opcode: u8, v_x: u64) -> InstructionResult {
    match opcode {
        ECALLI => InstructionResult::Host { index: v_x as u32 },
        _ => InstructionResult::Panic,
    }
}
