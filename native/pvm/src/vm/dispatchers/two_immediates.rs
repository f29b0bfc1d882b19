use crate::vm::instructions::opcodes::*;
use crate::vm::{InstructionResult, Vm};

#[inline(always)]
pub fn dispatch_two_immediates(opcode: u8, v_x: u64, v_y: u64, vm: &mut Vm) -> InstructionResult {
    match opcode {
        STORE_IMM_U8 => vm.store_value(v_x, v_y, 1),
        STORE_IMM_U16 => vm.store_value(v_x, v_y, 2),
        STORE_IMM_U32 => vm.store_value(v_x, v_y, 4),
        STORE_IMM_U64 => vm.store_value(v_x, v_y, 8),
        _ => InstructionResult::Panic,
    }
}
