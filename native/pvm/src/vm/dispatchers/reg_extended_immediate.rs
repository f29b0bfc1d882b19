use crate::vm::instructions::opcodes::*;
use crate::vm::{InstructionResult, Vm};

#[inline(always)]
pub fn dispatch_reg_extended_immediate(
    opcode: u8,
    r_a: usize,
    v_x: u64,
    vm: &mut Vm,
) -> InstructionResult {
    match opcode {
        LOAD_IMM_64 => {
            vm.state.registers.set_u64(r_a, v_x);
            InstructionResult::Continue
        }
        _ => InstructionResult::Panic,
    }
}
