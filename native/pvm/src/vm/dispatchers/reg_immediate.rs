use crate::vm::instructions::opcodes::*;
use crate::vm::{InstructionResult, Vm};

#[inline(always)]
pub fn dispatch_reg_immediate(opcode: u8, r_a: usize, v_x: u64, vm: &mut Vm) -> InstructionResult {
    match opcode {
        JUMP_IND => {
            let w_a = vm.state.registers.get_u64(r_a);
            vm.context.djump(w_a.wrapping_add(v_x) as u32)
        }
        LOAD_IMM => {
            vm.state.registers.set_u64(r_a, v_x);
            InstructionResult::Continue
        }
        LOAD_U8 => vm.load_register(r_a, v_x, 1, false),
        LOAD_I8 => vm.load_register(r_a, v_x, 1, true),
        LOAD_U16 => vm.load_register(r_a, v_x, 2, false),
        LOAD_I16 => vm.load_register(r_a, v_x, 2, true),
        LOAD_U32 => vm.load_register(r_a, v_x, 4, false),
        LOAD_I32 => vm.load_register(r_a, v_x, 4, true),
        LOAD_U64 => vm.load_register(r_a, v_x, 8, false),
        STORE_U8 => vm.store_register(v_x, r_a, 1),
        STORE_U16 => vm.store_register(v_x, r_a, 2),
        STORE_U32 => vm.store_register(v_x, r_a, 4),
        STORE_U64 => vm.store_register(v_x, r_a, 8),
        _ => InstructionResult::Panic,
    }
}
