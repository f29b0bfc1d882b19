use crate::vm::instructions::opcodes::*;
use crate::vm::{InstructionResult, Vm};

#[inline(always)]
pub fn dispatch_reg_two_imm(
    opcode: u8,
    r_a: usize,
    v_x: u64,
    v_y: u64,
    vm: &mut Vm,
) -> InstructionResult {
    let address = vm.state.registers.get_u64(r_a).wrapping_add(v_x);

    match opcode {
        STORE_IMM_IND_U8 => vm.store_value(address, v_y, 1),
        STORE_IMM_IND_U16 => vm.store_value(address, v_y, 2),
        STORE_IMM_IND_U32 => vm.store_value(address, v_y, 4),
        STORE_IMM_IND_U64 => vm.store_value(address, v_y, 8),
        _ => InstructionResult::Panic,
    }
}
