use crate::vm::instructions::opcodes::*;
use crate::vm::{InstructionResult, Vm};

#[inline(always)]
pub fn dispatch_two_registers_two_immediates(
    opcode: u8,
    r_a: usize,
    r_b: usize,
    v_x: u64,
    v_y: u64,
    vm: &mut Vm,
) -> InstructionResult {
    match opcode {
        LOAD_IMM_JUMP_IND => {
            // the target is read before r_a is overwritten, r_a may equal r_b
            let address = vm.state.registers.get_u64(r_b).wrapping_add(v_y) as u32;
            vm.state.registers.set_u64(r_a, v_x);
            vm.context.djump(address)
        }
        _ => InstructionResult::Panic,
    }
}
