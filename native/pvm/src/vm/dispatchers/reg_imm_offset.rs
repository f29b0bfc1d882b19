use crate::vm::instructions::opcodes::*;
use crate::vm::{InstructionResult, Vm};

#[inline(always)]
pub fn dispatch_reg_immediate_offset(
    opcode: u8,
    r_a: usize,
    v_x: u64,
    target: usize,
    vm: &mut Vm,
) -> InstructionResult {
    let w_a = vm.state.registers.get_u64(r_a);
    let context = &vm.context;

    match opcode {
        LOAD_IMM_JUMP => {
            vm.state.registers.set_u64(r_a, v_x);
            vm.context.branch(target, true)
        }
        BRANCH_EQ_IMM => context.branch(target, w_a == v_x),
        BRANCH_NE_IMM => context.branch(target, w_a != v_x),
        BRANCH_LT_U_IMM => context.branch(target, w_a < v_x),
        BRANCH_LE_U_IMM => context.branch(target, w_a <= v_x),
        BRANCH_GE_U_IMM => context.branch(target, w_a >= v_x),
        BRANCH_GT_U_IMM => context.branch(target, w_a > v_x),
        BRANCH_LT_S_IMM => context.branch(target, (w_a as i64) < (v_x as i64)),
        BRANCH_LE_S_IMM => context.branch(target, (w_a as i64) <= (v_x as i64)),
        BRANCH_GE_S_IMM => context.branch(target, (w_a as i64) >= (v_x as i64)),
        BRANCH_GT_S_IMM => context.branch(target, (w_a as i64) > (v_x as i64)),
        _ => InstructionResult::Panic,
    }
}
