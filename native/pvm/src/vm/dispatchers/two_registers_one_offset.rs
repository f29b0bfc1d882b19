use crate::vm::instructions::opcodes::*;
use crate::vm::{InstructionResult, Vm};

#[inline(always)]
pub fn dispatch_two_registers_one_offset(
    opcode: u8,
    r_a: usize,
    r_b: usize,
    target: usize,
    vm: &Vm,
) -> InstructionResult {
    let w_a = vm.state.registers.get_u64(r_a);
    let w_b = vm.state.registers.get_u64(r_b);
    let context = &vm.context;

    match opcode {
        BRANCH_EQ => context.branch(target, w_a == w_b),
        BRANCH_NE => context.branch(target, w_a != w_b),
        BRANCH_LT_U => context.branch(target, w_a < w_b),
        BRANCH_LT_S => context.branch(target, (w_a as i64) < (w_b as i64)),
        BRANCH_GE_U => context.branch(target, w_a >= w_b),
        BRANCH_GE_S => context.branch(target, (w_a as i64) >= (w_b as i64)),
        _ => InstructionResult::Panic,
    }
}
