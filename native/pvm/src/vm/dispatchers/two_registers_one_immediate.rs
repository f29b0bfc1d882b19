use crate::vm::instructions::opcodes::*;
use crate::vm::ops::{bit, compare, math, shift};
use crate::vm::{InstructionResult, Vm};

#[inline(always)]
pub fn dispatch_two_registers_one_immediate(
    opcode: u8,
    r_a: usize,
    r_b: usize,
    v_x: u64,
    vm: &mut Vm,
) -> InstructionResult {
    let w_a = vm.state.registers.get_u64(r_a);
    let w_b = vm.state.registers.get_u64(r_b);
    let address = w_b.wrapping_add(v_x);

    let result = match opcode {
        STORE_IND_U8 => return vm.store_register(address, r_a, 1),
        STORE_IND_U16 => return vm.store_register(address, r_a, 2),
        STORE_IND_U32 => return vm.store_register(address, r_a, 4),
        STORE_IND_U64 => return vm.store_register(address, r_a, 8),
        LOAD_IND_U8 => return vm.load_register(r_a, address, 1, false),
        LOAD_IND_I8 => return vm.load_register(r_a, address, 1, true),
        LOAD_IND_U16 => return vm.load_register(r_a, address, 2, false),
        LOAD_IND_I16 => return vm.load_register(r_a, address, 2, true),
        LOAD_IND_U32 => return vm.load_register(r_a, address, 4, false),
        LOAD_IND_I32 => return vm.load_register(r_a, address, 4, true),
        LOAD_IND_U64 => return vm.load_register(r_a, address, 8, false),

        ADD_IMM_32 => math::add_32(w_b, v_x),
        MUL_IMM_32 => math::mul_32(w_b, v_x),
        NEG_ADD_IMM_32 => math::sub_32(v_x, w_b),
        ADD_IMM_64 => math::add_64(w_b, v_x),
        MUL_IMM_64 => math::mul_64(w_b, v_x),
        NEG_ADD_IMM_64 => math::sub_64(v_x, w_b),

        AND_IMM => bit::and(w_b, v_x),
        XOR_IMM => bit::xor(w_b, v_x),
        OR_IMM => bit::or(w_b, v_x),

        SET_LT_U_IMM => compare::set_lt_u(w_b, v_x),
        SET_LT_S_IMM => compare::set_lt_s(w_b, v_x),
        SET_GT_U_IMM => compare::set_gt_u(w_b, v_x),
        SET_GT_S_IMM => compare::set_gt_s(w_b, v_x),
        CMOV_IZ_IMM => compare::cmov_iz(w_a, v_x, w_b),
        CMOV_NZ_IMM => compare::cmov_nz(w_a, v_x, w_b),

        SHLO_L_IMM_32 => shift::shlo_l_32(w_b, v_x),
        SHLO_R_IMM_32 => shift::shlo_r_32(w_b, v_x),
        SHAR_R_IMM_32 => shift::shar_r_32(w_b, v_x),
        SHLO_L_IMM_ALT_32 => shift::shlo_l_32(v_x, w_b),
        SHLO_R_IMM_ALT_32 => shift::shlo_r_32(v_x, w_b),
        SHAR_R_IMM_ALT_32 => shift::shar_r_32(v_x, w_b),
        SHLO_L_IMM_64 => shift::shlo_l_64(w_b, v_x),
        SHLO_R_IMM_64 => shift::shlo_r_64(w_b, v_x),
        SHAR_R_IMM_64 => shift::shar_r_64(w_b, v_x),
        SHLO_L_IMM_ALT_64 => shift::shlo_l_64(v_x, w_b),
        SHLO_R_IMM_ALT_64 => shift::shlo_r_64(v_x, w_b),
        SHAR_R_IMM_ALT_64 => shift::shar_r_64(v_x, w_b),
        ROT_R_64_IMM => shift::rot_r_64(w_b, v_x),
        ROT_R_64_IMM_ALT => shift::rot_r_64(v_x, w_b),
        ROT_R_32_IMM => shift::rot_r_32(w_b, v_x),
        ROT_R_32_IMM_ALT => shift::rot_r_32(v_x, w_b),

        _ => return InstructionResult::Panic,
    };

    vm.state.registers.set_u64(r_a, result);
    InstructionResult::Continue
}
