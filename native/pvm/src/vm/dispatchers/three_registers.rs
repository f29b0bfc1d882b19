use crate::vm::instructions::opcodes::*;
use crate::vm::ops::{bit, compare, math, shift};
use crate::vm::{InstructionResult, Vm};

#[inline(always)]
pub fn dispatch_three_registers(
    opcode: u8,
    r_a: usize,
    r_b: usize,
    r_d: usize,
    vm: &mut Vm,
) -> InstructionResult {
    let registers = &mut vm.state.registers;
    let w_a = registers.get_u64(r_a);
    let w_b = registers.get_u64(r_b);

    let result = match opcode {
        ADD_32 => math::add_32(w_a, w_b),
        SUB_32 => math::sub_32(w_a, w_b),
        MUL_32 => math::mul_32(w_a, w_b),
        DIV_U_32 => math::div_u_32(w_a, w_b),
        DIV_S_32 => math::div_s_32(w_a, w_b),
        REM_U_32 => math::rem_u_32(w_a, w_b),
        REM_S_32 => math::rem_s_32(w_a, w_b),
        ADD_64 => math::add_64(w_a, w_b),
        SUB_64 => math::sub_64(w_a, w_b),
        MUL_64 => math::mul_64(w_a, w_b),
        DIV_U_64 => math::div_u_64(w_a, w_b),
        DIV_S_64 => math::div_s_64(w_a, w_b),
        REM_U_64 => math::rem_u_64(w_a, w_b),
        REM_S_64 => math::rem_s_64(w_a, w_b),
        MUL_UPPER_S_S => math::mul_upper_s_s(w_a, w_b),
        MUL_UPPER_U_U => math::mul_upper_u_u(w_a, w_b),
        MUL_UPPER_S_U => math::mul_upper_s_u(w_a, w_b),

        SHLO_L_32 => shift::shlo_l_32(w_a, w_b),
        SHLO_R_32 => shift::shlo_r_32(w_a, w_b),
        SHAR_R_32 => shift::shar_r_32(w_a, w_b),
        SHLO_L_64 => shift::shlo_l_64(w_a, w_b),
        SHLO_R_64 => shift::shlo_r_64(w_a, w_b),
        SHAR_R_64 => shift::shar_r_64(w_a, w_b),
        ROT_L_64 => shift::rot_l_64(w_a, w_b),
        ROT_L_32 => shift::rot_l_32(w_a, w_b),
        ROT_R_64 => shift::rot_r_64(w_a, w_b),
        ROT_R_32 => shift::rot_r_32(w_a, w_b),

        AND => bit::and(w_a, w_b),
        XOR => bit::xor(w_a, w_b),
        OR => bit::or(w_a, w_b),
        AND_INV => bit::and_inv(w_a, w_b),
        OR_INV => bit::or_inv(w_a, w_b),
        XNOR => bit::xnor(w_a, w_b),

        SET_LT_U => compare::set_lt_u(w_a, w_b),
        SET_LT_S => compare::set_lt_s(w_a, w_b),
        CMOV_IZ => compare::cmov_iz(registers.get_u64(r_d), w_a, w_b),
        CMOV_NZ => compare::cmov_nz(registers.get_u64(r_d), w_a, w_b),
        MAX => compare::max(w_a, w_b),
        MAX_U => compare::max_u(w_a, w_b),
        MIN => compare::min(w_a, w_b),
        MIN_U => compare::min_u(w_a, w_b),

        _ => return InstructionResult::Panic,
    };

    registers.set_u64(r_d, result);
    InstructionResult::Continue
}
