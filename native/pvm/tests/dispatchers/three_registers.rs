use pvm::vm::dispatchers::three_registers::dispatch_three_registers;
use pvm::vm::instructions::opcodes::*;
use pvm::vm::InstructionResult;

use crate::vm_with_registers;

/// Runs `opcode` with r1 = `w_a`, r2 = `w_b`, r3 = `w_d` and returns the new r3.
fn apply_with(opcode: u8, w_a: u64, w_b: u64, w_d: u64) -> u64 {
    let mut vm = vm_with_registers(&[(1, w_a), (2, w_b), (3, w_d)]);
    assert_eq!(
        dispatch_three_registers(opcode, 1, 2, 3, &mut vm),
        InstructionResult::Continue
    );
    vm.registers().get_u64(3)
}

fn apply(opcode: u8, w_a: u64, w_b: u64) -> u64 {
    apply_with(opcode, w_a, w_b, 0)
}

const MINUS_ONE: u64 = u64::MAX;

mod arithmetic_32 {
    use super::*;

    #[test]
    fn test_add_sub_mul_sign_extend() {
        assert_eq!(apply(ADD_32, 0x7FFF_FFFF, 1), 0xFFFF_FFFF_8000_0000);
        assert_eq!(apply(SUB_32, 0, 1), MINUS_ONE);
        assert_eq!(apply(MUL_32, 0x1_0000, 0x1_0000), 0);
        assert_eq!(apply(MUL_32, 0x4000_0000, 2), 0xFFFF_FFFF_8000_0000);
    }

    #[test]
    fn test_division() {
        assert_eq!(apply(DIV_U_32, 7, 2), 3);
        assert_eq!(apply(DIV_U_32, 7, 0), MINUS_ONE);
        assert_eq!(apply(DIV_U_32, 0xFFFF_FFFE, 1), 0xFFFF_FFFF_FFFF_FFFE);
        assert_eq!(apply(DIV_S_32, 0xFFFF_FFF9, 2), 0xFFFF_FFFF_FFFF_FFFD);
        assert_eq!(apply(DIV_S_32, 7, 0), MINUS_ONE);
        assert_eq!(apply(DIV_S_32, 0x8000_0000, 0xFFFF_FFFF), 0xFFFF_FFFF_8000_0000);
    }

    #[test]
    fn test_remainder() {
        assert_eq!(apply(REM_U_32, 7, 2), 1);
        assert_eq!(apply(REM_U_32, 7, 0), 7);
        assert_eq!(apply(REM_S_32, 0xFFFF_FFF9, 2), MINUS_ONE);
        assert_eq!(apply(REM_S_32, 0xFFFF_FFF9, 0), 0xFFFF_FFFF_FFFF_FFF9);
        assert_eq!(apply(REM_S_32, 0x8000_0000, 0xFFFF_FFFF), 0);
    }
}

mod arithmetic_64 {
    use super::*;

    #[test]
    fn test_add_sub_mul_wrap() {
        assert_eq!(apply(ADD_64, MINUS_ONE, 2), 1);
        assert_eq!(apply(SUB_64, 0, 1), MINUS_ONE);
        assert_eq!(apply(MUL_64, 1 << 63, 2), 0);
    }

    #[test]
    fn test_division() {
        assert_eq!(apply(DIV_U_64, 9, 0), MINUS_ONE);
        assert_eq!(apply(DIV_U_64, MINUS_ONE, 2), MINUS_ONE >> 1);
        assert_eq!(apply(DIV_S_64, (-9i64) as u64, 2), (-4i64) as u64);
        assert_eq!(apply(DIV_S_64, 1 << 63, MINUS_ONE), 1 << 63);
        assert_eq!(apply(REM_U_64, 9, 0), 9);
        assert_eq!(apply(REM_S_64, (-9i64) as u64, 2), MINUS_ONE);
        assert_eq!(apply(REM_S_64, 1 << 63, MINUS_ONE), 0);
    }

    #[test]
    fn test_upper_multiplication() {
        assert_eq!(apply(MUL_UPPER_U_U, MINUS_ONE, MINUS_ONE), MINUS_ONE - 1);
        assert_eq!(apply(MUL_UPPER_S_S, MINUS_ONE, MINUS_ONE), 0);
        assert_eq!(apply(MUL_UPPER_S_U, MINUS_ONE, 2), MINUS_ONE);
    }
}

mod shifts {
    use super::*;

    #[test]
    fn test_32_bit_shifts() {
        assert_eq!(apply(SHLO_L_32, 1, 31), 0xFFFF_FFFF_8000_0000);
        assert_eq!(apply(SHLO_L_32, 1, 32), 1);
        assert_eq!(apply(SHLO_R_32, 0xFFFF_FFFF_8000_0000, 31), 1);
        assert_eq!(apply(SHAR_R_32, 0x8000_0000, 1), 0xFFFF_FFFF_C000_0000);
    }

    #[test]
    fn test_64_bit_shifts() {
        assert_eq!(apply(SHLO_L_64, 1, 63), 1 << 63);
        assert_eq!(apply(SHLO_L_64, 1, 64), 1);
        assert_eq!(apply(SHLO_R_64, 1 << 63, 63), 1);
        assert_eq!(apply(SHAR_R_64, 1 << 63, 63), MINUS_ONE);
    }

    #[test]
    fn test_rotations() {
        assert_eq!(apply(ROT_L_64, 1 << 63, 1), 1);
        assert_eq!(apply(ROT_R_64, 1, 1), 1 << 63);
        assert_eq!(apply(ROT_L_32, 0x8000_0000, 1), 1);
        assert_eq!(apply(ROT_R_32, 1, 1), 0xFFFF_FFFF_8000_0000);
    }
}

mod logic {
    use super::*;

    #[test]
    fn test_bitwise() {
        assert_eq!(apply(AND, 0b1100, 0b1010), 0b1000);
        assert_eq!(apply(OR, 0b1100, 0b1010), 0b1110);
        assert_eq!(apply(XOR, 0b1100, 0b1010), 0b0110);
        assert_eq!(apply(AND_INV, 0b1100, 0b1010), 0b0100);
        assert_eq!(apply(OR_INV, 0, MINUS_ONE), 0);
        assert_eq!(apply(XNOR, 0b1100, 0b1010), !0b0110);
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(apply(SET_LT_U, 1, MINUS_ONE), 1);
        assert_eq!(apply(SET_LT_S, 1, MINUS_ONE), 0);
        assert_eq!(apply(MAX, 1, MINUS_ONE), 1);
        assert_eq!(apply(MAX_U, 1, MINUS_ONE), MINUS_ONE);
        assert_eq!(apply(MIN, 1, MINUS_ONE), MINUS_ONE);
        assert_eq!(apply(MIN_U, 1, MINUS_ONE), 1);
    }

    #[test]
    fn test_conditional_moves_keep_destination() {
        assert_eq!(apply_with(CMOV_IZ, 5, 0, 9), 5);
        assert_eq!(apply_with(CMOV_IZ, 5, 1, 9), 9);
        assert_eq!(apply_with(CMOV_NZ, 5, 1, 9), 5);
        assert_eq!(apply_with(CMOV_NZ, 5, 0, 9), 9);
    }
}

#[test]
fn test_destination_may_alias_source() {
    let mut vm = vm_with_registers(&[(1, 20), (2, 22)]);

    dispatch_three_registers(ADD_64, 1, 2, 1, &mut vm);

    assert_eq!(vm.registers().get_u64(1), 42);
}

#[test]
fn test_unknown_opcode_panics() {
    let mut vm = vm_with_registers(&[]);
    assert_eq!(
        dispatch_three_registers(TRAP, 1, 2, 3, &mut vm),
        InstructionResult::Panic
    );
}
