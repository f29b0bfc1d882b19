use pvm::core::MemoryIndex;
use pvm::vm::dispatchers::two_registers_one_immediate::dispatch_two_registers_one_immediate;
use pvm::vm::instructions::opcodes::*;
use pvm::vm::test_builder::TEST_ADDR;
use pvm::vm::InstructionResult;

use crate::vm_with_registers;

/// Runs `opcode` with r1 = `w_a`, r2 = `w_b` and returns the new r1.
fn apply(opcode: u8, w_a: u64, w_b: u64, v_x: u64) -> u64 {
    let mut vm = vm_with_registers(&[(1, w_a), (2, w_b)]);
    assert_eq!(
        dispatch_two_registers_one_immediate(opcode, 1, 2, v_x, &mut vm),
        InstructionResult::Continue
    );
    vm.registers().get_u64(1)
}

mod memory_operations {
    use super::*;

    #[test]
    fn test_store_ind_then_load_ind() {
        let mut vm = vm_with_registers(&[(1, 0xFFFF_FFFF_FFFF_FF85), (2, TEST_ADDR as u64)]);

        let stored = dispatch_two_registers_one_immediate(STORE_IND_U16, 1, 2, 4, &mut vm);
        assert_eq!(stored, InstructionResult::Continue);

        dispatch_two_registers_one_immediate(LOAD_IND_U8, 3, 2, 4, &mut vm);
        dispatch_two_registers_one_immediate(LOAD_IND_I16, 4, 2, 4, &mut vm);
        dispatch_two_registers_one_immediate(LOAD_IND_U32, 5, 2, 4, &mut vm);

        assert_eq!(vm.registers().get_u64(3), 0x85);
        assert_eq!(vm.registers().get_u64(4), 0xFFFF_FFFF_FFFF_FF85);
        assert_eq!(vm.registers().get_u64(5), 0xFF85);
    }

    #[test]
    fn test_store_ind_u64_and_load_ind_u64() {
        let mut vm = vm_with_registers(&[(1, 0x0102_0304_0506_0708), (2, TEST_ADDR as u64)]);

        dispatch_two_registers_one_immediate(STORE_IND_U64, 1, 2, 0, &mut vm);
        dispatch_two_registers_one_immediate(LOAD_IND_U64, 6, 2, 0, &mut vm);
        dispatch_two_registers_one_immediate(LOAD_IND_I8, 7, 2, 7, &mut vm);

        assert_eq!(vm.registers().get_u64(6), 0x0102_0304_0506_0708);
        assert_eq!(vm.registers().get_u64(7), 1);
    }

    #[test]
    fn test_load_ind_fault_reports_address() {
        let mut vm = vm_with_registers(&[(2, 0x00F0_0000)]);

        assert_eq!(
            dispatch_two_registers_one_immediate(LOAD_IND_U32, 1, 2, 0x10, &mut vm),
            InstructionResult::Fault {
                address: MemoryIndex::new(0x00F0_0010)
            }
        );
    }
}

#[test]
fn test_arithmetic_with_immediate() {
    assert_eq!(apply(ADD_IMM_32, 0, 0x7FFF_FFFF, 1), 0xFFFF_FFFF_8000_0000);
    assert_eq!(apply(ADD_IMM_64, 0, u64::MAX, 2), 1);
    assert_eq!(apply(MUL_IMM_32, 0, 0x1_0000_0003, 3), 9);
    assert_eq!(apply(MUL_IMM_64, 0, 1 << 32, 1 << 32), 0);
    assert_eq!(apply(NEG_ADD_IMM_32, 0, 3, 1), 0xFFFF_FFFF_FFFF_FFFE);
    assert_eq!(apply(NEG_ADD_IMM_64, 0, 3, 10), 7);
}

#[test]
fn test_bitwise_with_immediate() {
    assert_eq!(apply(AND_IMM, 0, 0b1100, 0b1010), 0b1000);
    assert_eq!(apply(OR_IMM, 0, 0b1100, 0b1010), 0b1110);
    assert_eq!(apply(XOR_IMM, 0, 0b1100, 0b1010), 0b0110);
}

#[test]
fn test_comparisons_with_immediate() {
    assert_eq!(apply(SET_LT_U_IMM, 9, 1, 2), 1);
    assert_eq!(apply(SET_LT_S_IMM, 9, u64::MAX, 0), 1);
    assert_eq!(apply(SET_GT_U_IMM, 9, u64::MAX, 0), 1);
    assert_eq!(apply(SET_GT_S_IMM, 9, u64::MAX, 0), 0);
}

#[test]
fn test_conditional_moves() {
    assert_eq!(apply(CMOV_IZ_IMM, 9, 0, 5), 5);
    assert_eq!(apply(CMOV_IZ_IMM, 9, 1, 5), 9);
    assert_eq!(apply(CMOV_NZ_IMM, 9, 1, 5), 5);
    assert_eq!(apply(CMOV_NZ_IMM, 9, 0, 5), 9);
}

#[test]
fn test_shifts_with_immediate() {
    assert_eq!(apply(SHLO_L_IMM_32, 0, 1, 31), 0xFFFF_FFFF_8000_0000);
    assert_eq!(apply(SHLO_R_IMM_32, 0, 0xFFFF_FFFF_8000_0000, 31), 1);
    assert_eq!(apply(SHAR_R_IMM_32, 0, 0x8000_0000, 31), u64::MAX);
    assert_eq!(apply(SHLO_L_IMM_64, 0, 1, 63), 1 << 63);
    assert_eq!(apply(SHLO_R_IMM_64, 0, 1 << 63, 63), 1);
    assert_eq!(apply(SHAR_R_IMM_64, 0, 1 << 63, 63), u64::MAX);
    // shift amount is masked to the operand width
    assert_eq!(apply(SHLO_L_IMM_64, 0, 1, 64), 1);
}

#[test]
fn test_alt_shifts_swap_operands() {
    assert_eq!(apply(SHLO_L_IMM_ALT_32, 0, 4, 1), 16);
    assert_eq!(apply(SHLO_R_IMM_ALT_32, 0, 4, 16), 1);
    assert_eq!(apply(SHAR_R_IMM_ALT_32, 0, 4, 0x8000_0000), 0xFFFF_FFFF_F800_0000);
    assert_eq!(apply(SHLO_L_IMM_ALT_64, 0, 40, 1), 1 << 40);
    assert_eq!(apply(SHLO_R_IMM_ALT_64, 0, 40, 1 << 40), 1);
    assert_eq!(apply(SHAR_R_IMM_ALT_64, 0, 60, 1 << 63), 0xFFFF_FFFF_FFFF_FFF8);
}

#[test]
fn test_rotations_with_immediate() {
    assert_eq!(apply(ROT_R_64_IMM, 0, 1, 1), 1 << 63);
    assert_eq!(apply(ROT_R_64_IMM_ALT, 0, 1, 1), 1 << 63);
    assert_eq!(apply(ROT_R_32_IMM, 0, 1, 1), 0xFFFF_FFFF_8000_0000);
    assert_eq!(apply(ROT_R_32_IMM_ALT, 0, 4, 0x10), 1);
}

#[test]
fn test_unknown_opcode_panics() {
    let mut vm = vm_with_registers(&[]);
    assert_eq!(
        dispatch_two_registers_one_immediate(TRAP, 1, 2, 0, &mut vm),
        InstructionResult::Panic
    );
}
