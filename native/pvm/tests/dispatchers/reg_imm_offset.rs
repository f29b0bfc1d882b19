use pvm::core::Registers;
use pvm::vm::dispatchers::reg_imm_offset::dispatch_reg_immediate_offset;
use pvm::vm::instructions::opcodes::*;
use pvm::vm::test_builder::VmTestBuilder;
use pvm::vm::{InstructionResult, Vm};

const TARGET: usize = 2;

// every offset is a block start
fn vm_with_r1(value: u64) -> Vm {
    let mut registers = Registers::new();
    registers.set_u64(1, value);
    VmTestBuilder::new(vec![FALLTHROUGH, FALLTHROUGH, FALLTHROUGH], &[0b111])
        .with_registers(registers)
        .build()
}

fn branch(opcode: u8, w_a: u64, v_x: u64) -> InstructionResult {
    let mut vm = vm_with_r1(w_a);
    dispatch_reg_immediate_offset(opcode, 1, v_x, TARGET, &mut vm)
}

#[test]
fn test_load_imm_jump_sets_register_and_jumps() {
    let mut vm = vm_with_r1(0);

    let result = dispatch_reg_immediate_offset(LOAD_IMM_JUMP, 1, 99, TARGET, &mut vm);

    assert_eq!(result, InstructionResult::Jump(TARGET));
    assert_eq!(vm.registers().get_u64(1), 99);
}

#[test]
fn test_load_imm_jump_to_invalid_target_still_loads() {
    let mut vm = vm_with_r1(0);

    let result = dispatch_reg_immediate_offset(LOAD_IMM_JUMP, 1, 99, 40, &mut vm);

    assert_eq!(result, InstructionResult::Panic);
    assert_eq!(vm.registers().get_u64(1), 99);
}

#[test]
fn test_unsigned_branches() {
    let taken = InstructionResult::Jump(TARGET);
    let skipped = InstructionResult::Continue;

    assert_eq!(branch(BRANCH_EQ_IMM, 5, 5), taken);
    assert_eq!(branch(BRANCH_EQ_IMM, 5, 6), skipped);
    assert_eq!(branch(BRANCH_NE_IMM, 5, 6), taken);
    assert_eq!(branch(BRANCH_NE_IMM, 5, 5), skipped);
    assert_eq!(branch(BRANCH_LT_U_IMM, 4, 5), taken);
    assert_eq!(branch(BRANCH_LT_U_IMM, u64::MAX, 5), skipped);
    assert_eq!(branch(BRANCH_LE_U_IMM, 5, 5), taken);
    assert_eq!(branch(BRANCH_LE_U_IMM, 6, 5), skipped);
    assert_eq!(branch(BRANCH_GE_U_IMM, 5, 5), taken);
    assert_eq!(branch(BRANCH_GE_U_IMM, 4, 5), skipped);
    assert_eq!(branch(BRANCH_GT_U_IMM, u64::MAX, 5), taken);
    assert_eq!(branch(BRANCH_GT_U_IMM, 5, 5), skipped);
}

#[test]
fn test_signed_branches() {
    let taken = InstructionResult::Jump(TARGET);
    let skipped = InstructionResult::Continue;
    let minus_one = u64::MAX;

    assert_eq!(branch(BRANCH_LT_S_IMM, minus_one, 0), taken);
    assert_eq!(branch(BRANCH_LT_S_IMM, 0, minus_one), skipped);
    assert_eq!(branch(BRANCH_LE_S_IMM, minus_one, minus_one), taken);
    assert_eq!(branch(BRANCH_LE_S_IMM, 1, minus_one), skipped);
    assert_eq!(branch(BRANCH_GE_S_IMM, 0, minus_one), taken);
    assert_eq!(branch(BRANCH_GE_S_IMM, minus_one, 0), skipped);
    assert_eq!(branch(BRANCH_GT_S_IMM, 1, minus_one), taken);
    assert_eq!(branch(BRANCH_GT_S_IMM, minus_one, minus_one), skipped);
}

#[test]
fn test_taken_branch_to_invalid_target_panics() {
    let mut vm = vm_with_r1(0);
    assert_eq!(
        dispatch_reg_immediate_offset(BRANCH_EQ_IMM, 1, 0, 17, &mut vm),
        InstructionResult::Panic
    );
    // not taken, target never checked
    assert_eq!(
        dispatch_reg_immediate_offset(BRANCH_EQ_IMM, 1, 1, 17, &mut vm),
        InstructionResult::Continue
    );
}
