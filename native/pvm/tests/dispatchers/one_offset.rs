use pvm::core::JumpTable;
use pvm::vm::dispatchers::one_offset::dispatch_one_offset;
use pvm::vm::instructions::opcodes::*;
use pvm::vm::InstructionResult;
use pvm::vm::VmContext;

// 0: jump  2: fallthrough  3: move_reg  5: trap
fn context() -> VmContext {
    VmContext::new(
        &[JUMP, 3, FALLTHROUGH, MOVE_REG, 0x10, TRAP],
        &[0b0010_1101],
        JumpTable::default(),
    )
    .unwrap()
}

#[test]
fn test_jump_to_basic_block_start() {
    let context = context();
    assert_eq!(dispatch_one_offset(JUMP, 3, &context), InstructionResult::Jump(3));
    assert_eq!(dispatch_one_offset(JUMP, 0, &context), InstructionResult::Jump(0));
}

#[test]
fn test_jump_into_middle_of_block_panics() {
    let context = context();
    // instruction start, but the previous instruction does not end a block
    assert_eq!(dispatch_one_offset(JUMP, 5, &context), InstructionResult::Panic);
    // argument byte
    assert_eq!(dispatch_one_offset(JUMP, 4, &context), InstructionResult::Panic);
}

#[test]
fn test_jump_past_code_panics() {
    let context = context();
    assert_eq!(dispatch_one_offset(JUMP, 6, &context), InstructionResult::Panic);
    assert_eq!(
        dispatch_one_offset(JUMP, usize::MAX, &context),
        InstructionResult::Panic
    );
}
