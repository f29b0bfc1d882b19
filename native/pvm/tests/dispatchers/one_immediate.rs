use pvm::vm::dispatchers::one_immediate::dispatch_one_immediate;
use pvm::vm::instructions::opcodes::*;
use pvm::vm::InstructionResult;

#[test]
fn test_ecalli_requests_host_call() {
    assert_eq!(
        dispatch_one_immediate(ECALLI, 7),
        InstructionResult::Host { index: 7 }
    );
}

#[test]
fn test_ecalli_truncates_index_to_32_bits() {
    assert_eq!(
        dispatch_one_immediate(ECALLI, 0xFFFF_FFFF_FFFF_FFFE),
        InstructionResult::Host { index: 0xFFFF_FFFE }
    );
}

#[test]
fn test_other_opcode_panics() {
    assert_eq!(dispatch_one_immediate(TRAP, 1), InstructionResult::Panic);
}
