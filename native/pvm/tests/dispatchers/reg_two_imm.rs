use pvm::core::MemoryIndex;
use pvm::vm::dispatchers::reg_two_imm::dispatch_reg_two_imm;
use pvm::vm::instructions::opcodes::*;
use pvm::vm::test_builder::TEST_ADDR;
use pvm::vm::InstructionResult;

use crate::vm_with_registers;

#[test]
fn test_store_imm_ind_uses_base_register() {
    let mut vm = vm_with_registers(&[(5, TEST_ADDR as u64 - 8)]);

    let result = dispatch_reg_two_imm(STORE_IMM_IND_U32, 5, 8, 0xDEAD_BEEF, &mut vm);

    assert_eq!(result, InstructionResult::Continue);
    let mut stored = [0u8; 4];
    vm.memory()
        .load_into(&mut stored, MemoryIndex::new(TEST_ADDR))
        .unwrap();
    assert_eq!(stored, 0xDEAD_BEEFu32.to_le_bytes());
}

#[test]
fn test_store_imm_ind_address_wraps() {
    // base + offset wraps past 2^32 onto TEST_ADDR
    let mut vm = vm_with_registers(&[(1, 0xFFFF_FFFF)]);

    let result = dispatch_reg_two_imm(STORE_IMM_IND_U8, 1, TEST_ADDR as u64 + 1, 0xAB, &mut vm);

    assert_eq!(result, InstructionResult::Continue);
    let mut stored = [0u8; 1];
    vm.memory()
        .load_into(&mut stored, MemoryIndex::new(TEST_ADDR))
        .unwrap();
    assert_eq!(stored, [0xAB]);
}

#[test]
fn test_store_imm_ind_u64_and_u16() {
    let mut vm = vm_with_registers(&[(2, TEST_ADDR as u64)]);

    dispatch_reg_two_imm(STORE_IMM_IND_U64, 2, 0, u64::MAX, &mut vm);
    dispatch_reg_two_imm(STORE_IMM_IND_U16, 2, 0, 0, &mut vm);

    let mut stored = [0u8; 8];
    vm.memory()
        .load_into(&mut stored, MemoryIndex::new(TEST_ADDR))
        .unwrap();
    assert_eq!(stored, [0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
}
