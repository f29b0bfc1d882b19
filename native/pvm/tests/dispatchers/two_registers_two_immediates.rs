use pvm::core::Registers;
use pvm::vm::dispatchers::two_registers_two_immediates::dispatch_two_registers_two_immediates;
use pvm::vm::instructions::opcodes::*;
use pvm::vm::test_builder::VmTestBuilder;
use pvm::vm::{InstructionResult, Vm};

// 0: load_imm_jump_ind  3: fallthrough  4: fallthrough
fn vm(values: &[(usize, u64)]) -> Vm {
    let mut registers = Registers::new();
    for &(index, value) in values {
        registers.set_u64(index, value);
    }
    VmTestBuilder::new(
        vec![LOAD_IMM_JUMP_IND, 0x21, 0x00, FALLTHROUGH, FALLTHROUGH],
        &[0b1_1001],
    )
    .with_jump_table(vec![3, 4])
    .with_registers(registers)
    .build()
}

#[test]
fn test_load_imm_jump_ind_loads_and_jumps() {
    let mut vm = vm(&[(2, 2)]);

    let result = dispatch_two_registers_two_immediates(LOAD_IMM_JUMP_IND, 1, 2, 77, 2, &mut vm);

    // address 4 selects the second entry
    assert_eq!(result, InstructionResult::Jump(4));
    assert_eq!(vm.registers().get_u64(1), 77);
}

#[test]
fn test_target_uses_base_before_load() {
    let mut vm = vm(&[(1, 2)]);

    let result = dispatch_two_registers_two_immediates(LOAD_IMM_JUMP_IND, 1, 1, 1000, 0, &mut vm);

    assert_eq!(result, InstructionResult::Jump(3));
    assert_eq!(vm.registers().get_u64(1), 1000);
}

#[test]
fn test_halt_address() {
    let mut vm = vm(&[(2, 0xFFFF_0000)]);

    assert_eq!(
        dispatch_two_registers_two_immediates(LOAD_IMM_JUMP_IND, 1, 2, 5, 0, &mut vm),
        InstructionResult::Halt
    );
    assert_eq!(vm.registers().get_u64(1), 5);
}

#[test]
fn test_misaligned_address_panics() {
    let mut vm = vm(&[(2, 1)]);

    assert_eq!(
        dispatch_two_registers_two_immediates(LOAD_IMM_JUMP_IND, 1, 2, 5, 0, &mut vm),
        InstructionResult::Panic
    );
}
