use pvm::core::consts::PAGE_SIZE;
use pvm::core::{Memory, MemoryIndex};
use pvm::vm::dispatchers::two_registers::dispatch_two_registers;
use pvm::vm::instructions::opcodes::*;
use pvm::vm::test_builder::VmTestBuilder;
use pvm::vm::InstructionResult;

use crate::vm_with_registers;

fn apply(opcode: u8, w_a: u64) -> u64 {
    let mut vm = vm_with_registers(&[(1, w_a)]);
    assert_eq!(
        dispatch_two_registers(opcode, 2, 1, &mut vm),
        InstructionResult::Continue
    );
    vm.registers().get_u64(2)
}

#[test]
fn test_move_reg() {
    assert_eq!(apply(MOVE_REG, 0xABCD), 0xABCD);
}

#[test]
fn test_bit_counts() {
    assert_eq!(apply(COUNT_SET_BITS_64, 0xF000_0000_0000_000F), 8);
    assert_eq!(apply(COUNT_SET_BITS_32, 0xF000_0000_0000_000F), 4);
    assert_eq!(apply(LEADING_ZERO_BITS_64, 1), 63);
    assert_eq!(apply(LEADING_ZERO_BITS_32, 0xFFFF_FFFF_0000_0001), 31);
    assert_eq!(apply(LEADING_ZERO_BITS_32, 0xFFFF_FFFF_0000_0000), 32);
    assert_eq!(apply(TRAILING_ZERO_BITS_64, 0), 64);
    assert_eq!(apply(TRAILING_ZERO_BITS_32, 0x1_0000_0000), 32);
    assert_eq!(apply(TRAILING_ZERO_BITS_32, 0x80), 7);
}

#[test]
fn test_extensions_and_byte_reversal() {
    assert_eq!(apply(SIGN_EXTEND_8, 0x1_80), 0xFFFF_FFFF_FFFF_FF80);
    assert_eq!(apply(SIGN_EXTEND_16, 0x7FFF), 0x7FFF);
    assert_eq!(apply(SIGN_EXTEND_16, 0xFFFF_8000), 0xFFFF_FFFF_FFFF_8000);
    assert_eq!(apply(ZERO_EXTEND_16, 0xFFFF_8000), 0x8000);
    assert_eq!(apply(REVERSE_BYTES, 0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
}

#[test]
fn test_unknown_opcode_panics() {
    let mut vm = vm_with_registers(&[]);
    assert_eq!(
        dispatch_two_registers(TRAP, 0, 0, &mut vm),
        InstructionResult::Panic
    );
}

mod sbrk {
    use super::*;

    fn vm_with_heap(length: u64, end_heap: u64) -> pvm::vm::Vm {
        let memory = Memory::builder()
            .finalize(MemoryIndex::new(0), end_heap)
            .unwrap();
        let mut registers = pvm::core::Registers::new();
        registers.set_u64(1, length);
        VmTestBuilder::new(vec![], &[])
            .with_memory(memory)
            .with_registers(registers)
            .build()
    }

    #[test]
    fn test_sbrk_returns_previous_cursor() {
        let mut vm = vm_with_heap(100, 4 * PAGE_SIZE as u64);

        dispatch_two_registers(SBRK, 2, 1, &mut vm);
        assert_eq!(vm.registers().get_u64(2), 0);

        dispatch_two_registers(SBRK, 2, 1, &mut vm);
        assert_eq!(vm.registers().get_u64(2), 100);
        assert_eq!(vm.memory().page_count(), 1);
    }

    #[test]
    fn test_allocated_heap_is_writeable() {
        let mut vm = vm_with_heap(8, 4 * PAGE_SIZE as u64);

        dispatch_two_registers(SBRK, 2, 1, &mut vm);

        assert!(vm.memory().is_writeable(MemoryIndex::new(0), 8));
        assert!(!vm.memory().is_writeable(MemoryIndex::new(8), 1));
    }

    #[test]
    fn test_sbrk_out_of_memory_writes_zero() {
        let mut vm = vm_with_heap(5 * PAGE_SIZE as u64, 4 * PAGE_SIZE as u64);
        vm.registers_mut().set_u64(2, 1234);

        let result = dispatch_two_registers(SBRK, 2, 1, &mut vm);

        assert_eq!(result, InstructionResult::Continue);
        assert_eq!(vm.registers().get_u64(2), 0);
        assert_eq!(vm.memory().page_count(), 0);
        assert_eq!(vm.memory().virtual_sbrk_index(), 0);
    }
}
