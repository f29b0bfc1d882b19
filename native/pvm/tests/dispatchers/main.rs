mod one_immediate;
mod one_offset;
mod reg_imm_offset;
mod reg_two_imm;
mod three_registers;
mod two_registers;
mod two_registers_one_immediate;
mod two_registers_two_immediates;

use pvm::core::Registers;
use pvm::vm::test_builder::VmTestBuilder;
use pvm::vm::Vm;

/// A `Vm` over an empty program with the given register values.
pub fn vm_with_registers(values: &[(usize, u64)]) -> Vm {
    let mut registers = Registers::new();
    for &(index, value) in values {
        registers.set_u64(index, value);
    }
    VmTestBuilder::new(vec![], &[])
        .with_registers(registers)
        .build()
}
