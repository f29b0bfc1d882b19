use crate::core::MemoryIndex;
use crate::vm::utils::sign_extend;
use crate::vm::{InstructionResult, Vm};

impl Vm {
    /// Loads `width` bytes at `address` into `register`, sign-extending when `signed`.
    #[inline(always)]
    pub fn load_register(
        &mut self,
        register: usize,
        address: u64,
        width: usize,
        signed: bool,
    ) -> InstructionResult {
        let mut buffer = [0u8; 8];
        if let Err(fault) = self
            .memory
            .load_into(&mut buffer[..width], MemoryIndex::from_u64(address))
        {
            return InstructionResult::Fault {
                address: fault.address,
            };
        }

        let registers = &mut self.state.registers;
        registers.set_le_bytes(register, &buffer[..width]);
        if signed {
            registers.set_u64(register, sign_extend(registers.get_u64(register), width));
        }
        InstructionResult::Continue
    }

    /// Stores the low `width` bytes of `value` at `address`.
    #[inline(always)]
    pub fn store_value(&mut self, address: u64, value: u64, width: usize) -> InstructionResult {
        let bytes = value.to_le_bytes();
        match self
            .memory
            .store_from(MemoryIndex::from_u64(address), &bytes[..width])
        {
            Ok(()) => InstructionResult::Continue,
            Err(fault) => InstructionResult::Fault {
                address: fault.address,
            },
        }
    }

    /// Stores the low `width` bytes of `register` at `address`.
    #[inline(always)]
    pub fn store_register(&mut self, address: u64, register: usize, width: usize) -> InstructionResult {
        let bytes = self.state.registers.le_bytes(register);
        match self
            .memory
            .store_from(MemoryIndex::from_u64(address), &bytes[..width])
        {
            Ok(()) => InstructionResult::Continue,
            Err(fault) => InstructionResult::Fault {
                address: fault.address,
            },
        }
    }
}
