use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::consts::{MEMORY_SIZE, PAGE_SIZE};
use crate::core::{
    BasicBlocks, BitMask, Gas, JumpTable, Memory, MemoryPage, PageNumber, Program, Registers,
    WriteablePage,
};
use crate::vm::{InterpreterConfig, Vm, VmContext};

/// Assembles a ready-to-step `Vm` from raw code and mask bytes.
pub struct VmTestBuilder {
    program: Program,
    bitmask: BitMask,
    registers: Registers,
    pc: usize,
    gas: Gas,
    jump_table: JumpTable,
    memory: Memory,
    config: InterpreterConfig,
}

impl VmTestBuilder {
    pub fn new(program_vec: Vec<u8>, bitmask_bytes: &[u8]) -> Self {
        let program = Program::from_vec(program_vec);
        let bitmask = BitMask::from_bytes(bitmask_bytes, program.len());

        Self {
            program,
            bitmask,
            registers: Registers::new(),
            pc: 0,
            gas: 1000,
            jump_table: JumpTable::default(),
            memory: test_memory(8),
            config: InterpreterConfig::default(),
        }
    }

    pub fn with_registers(mut self, registers: Registers) -> Self {
        self.registers = registers;
        self
    }

    pub fn with_jump_table(mut self, jump_table: Vec<u32>) -> Self {
        self.jump_table = JumpTable::new(jump_table);
        self
    }

    pub fn with_memory(mut self, memory: Memory) -> Self {
        self.memory = memory;
        self
    }

    pub fn with_gas(mut self, gas: Gas) -> Self {
        self.gas = gas;
        self
    }

    pub fn with_pc(mut self, pc: usize) -> Self {
        self.pc = pc;
        self
    }

    pub fn with_config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Vm {
        let basic_blocks = BasicBlocks::build(&self.program, &self.bitmask);

        let context = Arc::new(VmContext {
            program: self.program,
            bitmask: self.bitmask,
            jump_table: self.jump_table,
            basic_blocks,
        });

        let mut vm = Vm::new(self.config);
        vm.reset(
            context,
            self.pc,
            self.gas,
            Some(&self.registers),
            Some(&self.memory),
        );
        vm
    }
}

/// Address inside the writeable region of `test_memory(n)` for any `n >= 5`.
pub const TEST_ADDR: u32 = 0x10E00;

/// `num_pages` zeroed writeable pages from address 0, followed by an empty
/// heap of the same size.
pub fn test_memory(num_pages: u32) -> Memory {
    let pages: BTreeMap<PageNumber, MemoryPage> = (0..num_pages)
        .filter_map(PageNumber::new)
        .map(|page| (page, MemoryPage::Writeable(WriteablePage::new())))
        .collect();

    let heap_start = num_pages as u64 * PAGE_SIZE as u64;
    let heap_end = (2 * heap_start).min(MEMORY_SIZE);

    Memory::from_parts(pages, heap_start.min(MEMORY_SIZE), heap_end)
}
