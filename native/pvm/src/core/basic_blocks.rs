use crate::core::{consts::is_termination_instruction, BitMask, Program};
use crate::vm::instructions::is_valid_opcode;

/// Offsets that start a basic block: offset 0 and every instruction that
/// directly follows a terminator.
#[derive(Debug, Clone, Default)]
pub struct BasicBlocks {
    set: Vec<u64>,
}

impl BasicBlocks {
    fn to_index(index: usize) -> (usize, usize) {
        (index >> 6, index & 63)
    }

    pub fn build(program: &Program, bitmask: &BitMask) -> Self {
        let mut blocks = Self {
            set: vec![0u64; program.len().div_ceil(64)],
        };
        if program.is_empty() {
            return blocks;
        }

        blocks.add(program, 0);

        let mut pos = 0;
        while pos < program.len() {
            let opcode = program[pos];
            let next_pos = pos + 1 + bitmask.skip(pos);
            // skip always lands on the next instruction start
            if is_termination_instruction(opcode) {
                blocks.add(program, next_pos);
            }
            pos = next_pos;
        }

        blocks
    }

    #[inline(always)]
    pub fn is_beginning_of_basic_block(&self, offset: usize) -> bool {
        let (word_index, bit_index) = Self::to_index(offset);

        match self.set.get(word_index) {
            Some(word) => (word & (1u64 << bit_index)) != 0,
            None => false,
        }
    }

    fn add(&mut self, program: &Program, offset: usize) {
        let valid = program
            .opcode_at(offset)
            .is_some_and(is_valid_opcode);
        if !valid {
            return;
        }

        let (word_index, bit_index) = Self::to_index(offset);
        if word_index >= self.set.len() {
            self.set.resize(word_index + 1, 0);
        }
        self.set[word_index] |= 1u64 << bit_index;
    }
}
