use std::ops::{Index, Range};

use crate::core::consts::CODE_PADDING;

/// Instruction bytes, padded with zeros so decoders may read past the last
/// instruction without bounds checks failing.
#[derive(Debug, Clone, Default)]
pub struct Program {
    code: Vec<u8>,
    size: usize,
}

impl Program {
    pub fn new(data: &[u8]) -> Self {
        Self::from_vec(data.to_vec())
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        let size = data.len();
        let mut program = Self { code: data, size };
        program.pad();
        program
    }

    fn pad(&mut self) {
        self.code.resize(self.size + CODE_PADDING, 0);
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Opcode at `pc`, or `None` once `pc` leaves the code.
    #[inline(always)]
    pub fn opcode_at(&self, pc: usize) -> Option<u8> {
        (pc < self.size).then(|| self.code[pc])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.code[..self.size]
    }
}

impl Index<usize> for Program {
    type Output = u8;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.code[index]
    }
}

impl Index<Range<usize>> for Program {
    type Output = [u8];

    #[inline(always)]
    fn index(&self, range: Range<usize>) -> &Self::Output {
        &self.code[range]
    }
}
