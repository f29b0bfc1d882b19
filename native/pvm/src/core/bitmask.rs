use crate::core::consts::MAX_SKIP;

/// Instruction-start mask: one bit per code byte, LSB-first within each byte.
///
/// Bits past the end of the code are padded with ones, so `skip` always finds a
/// boundary and stops at the end of the program.
#[derive(Debug, Clone)]
pub struct BitMask {
    bits: Vec<u64>,
    limit: usize,
}

impl BitMask {
    fn to_index(index: usize) -> (usize, usize) {
        (index >> 6, index & 63)
    }

    pub fn from_bytes(bytes: &[u8], program_length: usize) -> Self {
        let mut words: Vec<u64> = bytes
            .chunks(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf[..chunk.len()].copy_from_slice(chunk);
                u64::from_le_bytes(buf)
            })
            .collect();

        // Bits describing bytes past the code are meaningless; drop them before padding.
        let used_words = program_length.div_ceil(64);
        words.truncate(used_words.max(1));

        let mut bitmask = Self {
            bits: words,
            limit: program_length,
        };
        bitmask.pad();
        bitmask
    }

    fn assure_capacity(&mut self, index: usize) {
        if index >= self.bits.len() {
            self.bits.resize(index + 1, 0);
        }
    }

    pub fn program_limit(&self) -> usize {
        self.limit
    }

    #[inline(always)]
    pub fn is_set(&self, index: usize) -> bool {
        let (word_index, bit_index) = Self::to_index(index);

        match self.bits.get(word_index) {
            Some(word) => (word & (1u64 << bit_index)) != 0,
            None => true,
        }
    }

    /// Number of argument bytes following the instruction at `pc`, capped at `MAX_SKIP`.
    #[inline(always)]
    pub fn skip(&self, pc: usize) -> usize {
        let (word_index, bit_index) = Self::to_index(pc + 1);

        let curr = self.bits.get(word_index).copied().unwrap_or(u64::MAX);
        let masked = curr >> bit_index;

        if masked != 0 {
            return (masked.trailing_zeros() as usize).min(MAX_SKIP);
        }

        let next = self.bits.get(word_index + 1).copied().unwrap_or(u64::MAX);
        let remain_curr = 64 - bit_index;
        (remain_curr + next.trailing_zeros() as usize).min(MAX_SKIP)
    }

    fn pad(&mut self) {
        let (word_index, bit_index) = Self::to_index(self.limit);
        self.assure_capacity(word_index);

        let upper_mask = u64::MAX << bit_index;
        self.bits[word_index] |= upper_mask;

        self.bits.push(u64::MAX);
    }
}

impl Default for BitMask {
    fn default() -> Self {
        Self::from_bytes(&[], 0)
    }
}
