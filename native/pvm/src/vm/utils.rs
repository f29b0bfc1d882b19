use crate::core::Program;

/// Reads `count` little-endian bytes and sign-extends them to 64 bits.
#[inline(always)]
pub fn decode_and_extend(program: &Program, start_index: usize, count: usize) -> u64 {
    sign_extend(decode_bytes(program, start_index, count), count)
}

/// Extend value of `n` bytes to 64-bit
#[inline(always)]
pub fn sign_extend(x: u64, n: usize) -> u64 {
    let shift = (64u32.wrapping_sub((n * 8) as u32)) & 63;
    ((x << shift) as i64 >> shift) as u64
}

#[inline(always)]
pub fn decode_bytes(program: &Program, start_index: usize, count: usize) -> u64 {
    let count = count.min(8);
    let mut buf = [0u8; 8];
    buf[..count].copy_from_slice(&program[start_index..start_index + count]);
    u64::from_le_bytes(buf)
}

#[inline(always)]
pub fn unsigned_to_signed(x: u64, num_bytes: usize) -> i64 {
    sign_extend(x, num_bytes) as i64
}
