use crate::vm::utils::sign_extend;

#[inline(always)]
pub fn and(a: u64, b: u64) -> u64 {
    a & b
}

#[inline(always)]
pub fn or(a: u64, b: u64) -> u64 {
    a | b
}

#[inline(always)]
pub fn xor(a: u64, b: u64) -> u64 {
    a ^ b
}

#[inline(always)]
pub fn and_inv(a: u64, b: u64) -> u64 {
    a & !b
}

#[inline(always)]
pub fn or_inv(a: u64, b: u64) -> u64 {
    a | !b
}

#[inline(always)]
pub fn xnor(a: u64, b: u64) -> u64 {
    !(a ^ b)
}

#[inline(always)]
pub fn count_set_bits_64(a: u64) -> u64 {
    a.count_ones() as u64
}

#[inline(always)]
pub fn count_set_bits_32(a: u64) -> u64 {
    (a as u32).count_ones() as u64
}

#[inline(always)]
pub fn leading_zero_bits_64(a: u64) -> u64 {
    a.leading_zeros() as u64
}

#[inline(always)]
pub fn leading_zero_bits_32(a: u64) -> u64 {
    (a as u32).leading_zeros() as u64
}

#[inline(always)]
pub fn trailing_zero_bits_64(a: u64) -> u64 {
    a.trailing_zeros() as u64
}

#[inline(always)]
pub fn trailing_zero_bits_32(a: u64) -> u64 {
    (a as u32).trailing_zeros() as u64
}

#[inline(always)]
pub fn sign_extend_8(a: u64) -> u64 {
    sign_extend(a & 0xFF, 1)
}

#[inline(always)]
pub fn sign_extend_16(a: u64) -> u64 {
    sign_extend(a & 0xFFFF, 2)
}

#[inline(always)]
pub fn zero_extend_16(a: u64) -> u64 {
    a & 0xFFFF
}

#[inline(always)]
pub fn reverse_bytes(a: u64) -> u64 {
    a.swap_bytes()
}
