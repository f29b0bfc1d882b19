use crate::vm::utils::sign_extend;

#[inline(always)]
fn extend_32(value: u32) -> u64 {
    sign_extend(value as u64, 4)
}

#[inline(always)]
pub fn shlo_l_32(a: u64, shift: u64) -> u64 {
    extend_32((a as u32) << (shift & 31))
}

#[inline(always)]
pub fn shlo_r_32(a: u64, shift: u64) -> u64 {
    extend_32((a as u32) >> (shift & 31))
}

#[inline(always)]
pub fn shar_r_32(a: u64, shift: u64) -> u64 {
    ((a as u32 as i32) >> (shift & 31)) as i64 as u64
}

#[inline(always)]
pub fn shlo_l_64(a: u64, shift: u64) -> u64 {
    a << (shift & 63)
}

#[inline(always)]
pub fn shlo_r_64(a: u64, shift: u64) -> u64 {
    a >> (shift & 63)
}

#[inline(always)]
pub fn shar_r_64(a: u64, shift: u64) -> u64 {
    ((a as i64) >> (shift & 63)) as u64
}

#[inline(always)]
pub fn rot_l_64(a: u64, shift: u64) -> u64 {
    a.rotate_left((shift & 63) as u32)
}

#[inline(always)]
pub fn rot_r_64(a: u64, shift: u64) -> u64 {
    a.rotate_right((shift & 63) as u32)
}

#[inline(always)]
pub fn rot_l_32(a: u64, shift: u64) -> u64 {
    extend_32((a as u32).rotate_left((shift & 31) as u32))
}

#[inline(always)]
pub fn rot_r_32(a: u64, shift: u64) -> u64 {
    extend_32((a as u32).rotate_right((shift & 31) as u32))
}
