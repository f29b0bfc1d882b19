use crate::vm::utils::sign_extend;

#[inline(always)]
fn extend_32(value: u32) -> u64 {
    sign_extend(value as u64, 4)
}

#[inline(always)]
pub fn add_32(a: u64, b: u64) -> u64 {
    extend_32((a as u32).wrapping_add(b as u32))
}

#[inline(always)]
pub fn sub_32(a: u64, b: u64) -> u64 {
    extend_32((a as u32).wrapping_sub(b as u32))
}

#[inline(always)]
pub fn mul_32(a: u64, b: u64) -> u64 {
    extend_32((a as u32).wrapping_mul(b as u32))
}

/// Division by zero yields `u64::MAX`.
#[inline(always)]
pub fn div_u_32(a: u64, b: u64) -> u64 {
    match b as u32 {
        0 => u64::MAX,
        b => extend_32(a as u32 / b),
    }
}

/// Division by zero yields `u64::MAX`; `i32::MIN / -1` yields the dividend.
#[inline(always)]
pub fn div_s_32(a: u64, b: u64) -> u64 {
    let (a, b) = (a as u32 as i32, b as u32 as i32);
    match b {
        0 => u64::MAX,
        _ => a.wrapping_div(b) as i64 as u64,
    }
}

/// Remainder by zero yields the dividend.
#[inline(always)]
pub fn rem_u_32(a: u64, b: u64) -> u64 {
    match b as u32 {
        0 => extend_32(a as u32),
        b => extend_32(a as u32 % b),
    }
}

/// Remainder by zero yields the dividend; `i32::MIN % -1` yields zero.
#[inline(always)]
pub fn rem_s_32(a: u64, b: u64) -> u64 {
    let (a, b) = (a as u32 as i32, b as u32 as i32);
    match b {
        0 => a as i64 as u64,
        _ => a.wrapping_rem(b) as i64 as u64,
    }
}

#[inline(always)]
pub fn add_64(a: u64, b: u64) -> u64 {
    a.wrapping_add(b)
}

#[inline(always)]
pub fn sub_64(a: u64, b: u64) -> u64 {
    a.wrapping_sub(b)
}

#[inline(always)]
pub fn mul_64(a: u64, b: u64) -> u64 {
    a.wrapping_mul(b)
}

#[inline(always)]
pub fn div_u_64(a: u64, b: u64) -> u64 {
    match b {
        0 => u64::MAX,
        _ => a / b,
    }
}

#[inline(always)]
pub fn div_s_64(a: u64, b: u64) -> u64 {
    match b as i64 {
        0 => u64::MAX,
        b => (a as i64).wrapping_div(b) as u64,
    }
}

#[inline(always)]
pub fn rem_u_64(a: u64, b: u64) -> u64 {
    match b {
        0 => a,
        _ => a % b,
    }
}

#[inline(always)]
pub fn rem_s_64(a: u64, b: u64) -> u64 {
    match b as i64 {
        0 => a,
        b => (a as i64).wrapping_rem(b) as u64,
    }
}

#[inline(always)]
pub fn mul_upper_s_s(a: u64, b: u64) -> u64 {
    ((a as i64 as i128 * b as i64 as i128) >> 64) as u64
}

#[inline(always)]
pub fn mul_upper_u_u(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) >> 64) as u64
}

#[inline(always)]
pub fn mul_upper_s_u(a: u64, b: u64) -> u64 {
    ((a as i64 as i128 * b as i128) >> 64) as u64
}
