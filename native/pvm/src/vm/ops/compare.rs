#[inline(always)]
pub fn set_lt_u(a: u64, b: u64) -> u64 {
    (a < b) as u64
}

#[inline(always)]
pub fn set_lt_s(a: u64, b: u64) -> u64 {
    ((a as i64) < (b as i64)) as u64
}

#[inline(always)]
pub fn set_gt_u(a: u64, b: u64) -> u64 {
    (a > b) as u64
}

#[inline(always)]
pub fn set_gt_s(a: u64, b: u64) -> u64 {
    ((a as i64) > (b as i64)) as u64
}

#[inline(always)]
pub fn max(a: u64, b: u64) -> u64 {
    (a as i64).max(b as i64) as u64
}

#[inline(always)]
pub fn max_u(a: u64, b: u64) -> u64 {
    a.max(b)
}

#[inline(always)]
pub fn min(a: u64, b: u64) -> u64 {
    (a as i64).min(b as i64) as u64
}

#[inline(always)]
pub fn min_u(a: u64, b: u64) -> u64 {
    a.min(b)
}

/// `value` if `condition` is zero, otherwise `current`.
#[inline(always)]
pub fn cmov_iz(current: u64, value: u64, condition: u64) -> u64 {
    if condition == 0 {
        value
    } else {
        current
    }
}

/// `value` if `condition` is non-zero, otherwise `current`.
#[inline(always)]
pub fn cmov_nz(current: u64, value: u64, condition: u64) -> u64 {
    if condition != 0 {
        value
    } else {
        current
    }
}
