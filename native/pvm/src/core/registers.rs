use crate::core::consts::NO_OF_REGISTERS;

/// The 13 general purpose registers. Every slot holds 64 bits; narrower views
/// read the low bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    data: [u64; NO_OF_REGISTERS],
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(vec: Vec<u64>) -> Self {
        let mut data = [0u64; NO_OF_REGISTERS];
        let len = vec.len().min(NO_OF_REGISTERS);
        data[..len].copy_from_slice(&vec[..len]);
        Self { data }
    }

    #[inline(always)]
    pub fn get_u64(&self, index: usize) -> u64 {
        self.data[index]
    }

    #[inline(always)]
    pub fn get_i64(&self, index: usize) -> i64 {
        self.data[index] as i64
    }

    #[inline(always)]
    pub fn get_u32(&self, index: usize) -> u32 {
        self.data[index] as u32
    }

    #[inline(always)]
    pub fn get_i32(&self, index: usize) -> i32 {
        self.data[index] as u32 as i32
    }

    #[inline(always)]
    pub fn set_u64(&mut self, index: usize, value: u64) {
        self.data[index] = value;
    }

    #[inline(always)]
    pub fn set_i64(&mut self, index: usize, value: i64) {
        self.data[index] = value as u64;
    }

    /// Zero-extends into the full slot.
    #[inline(always)]
    pub fn set_u32(&mut self, index: usize, value: u32) {
        self.data[index] = value as u64;
    }

    /// Sign-extends into the full slot.
    #[inline(always)]
    pub fn set_i32(&mut self, index: usize, value: i32) {
        self.data[index] = value as i64 as u64;
    }

    /// Raw little-endian view of a slot.
    #[inline(always)]
    pub fn le_bytes(&self, index: usize) -> [u8; 8] {
        self.data[index].to_le_bytes()
    }

    /// Writes up to 8 little-endian bytes into a slot, zero-filling the rest.
    #[inline(always)]
    pub fn set_le_bytes(&mut self, index: usize, bytes: &[u8]) {
        let mut buf = [0u8; 8];
        let len = bytes.len().min(8);
        buf[..len].copy_from_slice(&bytes[..len]);
        self.data[index] = u64::from_le_bytes(buf);
    }

    pub fn as_slice(&self) -> &[u64; NO_OF_REGISTERS] {
        &self.data
    }
}
