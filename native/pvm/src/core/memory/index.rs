use std::fmt;

use crate::core::consts::{MAX_PAGE_NUMBER, PAGE_SIZE, PAGE_SIZE_SHIFT};

/// A byte address in the 2^32 address space. Arithmetic wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemoryIndex(u32);

impl MemoryIndex {
    pub const fn new(address: u32) -> Self {
        Self(address)
    }

    /// Truncates a register value to the address space.
    #[inline(always)]
    pub const fn from_u64(address: u64) -> Self {
        Self(address as u32)
    }

    #[inline(always)]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn wrapping_add(self, offset: u32) -> Self {
        Self(self.0.wrapping_add(offset))
    }

    #[inline(always)]
    pub const fn page_number(self) -> PageNumber {
        PageNumber(self.0 >> PAGE_SIZE_SHIFT)
    }

    #[inline(always)]
    pub const fn offset_in_page(self) -> usize {
        (self.0 as usize) & (PAGE_SIZE - 1)
    }

    #[inline(always)]
    pub const fn is_page_aligned(self) -> bool {
        self.offset_in_page() == 0
    }
}

impl From<u32> for MemoryIndex {
    fn from(address: u32) -> Self {
        Self(address)
    }
}

impl fmt::Display for MemoryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Page number, `address >> PAGE_SIZE_SHIFT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// `None` past the last page of the address space.
    pub const fn new(page: u32) -> Option<Self> {
        if page <= MAX_PAGE_NUMBER {
            Some(Self(page))
        } else {
            None
        }
    }

    #[inline(always)]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn start_index(self) -> MemoryIndex {
        MemoryIndex(self.0 << PAGE_SIZE_SHIFT)
    }

    /// Following page, wrapping to page 0 after the last one.
    #[inline(always)]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) & MAX_PAGE_NUMBER)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
