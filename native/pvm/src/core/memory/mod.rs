mod builder;
mod errors;
mod index;
mod page;

pub use builder::*;
pub use errors::*;
pub use index::*;
pub use page::*;

use std::collections::BTreeMap;

use crate::core::consts::{MEMORY_SIZE, PAGE_SIZE, PAGE_SIZE_SHIFT};

/// Sparse 2^32 byte address space.
///
/// The heap grows upwards from `virtual_sbrk_index`. Pages up to `sbrk_index`
/// are committed, but `[virtual_sbrk_index, sbrk_index)` faults until `sbrk`
/// hands it out. Nothing grows past `end_heap_index`. The cursors are `u64`
/// so the heap can run up to 2^32 inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    pages: BTreeMap<PageNumber, MemoryPage>,
    sbrk_index: u64,
    virtual_sbrk_index: u64,
    end_heap_index: u64,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Empty memory whose heap may use the whole address space.
    pub fn new() -> Self {
        Self {
            pages: BTreeMap::new(),
            sbrk_index: 0,
            virtual_sbrk_index: 0,
            end_heap_index: MEMORY_SIZE,
        }
    }

    pub fn builder() -> MemoryBuilder {
        MemoryBuilder::new()
    }

    pub(crate) fn from_parts(
        pages: BTreeMap<PageNumber, MemoryPage>,
        sbrk_index: u64,
        end_heap_index: u64,
    ) -> Self {
        Self {
            pages,
            sbrk_index,
            virtual_sbrk_index: sbrk_index,
            end_heap_index,
        }
    }

    /// Deep copy of `other`, replacing every page and cursor.
    pub fn copy_from(&mut self, other: &Memory) {
        self.clone_from(other);
    }

    pub fn sbrk_index(&self) -> u64 {
        self.sbrk_index
    }

    pub fn virtual_sbrk_index(&self) -> u64 {
        self.virtual_sbrk_index
    }

    pub fn end_heap_index(&self) -> u64 {
        self.end_heap_index
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, page: PageNumber) -> Option<&MemoryPage> {
        self.pages.get(&page)
    }

    pub fn get_page_dump(&self, page: PageNumber) -> Option<Vec<u8>> {
        self.pages.get(&page).map(MemoryPage::dump)
    }

    /// Offset into a single-page segment where the uncommitted heap gap starts.
    #[inline(always)]
    fn heap_gap_offset(&self, address: MemoryIndex, length: usize) -> Option<usize> {
        let gap_start = self.virtual_sbrk_index;
        let gap_end = self.sbrk_index;
        let start = address.as_u32() as u64;
        let end = start + length as u64;

        if gap_start < gap_end && gap_start < end && start < gap_end {
            Some((gap_start.max(start) - start) as usize)
        } else {
            None
        }
    }

    /// Fills `destination` starting at `start`, wrapping past the top of the
    /// address space. Bytes copied before a fault stay in `destination`.
    pub fn load_into(&self, destination: &mut [u8], start: MemoryIndex) -> Result<(), PageFault> {
        let mut address = start;
        let mut done = 0;

        while done < destination.len() {
            let offset = address.offset_in_page();
            let length = (PAGE_SIZE - offset).min(destination.len() - done);
            let segment = &mut destination[done..done + length];

            let page_number = address.page_number();
            let page = self
                .pages
                .get(&page_number)
                .ok_or(PageFault::new(address))?;

            let gap = self.heap_gap_offset(address, length);
            let readable = gap.unwrap_or(length);
            page.load_into(&mut segment[..readable], offset)
                .map_err(|fault| page_fault(page_number, fault))?;
            if let Some(gap) = gap {
                return Err(PageFault::new(address.wrapping_add(gap as u32)));
            }

            done += length;
            address = address.wrapping_add(length as u32);
        }

        Ok(())
    }

    /// Writes `bytes` page by page. A fault on a later page leaves earlier pages written.
    pub fn store_from(&mut self, start: MemoryIndex, bytes: &[u8]) -> Result<(), PageFault> {
        let mut address = start;
        let mut done = 0;

        while done < bytes.len() {
            let offset = address.offset_in_page();
            let length = (PAGE_SIZE - offset).min(bytes.len() - done);

            if let Some(gap) = self.heap_gap_offset(address, length) {
                return Err(PageFault::new(address.wrapping_add(gap as u32)));
            }

            let page_number = address.page_number();
            let page = self
                .pages
                .get_mut(&page_number)
                .ok_or(PageFault::new(address))?;
            page.store_from(offset, &bytes[done..done + length])
                .map_err(|fault| page_fault(page_number, fault))?;

            done += length;
            address = address.wrapping_add(length as u32);
        }

        Ok(())
    }

    /// Whether a store of `length` bytes at `start` would succeed entirely.
    pub fn is_writeable(&self, start: MemoryIndex, length: usize) -> bool {
        let mut address = start;
        let mut done = 0;

        while done < length {
            let offset = address.offset_in_page();
            let segment = (PAGE_SIZE - offset).min(length - done);

            if self.heap_gap_offset(address, segment).is_some() {
                return false;
            }
            match self.pages.get(&address.page_number()) {
                Some(page) if page.is_writeable(offset, segment) => {}
                _ => return false,
            }

            done += segment;
            address = address.wrapping_add(segment as u32);
        }

        true
    }

    /// Grows the heap by `length` bytes and returns the previous cursor.
    ///
    /// Whole pages are committed when the cursor passes `sbrk_index`. On
    /// failure nothing changes.
    pub fn sbrk(&mut self, length: u64) -> Result<u64, SbrkError> {
        let previous = self.virtual_sbrk_index;
        let out_of_memory = SbrkError::OutOfMemory {
            cursor: previous,
            length,
            limit: self.end_heap_index,
        };

        let new_virtual = previous.checked_add(length).ok_or(out_of_memory)?;
        if new_virtual > self.end_heap_index {
            return Err(out_of_memory);
        }

        if new_virtual <= self.sbrk_index {
            self.virtual_sbrk_index = new_virtual;
            return Ok(previous);
        }

        let new_sbrk = new_virtual.next_multiple_of(PAGE_SIZE as u64);
        if new_sbrk > MEMORY_SIZE {
            return Err(out_of_memory);
        }

        let first = (self.sbrk_index >> PAGE_SIZE_SHIFT) as u32;
        let last = (new_sbrk >> PAGE_SIZE_SHIFT) as u32;
        for page in (first..last).filter_map(PageNumber::new) {
            self.pages
                .entry(page)
                .or_insert_with(|| MemoryPage::Writeable(WriteablePage::new()));
        }

        tracing::trace!(previous, sbrk_index = new_sbrk, "heap grew");

        self.virtual_sbrk_index = new_virtual;
        self.sbrk_index = new_sbrk;
        Ok(previous)
    }
}

fn page_fault(page: PageNumber, offset: usize) -> PageFault {
    PageFault::new(page.start_index().wrapping_add(offset as u32))
}
