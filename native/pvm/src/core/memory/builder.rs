use std::collections::BTreeMap;

use crate::core::consts::{MEMORY_SIZE, PAGE_SIZE, PAGE_SIZE_SHIFT};
use crate::core::memory::{
    Memory, MemoryBuilderError, MemoryIndex, MemoryPage, PageNumber, ReadablePage, VirtualPage,
    WriteablePage,
};

/// Lays out the initial pages of a `Memory`. Single use: every call after
/// `finalize` fails.
#[derive(Debug, Default)]
pub struct MemoryBuilder {
    pages: BTreeMap<PageNumber, MemoryPage>,
    finalized: bool,
}

impl MemoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_not_finalized(&self) -> Result<(), MemoryBuilderError> {
        if self.finalized {
            return Err(MemoryBuilderError::AlreadyFinalized);
        }
        Ok(())
    }

    /// Pages covering `length` bytes from the page-aligned `start`.
    fn page_range(
        start: MemoryIndex,
        length: u64,
        data: &[u8],
    ) -> Result<Vec<PageNumber>, MemoryBuilderError> {
        if !start.is_page_aligned() || length % PAGE_SIZE as u64 != 0 {
            return Err(MemoryBuilderError::UnalignedPageRange { start, length });
        }
        let end = range_end(start, length)?;
        if data.len() as u64 > length {
            return Err(MemoryBuilderError::DataTooLong {
                start,
                length,
                data_length: data.len(),
            });
        }

        let first = start.page_number().as_u32();
        let last = (end >> PAGE_SIZE_SHIFT) as u32;
        Ok((first..last).filter_map(PageNumber::new).collect())
    }

    fn set_pages(
        &mut self,
        start: MemoryIndex,
        length: u64,
        data: &[u8],
        make_page: impl Fn(&[u8]) -> MemoryPage,
    ) -> Result<&mut Self, MemoryBuilderError> {
        self.ensure_not_finalized()?;
        let pages = Self::page_range(start, length, data)?;

        if let Some(page) = pages.iter().find(|page| self.pages.contains_key(page)) {
            return Err(MemoryBuilderError::PageAlreadyDeclared(*page));
        }

        for (i, page) in pages.into_iter().enumerate() {
            let from = (i * PAGE_SIZE).min(data.len());
            let to = ((i + 1) * PAGE_SIZE).min(data.len());
            self.pages.insert(page, make_page(&data[from..to]));
        }

        Ok(self)
    }

    /// Declares whole read-only pages over `length` bytes from `start`, filled from `data`.
    pub fn set_readable_pages(
        &mut self,
        start: MemoryIndex,
        length: u64,
        data: &[u8],
    ) -> Result<&mut Self, MemoryBuilderError> {
        self.set_pages(start, length, data, |chunk| {
            MemoryPage::Readable(ReadablePage::new(chunk))
        })
    }

    /// Declares whole writeable pages over `length` bytes from `start`, filled from `data`.
    pub fn set_writeable_pages(
        &mut self,
        start: MemoryIndex,
        length: u64,
        data: &[u8],
    ) -> Result<&mut Self, MemoryBuilderError> {
        self.set_pages(start, length, data, |chunk| {
            MemoryPage::Writeable(WriteablePage::with_data(chunk))
        })
    }

    fn set_chunk(
        &mut self,
        start: MemoryIndex,
        length: u64,
        data: &[u8],
        writeable: bool,
    ) -> Result<&mut Self, MemoryBuilderError> {
        self.ensure_not_finalized()?;
        range_end(start, length)?;
        let chunk_start = start.offset_in_page();
        if chunk_start as u64 + length > PAGE_SIZE as u64 {
            return Err(MemoryBuilderError::ChunkTooLong { start, length });
        }
        if data.len() as u64 > length {
            return Err(MemoryBuilderError::DataTooLong {
                start,
                length,
                data_length: data.len(),
            });
        }

        let page_number = start.page_number();
        let chunk_end = chunk_start + length as usize;

        let page = self
            .pages
            .entry(page_number)
            .or_insert_with(|| MemoryPage::Virtual(VirtualPage::new()));
        match &mut *page {
            MemoryPage::Virtual(virtual_page) => {
                if !virtual_page.add_chunk(chunk_start, chunk_end, writeable) {
                    return Err(MemoryBuilderError::ChunkOverlap { start, length });
                }
            }
            _ => return Err(MemoryBuilderError::PageAlreadyDeclared(page_number)),
        }
        page.write_initial(chunk_start, data);

        Ok(self)
    }

    /// Declares a read-only chunk of `length` bytes at `start` inside a single page.
    pub fn set_readable(
        &mut self,
        start: MemoryIndex,
        length: u64,
        data: &[u8],
    ) -> Result<&mut Self, MemoryBuilderError> {
        self.set_chunk(start, length, data, false)
    }

    /// Declares a writeable chunk of `length` bytes at `start` inside a single page.
    pub fn set_writeable(
        &mut self,
        start: MemoryIndex,
        length: u64,
        data: &[u8],
    ) -> Result<&mut Self, MemoryBuilderError> {
        self.set_chunk(start, length, data, true)
    }

    /// Copies `data` into already declared pages, ignoring their permissions.
    pub fn set_data(
        &mut self,
        start: MemoryIndex,
        data: &[u8],
    ) -> Result<&mut Self, MemoryBuilderError> {
        self.ensure_not_finalized()?;

        let mut segments = Vec::new();
        let mut address = start;
        let mut done = 0;
        while done < data.len() {
            let offset = address.offset_in_page();
            let length = (PAGE_SIZE - offset).min(data.len() - done);
            let page_number = address.page_number();
            if !self.pages.contains_key(&page_number) {
                return Err(MemoryBuilderError::PageMissing(page_number));
            }
            segments.push((page_number, offset, done..done + length));
            done += length;
            address = address.wrapping_add(length as u32);
        }

        for (page_number, offset, range) in segments {
            if let Some(page) = self.pages.get_mut(&page_number) {
                page.write_initial(offset, &data[range]);
            }
        }

        Ok(self)
    }

    /// Produces the memory. `heap_length` bytes from the page-aligned
    /// `sbrk_index` are reserved for heap growth and must not contain any
    /// declared page.
    pub fn finalize(
        &mut self,
        sbrk_index: MemoryIndex,
        heap_length: u64,
    ) -> Result<Memory, MemoryBuilderError> {
        self.ensure_not_finalized()?;
        if !sbrk_index.is_page_aligned() {
            return Err(MemoryBuilderError::UnalignedHeapStart(sbrk_index));
        }
        let end_heap_index = match (sbrk_index.as_u32() as u64).checked_add(heap_length) {
            Some(end) if end <= MEMORY_SIZE => end,
            _ => {
                return Err(MemoryBuilderError::InvalidHeapRange {
                    start: sbrk_index,
                    length: heap_length,
                })
            }
        };

        let first = sbrk_index.page_number();
        let last = (end_heap_index.next_multiple_of(PAGE_SIZE as u64) >> PAGE_SIZE_SHIFT) as u32;
        if let Some(page) = self
            .pages
            .range(first..)
            .next()
            .map(|(page, _)| *page)
            .filter(|page| page.as_u32() < last)
        {
            return Err(MemoryBuilderError::HeapRangeNotEmpty(page));
        }

        self.finalized = true;
        let pages = std::mem::take(&mut self.pages);

        tracing::debug!(
            pages = pages.len(),
            sbrk_index = %sbrk_index,
            end_heap_index,
            "memory finalized"
        );

        Ok(Memory::from_parts(
            pages,
            sbrk_index.as_u32() as u64,
            end_heap_index,
        ))
    }
}

/// Exclusive end of `length` bytes from `start`; at most 2^32.
fn range_end(start: MemoryIndex, length: u64) -> Result<u64, MemoryBuilderError> {
    match (start.as_u32() as u64).checked_add(length) {
        Some(end) if length > 0 && end <= MEMORY_SIZE => Ok(end),
        _ => Err(MemoryBuilderError::InvalidRange { start, length }),
    }
}
