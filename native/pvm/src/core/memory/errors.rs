use thiserror::Error;

use crate::core::memory::{MemoryIndex, PageNumber};

/// First inaccessible address of a failed load or store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Page fault at address {address}")]
pub struct PageFault {
    pub address: MemoryIndex,
}

impl PageFault {
    pub fn new(address: MemoryIndex) -> Self {
        Self { address }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SbrkError {
    #[error("Heap exhausted: cursor {cursor:#x} cannot grow by {length} bytes (limit {limit:#x})")]
    OutOfMemory { cursor: u64, length: u64, limit: u64 },
}

/// Errors raised while laying out the initial memory. Ranges are given as a
/// start address and a length, so they may end exactly at 2^32.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryBuilderError {
    #[error("Builder was already finalized")]
    AlreadyFinalized,
    #[error("Page range of {length} bytes at {start} is not page aligned")]
    UnalignedPageRange { start: MemoryIndex, length: u64 },
    #[error("Invalid range of {length} bytes at {start}")]
    InvalidRange { start: MemoryIndex, length: u64 },
    #[error("Page {0} is already declared")]
    PageAlreadyDeclared(PageNumber),
    #[error("Chunk of {length} bytes at {start} does not fit in a single page")]
    ChunkTooLong { start: MemoryIndex, length: u64 },
    #[error("Chunk of {length} bytes at {start} overlaps an existing chunk")]
    ChunkOverlap { start: MemoryIndex, length: u64 },
    #[error("Data of {data_length} bytes does not fit in {length} bytes at {start}")]
    DataTooLong {
        start: MemoryIndex,
        length: u64,
        data_length: usize,
    },
    #[error("Page {0} is not declared")]
    PageMissing(PageNumber),
    #[error("Heap start {0} is not page aligned")]
    UnalignedHeapStart(MemoryIndex),
    #[error("Heap of {length} bytes at {start} runs past the address space")]
    InvalidHeapRange { start: MemoryIndex, length: u64 },
    #[error("Page {0} lies inside the reserved heap range")]
    HeapRangeNotEmpty(PageNumber),
}
