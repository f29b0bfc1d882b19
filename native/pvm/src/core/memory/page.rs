use crate::core::consts::PAGE_SIZE;

fn zeroed_page() -> Box<[u8]> {
    vec![0u8; PAGE_SIZE].into_boxed_slice()
}

/// Page with fixed content. Every store faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadablePage {
    data: Box<[u8]>,
}

impl ReadablePage {
    pub fn new(initial: &[u8]) -> Self {
        let mut data = zeroed_page();
        let len = initial.len().min(PAGE_SIZE);
        data[..len].copy_from_slice(&initial[..len]);
        Self { data }
    }
}

/// Zero-initialised page. Bytes never written read as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteablePage {
    data: Box<[u8]>,
}

impl WriteablePage {
    pub fn new() -> Self {
        Self {
            data: zeroed_page(),
        }
    }

    pub fn with_data(initial: &[u8]) -> Self {
        let mut page = Self::new();
        page.write(0, &initial[..initial.len().min(PAGE_SIZE)]);
        page
    }

    fn write(&mut self, offset: usize, src: &[u8]) {
        self.data[offset..offset + src.len()].copy_from_slice(src);
    }
}

impl Default for WriteablePage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
    pub writeable: bool,
}

impl Chunk {
    fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}

/// Page split into declared chunks. Anything outside a chunk faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualPage {
    data: Box<[u8]>,
    chunks: Vec<Chunk>,
}

impl VirtualPage {
    pub fn new() -> Self {
        Self {
            data: zeroed_page(),
            chunks: Vec::new(),
        }
    }

    /// Declares `[start, end)`. Returns `false` if it overlaps an existing chunk.
    pub fn add_chunk(&mut self, start: usize, end: usize, writeable: bool) -> bool {
        if self.chunks.iter().any(|chunk| chunk.overlaps(start, end)) {
            return false;
        }
        let position = self.chunks.partition_point(|chunk| chunk.start < start);
        self.chunks.insert(
            position,
            Chunk {
                start,
                end,
                writeable,
            },
        );
        true
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    fn chunk_at(&self, offset: usize) -> Option<&Chunk> {
        self.chunks.iter().find(|chunk| chunk.contains(offset))
    }

    /// First offset in `[offset, end)` not covered by a suitable chunk.
    fn first_inaccessible(&self, offset: usize, end: usize, needs_write: bool) -> Option<usize> {
        let mut position = offset;
        while position < end {
            match self.chunk_at(position) {
                Some(chunk) if chunk.writeable || !needs_write => position = chunk.end,
                _ => return Some(position),
            }
        }
        None
    }
}

impl Default for VirtualPage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryPage {
    Readable(ReadablePage),
    Writeable(WriteablePage),
    Virtual(VirtualPage),
}

impl MemoryPage {
    fn data(&self) -> &[u8] {
        match self {
            MemoryPage::Readable(page) => &page.data,
            MemoryPage::Writeable(page) => &page.data,
            MemoryPage::Virtual(page) => &page.data,
        }
    }

    /// Copies `dst.len()` bytes from `offset`. On failure returns the first
    /// unreadable offset; bytes before it are already copied.
    #[inline]
    pub fn load_into(&self, dst: &mut [u8], offset: usize) -> Result<(), usize> {
        let end = offset + dst.len();
        let readable_end = match self {
            MemoryPage::Virtual(page) => page.first_inaccessible(offset, end, false),
            _ => None,
        };
        let copy_end = readable_end.unwrap_or(end);
        dst[..copy_end - offset].copy_from_slice(&self.data()[offset..copy_end]);

        match readable_end {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    /// Writes `src` at `offset`, or returns the first offset that rejects the
    /// write without touching the page.
    #[inline]
    pub fn store_from(&mut self, offset: usize, src: &[u8]) -> Result<(), usize> {
        if let Some(fault) = self.first_unwriteable(offset, src.len()) {
            return Err(fault);
        }
        self.write_initial(offset, src);
        Ok(())
    }

    pub fn is_writeable(&self, offset: usize, length: usize) -> bool {
        self.first_unwriteable(offset, length).is_none()
    }

    fn first_unwriteable(&self, offset: usize, length: usize) -> Option<usize> {
        if length == 0 {
            return None;
        }
        match self {
            MemoryPage::Readable(_) => Some(offset),
            MemoryPage::Writeable(_) => None,
            MemoryPage::Virtual(page) => page.first_inaccessible(offset, offset + length, true),
        }
    }

    /// Writes regardless of permissions. Used while laying out memory.
    pub(crate) fn write_initial(&mut self, offset: usize, src: &[u8]) {
        match self {
            MemoryPage::Readable(page) => {
                page.data[offset..offset + src.len()].copy_from_slice(src)
            }
            MemoryPage::Writeable(page) => page.write(offset, src),
            MemoryPage::Virtual(page) => {
                page.data[offset..offset + src.len()].copy_from_slice(src)
            }
        }
    }

    /// Page-sized copy of the contents.
    pub fn dump(&self) -> Vec<u8> {
        self.data().to_vec()
    }
}
