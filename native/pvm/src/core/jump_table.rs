use crate::core::errors::ProgramError;

/// Destinations reachable through dynamic jumps, indexed by `(address / 2) - 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpTable {
    destinations: Vec<u32>,
}

impl JumpTable {
    pub fn new(destinations: Vec<u32>) -> Self {
        Self { destinations }
    }

    /// Decodes a packed table of little-endian entries `entry_size` bytes wide.
    pub fn from_bytes(bytes: &[u8], entry_size: usize) -> Result<Self, ProgramError> {
        if entry_size == 0 {
            return if bytes.is_empty() {
                Ok(Self::default())
            } else {
                Err(ProgramError::InvalidJumpTableEntrySize(entry_size))
            };
        }
        if entry_size > 4 {
            return Err(ProgramError::InvalidJumpTableEntrySize(entry_size));
        }
        if bytes.len() % entry_size != 0 {
            return Err(ProgramError::JumpTableTruncated {
                length: bytes.len(),
                entry_size,
            });
        }

        let destinations = bytes
            .chunks(entry_size)
            .map(|entry| {
                let mut buf = [0u8; 4];
                buf[..entry.len()].copy_from_slice(entry);
                u32::from_le_bytes(buf)
            })
            .collect();

        Ok(Self { destinations })
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.destinations.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl From<Vec<u32>> for JumpTable {
    fn from(destinations: Vec<u32>) -> Self {
        Self::new(destinations)
    }
}
