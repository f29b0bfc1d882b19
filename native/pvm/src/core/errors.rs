use thiserror::Error;

/// Rejected program images.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("Instruction mask covers {mask_bits} bytes but the code has {code_length}")]
    MaskTooShort { mask_bits: usize, code_length: usize },
    #[error("Invalid jump table entry size: {0}")]
    InvalidJumpTableEntrySize(usize),
    #[error("Jump table of {length} bytes is not a multiple of the entry size {entry_size}")]
    JumpTableTruncated { length: usize, entry_size: usize },
    #[error("Program blob truncated: needed {needed} bytes, {available} available")]
    BlobTruncated { needed: usize, available: usize },
}
