use crate::core::errors::ProgramError;
use crate::core::JumpTable;

/// A program blob split into its parts. The mask is left packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramBlob<'a> {
    pub code: &'a [u8],
    pub mask: &'a [u8],
    pub jump_table: JumpTable,
}

pub fn deblob(bin: &[u8]) -> Result<ProgramBlob<'_>, ProgramError> {
    let (jump_len, rest) = decode_next_integer(bin)?;
    let (z, rest) = take(rest, 1)?;
    let (code_len, rest) = decode_next_integer(rest)?;

    let entry_size = z[0] as usize;
    let table_bytes = (jump_len as usize).saturating_mul(entry_size);
    let (table, rest) = take(rest, table_bytes)?;
    let jump_table = JumpTable::from_bytes(table, entry_size)?;

    let (code, mask) = take(rest, code_len as usize)?;

    Ok(ProgramBlob {
        code,
        mask,
        jump_table,
    })
}

/// Decodes one variable-length natural. The count of leading one bits in the
/// first byte is the number of little-endian bytes that follow.
pub fn decode_next_integer(bin: &[u8]) -> Result<(u64, &[u8]), ProgramError> {
    let (prefix, rest) = take(bin, 1)?;
    let prefix = prefix[0];
    let l = prefix.leading_ones() as usize;

    if l == 8 {
        let (bytes, rest) = take(rest, 8)?;
        return Ok((decode_le(bytes), rest));
    }

    let (bytes, rest) = take(rest, l)?;
    let high = (prefix & (0x7F >> l)) as u64;
    Ok(((high << (8 * l)) | decode_le(bytes), rest))
}

#[inline(always)]
fn decode_le(bin: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[..bin.len()].copy_from_slice(bin);
    u64::from_le_bytes(buf)
}

#[inline(always)]
fn take(bin: &[u8], count: usize) -> Result<(&[u8], &[u8]), ProgramError> {
    if bin.len() < count {
        return Err(ProgramError::BlobTruncated {
            needed: count,
            available: bin.len(),
        });
    }
    Ok(bin.split_at(count))
}
