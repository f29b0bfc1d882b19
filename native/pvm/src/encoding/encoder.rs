/// Packs code, mask bytes and jump table into a program blob.
pub fn encode_program(code: &[u8], mask: &[u8], jump_table: &[u32], entry_size: u8) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(
        16 + code.len() + mask.len() + jump_table.len() * entry_size as usize,
    );

    encode_integer(jump_table.len() as u64, &mut encoded);
    encoded.push(entry_size);
    encode_integer(code.len() as u64, &mut encoded);

    for &entry in jump_table {
        encoded.extend_from_slice(&entry.to_le_bytes()[..entry_size as usize]);
    }

    encoded.extend_from_slice(code);
    encoded.extend_from_slice(mask);
    encoded
}

/// Shortest variable-length encoding of `x`.
pub fn encode_integer(x: u64, out: &mut Vec<u8>) {
    // l extra bytes hold values below 2^(7 * (l + 1))
    let l = match x {
        0 => 0,
        _ => ((63 - x.leading_zeros()) / 7) as usize,
    };

    if l >= 8 {
        out.push(0xFF);
        out.extend_from_slice(&x.to_le_bytes());
        return;
    }

    let marker = 256 - (1u64 << (8 - l)) + (x >> (8 * l));
    out.push(marker as u8);
    out.extend_from_slice(&x.to_le_bytes()[..l]);
}
