//! Program blob layout: `E(|j|) ++ E1(z) ++ E(|c|) ++ E_z(j) ++ c ++ k`, where
//! `E` is the variable-length natural encoding, `j` the jump table with
//! `z`-byte entries, `c` the code and `k` the packed instruction mask.

mod decoder;
mod encoder;

pub use decoder::*;
pub use encoder::*;
