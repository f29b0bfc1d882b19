mod args;
mod argument_type;
pub mod opcodes;

pub use args::*;
pub use argument_type::*;
