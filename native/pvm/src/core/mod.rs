mod basic_blocks;
mod bitmask;
pub mod consts;
pub mod errors;
mod gas;
mod jump_table;
pub mod memory;
mod program;
mod registers;

pub use basic_blocks::*;
pub use bitmask::*;
pub use gas::*;
pub use jump_table::*;
pub use memory::{
    Memory, MemoryBuilder, MemoryBuilderError, MemoryIndex, MemoryPage, PageFault, PageNumber,
    ReadablePage, SbrkError, VirtualPage, WriteablePage,
};
pub use program::*;
pub use registers::*;
