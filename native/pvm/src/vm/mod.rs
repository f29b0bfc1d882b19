pub mod config;
pub mod dispatchers;
pub mod execute_instruction;
pub mod instructions;
pub mod memory_wrappers;
pub mod ops;
pub mod single_step;
pub mod test_builder;
pub mod tracer;
pub mod types;
pub mod utils;
pub mod vm;

pub use config::*;
pub use instructions::*;
pub use tracer::*;
pub use types::*;
pub use vm::*;
