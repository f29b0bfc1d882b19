//! Gas-metered PVM interpreter.
//!
//! [`core`] holds the machine state: registers, gas, the paged memory model
//! and the program image. [`vm`] decodes and executes instructions on top of it.

pub mod core;
pub mod encoding;
pub mod vm;

pub use crate::core::{Memory, MemoryBuilder, MemoryIndex, PageFault, Registers};
pub use crate::vm::{InterpreterConfig, Status, Vm, VmContext};
