use std::fmt;

use crate::core::consts::{HALT_ADDRESS, JUMP_ALIGNMENT_FACTOR};
use crate::core::errors::ProgramError;
use crate::core::{BasicBlocks, BitMask, GasCounter, JumpTable, MemoryIndex, Program, Registers};
use crate::encoding::{deblob, ProgramBlob};

/// Outcome of a single instruction, consumed by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionResult {
    Continue,
    Jump(usize),
    Halt,
    Panic,
    Fault { address: MemoryIndex },
    Host { index: u32 },
}

/// Machine status after a step. Only `Ok` lets execution go on by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ok,
    Halt,
    Panic,
    OutOfGas,
    Host,
}

impl Status {
    /// `Halt`, `Panic` and `OutOfGas` end execution for good.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Halt | Status::Panic | Status::OutOfGas)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "OK",
            Status::Halt => "HALT",
            Status::Panic => "PANIC",
            Status::OutOfGas => "OOG",
            Status::Host => "HOST",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VmState {
    pub registers: Registers,
    pub pc: usize,
    pub gas: GasCounter,
}

impl VmState {
    pub fn new(registers: Registers, pc: usize, gas: u64) -> Self {
        Self {
            registers,
            pc,
            gas: GasCounter::new(gas),
        }
    }
}

/// Immutable program image: code, instruction mask, jump table and the
/// derived basic-block starts.
#[derive(Debug, Default)]
pub struct VmContext {
    pub program: Program,
    pub bitmask: BitMask,
    pub jump_table: JumpTable,
    pub basic_blocks: BasicBlocks,
}

impl VmContext {
    pub fn new(code: &[u8], mask: &[u8], jump_table: JumpTable) -> Result<Self, ProgramError> {
        if mask.len() * 8 < code.len() {
            return Err(ProgramError::MaskTooShort {
                mask_bits: mask.len() * 8,
                code_length: code.len(),
            });
        }

        let program = Program::new(code);
        let bitmask = BitMask::from_bytes(mask, program.len());
        let basic_blocks = BasicBlocks::build(&program, &bitmask);

        Ok(Self {
            program,
            bitmask,
            jump_table,
            basic_blocks,
        })
    }

    /// Builds a context from an encoded program blob.
    pub fn from_blob(blob: &[u8]) -> Result<Self, ProgramError> {
        let ProgramBlob {
            code,
            mask,
            jump_table,
        } = deblob(blob)?;
        Self::new(code, mask, jump_table)
    }

    #[inline(always)]
    pub fn branch(&self, destination: usize, should_branch: bool) -> InstructionResult {
        match (
            should_branch,
            self.basic_blocks.is_beginning_of_basic_block(destination),
        ) {
            (true, true) => InstructionResult::Jump(destination),
            (true, false) => InstructionResult::Panic,
            (false, _) => InstructionResult::Continue,
        }
    }

    /// Dynamic jump through the jump table. `HALT_ADDRESS` ends the program.
    pub fn djump(&self, address: u32) -> InstructionResult {
        match address {
            HALT_ADDRESS => InstructionResult::Halt,
            0 => InstructionResult::Panic,
            _ if address % JUMP_ALIGNMENT_FACTOR != 0 => InstructionResult::Panic,
            _ => {
                let index = (address / JUMP_ALIGNMENT_FACTOR - 1) as usize;
                match self.jump_table.get(index) {
                    Some(destination) => self.branch(destination as usize, true),
                    None => InstructionResult::Panic,
                }
            }
        }
    }
}
