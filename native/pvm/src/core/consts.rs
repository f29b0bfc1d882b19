use crate::vm::instructions::opcodes::*;

pub const PAGE_SIZE_SHIFT: u32 = 14;
pub const PAGE_SIZE: usize = 1 << PAGE_SIZE_SHIFT; // 16KB
pub const MEMORY_SIZE: u64 = 1 << 32; // 4GB
pub const MAX_PAGE_NUMBER: u32 = ((MEMORY_SIZE >> PAGE_SIZE_SHIFT) - 1) as u32;

pub const NO_OF_REGISTERS: usize = 13;
pub const MAX_REGISTER_INDEX: u8 = (NO_OF_REGISTERS - 1) as u8;

pub const MAX_IMMEDIATE_LENGTH: usize = 4;
pub const MAX_SKIP: usize = 24;
// Zero bytes appended to the code so argument reads never leave the buffer.
pub const CODE_PADDING: usize = 32;

pub const JUMP_ALIGNMENT_FACTOR: u32 = 2;
pub const HALT_ADDRESS: u32 = 0xFFFF_0000;

pub const GAS_COST: u64 = 1;

pub const TERMINATION_INSTRUCTIONS: [bool; 256] = {
    let mut arr = [false; 256];

    // Trap and fallthrough
    arr[TRAP as usize] = true;
    arr[FALLTHROUGH as usize] = true;

    // Jumps
    arr[JUMP as usize] = true;
    arr[JUMP_IND as usize] = true;

    // Load-and-jumps
    arr[LOAD_IMM_JUMP as usize] = true;
    arr[LOAD_IMM_JUMP_IND as usize] = true;

    // Branches
    arr[BRANCH_EQ as usize] = true;
    arr[BRANCH_NE as usize] = true;
    arr[BRANCH_LT_U as usize] = true;
    arr[BRANCH_LT_S as usize] = true;
    arr[BRANCH_GE_U as usize] = true;
    arr[BRANCH_GE_S as usize] = true;

    arr[BRANCH_EQ_IMM as usize] = true;
    arr[BRANCH_NE_IMM as usize] = true;
    arr[BRANCH_LT_U_IMM as usize] = true;
    arr[BRANCH_LT_S_IMM as usize] = true;
    arr[BRANCH_LE_U_IMM as usize] = true;
    arr[BRANCH_LE_S_IMM as usize] = true;
    arr[BRANCH_GE_U_IMM as usize] = true;
    arr[BRANCH_GE_S_IMM as usize] = true;
    arr[BRANCH_GT_U_IMM as usize] = true;
    arr[BRANCH_GT_S_IMM as usize] = true;

    arr
};

#[inline(always)]
pub fn is_termination_instruction(opcode: u8) -> bool {
    TERMINATION_INSTRUCTIONS[opcode as usize]
}

/// Gas charged for each opcode. Unknown opcodes are charged as `trap`.
pub const GAS_COSTS: [u64; 256] = [GAS_COST; 256];

#[inline(always)]
pub fn gas_cost(opcode: u8) -> u64 {
    GAS_COSTS[opcode as usize]
}
