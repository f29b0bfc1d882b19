use super::opcodes::*;

/// Layout of the argument bytes that follow an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentType {
    NoArgs,
    OneImmediate,
    OneRegisterOneExtendedWidthImmediate,
    TwoImmediates,
    OneOffset,
    OneRegisterOneImmediate,
    OneRegisterTwoImmediates,
    OneRegisterOneImmediateOneOffset,
    TwoRegisters,
    TwoRegistersOneImmediate,
    TwoRegistersOneOffset,
    TwoRegistersTwoImmediates,
    ThreeRegisters,
}

static ARGUMENT_TYPES: [Option<ArgumentType>; 256] = {
    let mut table = [None; 256];

    // No args instructions
    table[TRAP as usize] = Some(ArgumentType::NoArgs);
    table[FALLTHROUGH as usize] = Some(ArgumentType::NoArgs);

    // One immediate instructions
    table[ECALLI as usize] = Some(ArgumentType::OneImmediate);

    // One register + extended width immediate instructions
    table[LOAD_IMM_64 as usize] = Some(ArgumentType::OneRegisterOneExtendedWidthImmediate);

    // Two immediates instructions
    table[STORE_IMM_U8 as usize] = Some(ArgumentType::TwoImmediates);
    table[STORE_IMM_U16 as usize] = Some(ArgumentType::TwoImmediates);
    table[STORE_IMM_U32 as usize] = Some(ArgumentType::TwoImmediates);
    table[STORE_IMM_U64 as usize] = Some(ArgumentType::TwoImmediates);

    // One offset instructions
    table[JUMP as usize] = Some(ArgumentType::OneOffset);

    // Register + immediate instructions
    table[JUMP_IND as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[LOAD_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[LOAD_U8 as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[LOAD_I8 as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[LOAD_U16 as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[LOAD_I16 as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[LOAD_U32 as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[LOAD_I32 as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[LOAD_U64 as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[STORE_U8 as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[STORE_U16 as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[STORE_U32 as usize] = Some(ArgumentType::OneRegisterOneImmediate);
    table[STORE_U64 as usize] = Some(ArgumentType::OneRegisterOneImmediate);

    // Register + two immediates instructions
    table[STORE_IMM_IND_U8 as usize] = Some(ArgumentType::OneRegisterTwoImmediates);
    table[STORE_IMM_IND_U16 as usize] = Some(ArgumentType::OneRegisterTwoImmediates);
    table[STORE_IMM_IND_U32 as usize] = Some(ArgumentType::OneRegisterTwoImmediates);
    table[STORE_IMM_IND_U64 as usize] = Some(ArgumentType::OneRegisterTwoImmediates);

    // Register + immediate + offset instructions
    table[LOAD_IMM_JUMP as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);
    table[BRANCH_EQ_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);
    table[BRANCH_NE_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);
    table[BRANCH_LT_U_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);
    table[BRANCH_LE_U_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);
    table[BRANCH_GE_U_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);
    table[BRANCH_GT_U_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);
    table[BRANCH_LT_S_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);
    table[BRANCH_LE_S_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);
    table[BRANCH_GE_S_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);
    table[BRANCH_GT_S_IMM as usize] = Some(ArgumentType::OneRegisterOneImmediateOneOffset);

    // Two registers instructions
    table[MOVE_REG as usize] = Some(ArgumentType::TwoRegisters);
    table[SBRK as usize] = Some(ArgumentType::TwoRegisters);
    table[COUNT_SET_BITS_64 as usize] = Some(ArgumentType::TwoRegisters);
    table[COUNT_SET_BITS_32 as usize] = Some(ArgumentType::TwoRegisters);
    table[LEADING_ZERO_BITS_64 as usize] = Some(ArgumentType::TwoRegisters);
    table[LEADING_ZERO_BITS_32 as usize] = Some(ArgumentType::TwoRegisters);
    table[TRAILING_ZERO_BITS_64 as usize] = Some(ArgumentType::TwoRegisters);
    table[TRAILING_ZERO_BITS_32 as usize] = Some(ArgumentType::TwoRegisters);
    table[SIGN_EXTEND_8 as usize] = Some(ArgumentType::TwoRegisters);
    table[SIGN_EXTEND_16 as usize] = Some(ArgumentType::TwoRegisters);
    table[ZERO_EXTEND_16 as usize] = Some(ArgumentType::TwoRegisters);
    table[REVERSE_BYTES as usize] = Some(ArgumentType::TwoRegisters);

    // Two registers + one immediate instructions
    table[STORE_IND_U8 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[STORE_IND_U16 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[STORE_IND_U32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[STORE_IND_U64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[LOAD_IND_U8 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[LOAD_IND_I8 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[LOAD_IND_U16 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[LOAD_IND_I16 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[LOAD_IND_U32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[LOAD_IND_I32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[LOAD_IND_U64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[ADD_IMM_32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[AND_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[XOR_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[OR_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[MUL_IMM_32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SET_LT_U_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SET_LT_S_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHLO_L_IMM_32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHLO_R_IMM_32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHAR_R_IMM_32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[NEG_ADD_IMM_32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SET_GT_U_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SET_GT_S_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHLO_L_IMM_ALT_32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHLO_R_IMM_ALT_32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHAR_R_IMM_ALT_32 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[CMOV_IZ_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[CMOV_NZ_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[ADD_IMM_64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[MUL_IMM_64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHLO_L_IMM_64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHLO_R_IMM_64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHAR_R_IMM_64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[NEG_ADD_IMM_64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHLO_L_IMM_ALT_64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHLO_R_IMM_ALT_64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[SHAR_R_IMM_ALT_64 as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[ROT_R_64_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[ROT_R_64_IMM_ALT as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[ROT_R_32_IMM as usize] = Some(ArgumentType::TwoRegistersOneImmediate);
    table[ROT_R_32_IMM_ALT as usize] = Some(ArgumentType::TwoRegistersOneImmediate);

    // Two registers + one offset instructions
    table[BRANCH_EQ as usize] = Some(ArgumentType::TwoRegistersOneOffset);
    table[BRANCH_NE as usize] = Some(ArgumentType::TwoRegistersOneOffset);
    table[BRANCH_LT_U as usize] = Some(ArgumentType::TwoRegistersOneOffset);
    table[BRANCH_LT_S as usize] = Some(ArgumentType::TwoRegistersOneOffset);
    table[BRANCH_GE_U as usize] = Some(ArgumentType::TwoRegistersOneOffset);
    table[BRANCH_GE_S as usize] = Some(ArgumentType::TwoRegistersOneOffset);

    // Two registers + two immediates instructions
    table[LOAD_IMM_JUMP_IND as usize] = Some(ArgumentType::TwoRegistersTwoImmediates);

    // Three registers instructions
    table[ADD_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[SUB_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[MUL_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[DIV_U_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[DIV_S_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[REM_U_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[REM_S_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[SHLO_L_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[SHLO_R_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[SHAR_R_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[ADD_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[SUB_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[MUL_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[DIV_U_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[DIV_S_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[REM_U_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[REM_S_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[SHLO_L_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[SHLO_R_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[SHAR_R_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[AND as usize] = Some(ArgumentType::ThreeRegisters);
    table[XOR as usize] = Some(ArgumentType::ThreeRegisters);
    table[OR as usize] = Some(ArgumentType::ThreeRegisters);
    table[MUL_UPPER_S_S as usize] = Some(ArgumentType::ThreeRegisters);
    table[MUL_UPPER_U_U as usize] = Some(ArgumentType::ThreeRegisters);
    table[MUL_UPPER_S_U as usize] = Some(ArgumentType::ThreeRegisters);
    table[SET_LT_U as usize] = Some(ArgumentType::ThreeRegisters);
    table[SET_LT_S as usize] = Some(ArgumentType::ThreeRegisters);
    table[CMOV_IZ as usize] = Some(ArgumentType::ThreeRegisters);
    table[CMOV_NZ as usize] = Some(ArgumentType::ThreeRegisters);
    table[ROT_L_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[ROT_L_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[ROT_R_64 as usize] = Some(ArgumentType::ThreeRegisters);
    table[ROT_R_32 as usize] = Some(ArgumentType::ThreeRegisters);
    table[AND_INV as usize] = Some(ArgumentType::ThreeRegisters);
    table[OR_INV as usize] = Some(ArgumentType::ThreeRegisters);
    table[XNOR as usize] = Some(ArgumentType::ThreeRegisters);
    table[MAX as usize] = Some(ArgumentType::ThreeRegisters);
    table[MAX_U as usize] = Some(ArgumentType::ThreeRegisters);
    table[MIN as usize] = Some(ArgumentType::ThreeRegisters);
    table[MIN_U as usize] = Some(ArgumentType::ThreeRegisters);

    table
};

/// Argument layout of `opcode`. Unknown opcodes take no arguments and trap.
#[inline(always)]
pub fn argument_type(opcode: u8) -> ArgumentType {
    ARGUMENT_TYPES[opcode as usize].unwrap_or(ArgumentType::NoArgs)
}

#[inline(always)]
pub fn is_valid_opcode(opcode: u8) -> bool {
    ARGUMENT_TYPES[opcode as usize].is_some()
}
