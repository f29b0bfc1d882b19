use crate::core::consts::{MAX_IMMEDIATE_LENGTH, MAX_REGISTER_INDEX};
use crate::core::{BitMask, Program};
use crate::vm::instructions::opcodes::TRAP;
use crate::vm::instructions::{argument_type, ArgumentType};
use crate::vm::utils::{decode_and_extend, decode_bytes, unsigned_to_signed};

/// Decoded operands. Registers are indices, clamped to the last register;
/// immediates are sign-extended; offsets are already resolved to absolute targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Args {
    NoArgs,
    OneImmediate {
        v_x: u64,
    },
    OneRegisterOneExtendedWidthImmediate {
        r_a: usize,
        v_x: u64,
    },
    TwoImmediates {
        v_x: u64,
        v_y: u64,
    },
    OneOffset {
        target: usize,
    },
    OneRegisterOneImmediate {
        r_a: usize,
        v_x: u64,
    },
    OneRegisterTwoImmediates {
        r_a: usize,
        v_x: u64,
        v_y: u64,
    },
    OneRegisterOneImmediateOneOffset {
        r_a: usize,
        v_x: u64,
        target: usize,
    },
    TwoRegisters {
        r_d: usize,
        r_a: usize,
    },
    TwoRegistersOneImmediate {
        r_a: usize,
        r_b: usize,
        v_x: u64,
    },
    TwoRegistersOneOffset {
        r_a: usize,
        r_b: usize,
        target: usize,
    },
    TwoRegistersTwoImmediates {
        r_a: usize,
        r_b: usize,
        v_x: u64,
        v_y: u64,
    },
    ThreeRegisters {
        r_a: usize,
        r_b: usize,
        r_d: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub args: Args,
    /// Argument bytes to step over after the opcode.
    pub skip: usize,
}

#[inline(always)]
fn register(nibble: u8) -> usize {
    nibble.min(MAX_REGISTER_INDEX) as usize
}

#[inline(always)]
fn immediate_length(length: usize) -> usize {
    length.min(MAX_IMMEDIATE_LENGTH)
}

#[inline(always)]
fn offset_target(program: &Program, pc: usize, start: usize, length: usize) -> usize {
    let offset = unsigned_to_signed(decode_bytes(program, start, length), length);
    (pc as i64).wrapping_add(offset) as usize
}

/// Decodes the instruction at `pc`. Offsets that are not instruction starts
/// and offsets past the code decode as `trap`.
#[inline(always)]
pub fn decode_instruction(program: &Program, bitmask: &BitMask, pc: usize) -> Instruction {
    let opcode = match program.opcode_at(pc) {
        Some(opcode) if bitmask.is_set(pc) => opcode,
        _ => {
            return Instruction {
                opcode: TRAP,
                args: Args::NoArgs,
                skip: 0,
            }
        }
    };

    let skip = bitmask.skip(pc);
    let args = decode_args(program, pc, skip, argument_type(opcode));

    Instruction { opcode, args, skip }
}

/// Parses the argument bytes of the instruction at `pc` according to `argument_type`.
#[inline(always)]
pub fn decode_args(program: &Program, pc: usize, skip: usize, argument_type: ArgumentType) -> Args {
    match argument_type {
        ArgumentType::NoArgs => Args::NoArgs,
        ArgumentType::OneImmediate => {
            let l_x = immediate_length(skip);
            Args::OneImmediate {
                v_x: decode_and_extend(program, pc + 1, l_x),
            }
        }
        ArgumentType::OneRegisterOneExtendedWidthImmediate => Args::OneRegisterOneExtendedWidthImmediate {
            r_a: register(program[pc + 1] & 0x0F),
            v_x: decode_bytes(program, pc + 2, 8),
        },
        ArgumentType::TwoImmediates => {
            let l_x = immediate_length((program[pc + 1] % 8) as usize);
            let l_y = immediate_length(skip.saturating_sub(l_x).saturating_sub(1));
            Args::TwoImmediates {
                v_x: decode_and_extend(program, pc + 2, l_x),
                v_y: decode_and_extend(program, pc + 2 + l_x, l_y),
            }
        }
        ArgumentType::OneOffset => {
            let l_x = immediate_length(skip);
            Args::OneOffset {
                target: offset_target(program, pc, pc + 1, l_x),
            }
        }
        ArgumentType::OneRegisterOneImmediate => {
            let l_x = immediate_length(skip.saturating_sub(1));
            Args::OneRegisterOneImmediate {
                r_a: register(program[pc + 1] & 0x0F),
                v_x: decode_and_extend(program, pc + 2, l_x),
            }
        }
        ArgumentType::OneRegisterTwoImmediates => {
            let byte1 = program[pc + 1];
            let l_x = immediate_length(((byte1 >> 4) & 0x07) as usize);
            let l_y = immediate_length(skip.saturating_sub(l_x).saturating_sub(1));
            Args::OneRegisterTwoImmediates {
                r_a: register(byte1 & 0x0F),
                v_x: decode_and_extend(program, pc + 2, l_x),
                v_y: decode_and_extend(program, pc + 2 + l_x, l_y),
            }
        }
        ArgumentType::OneRegisterOneImmediateOneOffset => {
            let byte1 = program[pc + 1];
            let l_x = immediate_length(((byte1 >> 4) & 0x07) as usize);
            let l_y = immediate_length(skip.saturating_sub(l_x).saturating_sub(1));
            Args::OneRegisterOneImmediateOneOffset {
                r_a: register(byte1 & 0x0F),
                v_x: decode_and_extend(program, pc + 2, l_x),
                target: offset_target(program, pc, pc + 2 + l_x, l_y),
            }
        }
        ArgumentType::TwoRegisters => {
            let byte1 = program[pc + 1];
            Args::TwoRegisters {
                r_d: register(byte1 & 0x0F),
                r_a: register(byte1 >> 4),
            }
        }
        ArgumentType::TwoRegistersOneImmediate => {
            let byte1 = program[pc + 1];
            let l_x = immediate_length(skip.saturating_sub(1));
            Args::TwoRegistersOneImmediate {
                r_a: register(byte1 & 0x0F),
                r_b: register(byte1 >> 4),
                v_x: decode_and_extend(program, pc + 2, l_x),
            }
        }
        ArgumentType::TwoRegistersOneOffset => {
            let byte1 = program[pc + 1];
            let l_x = immediate_length(skip.saturating_sub(1));
            Args::TwoRegistersOneOffset {
                r_a: register(byte1 & 0x0F),
                r_b: register(byte1 >> 4),
                target: offset_target(program, pc, pc + 2, l_x),
            }
        }
        ArgumentType::TwoRegistersTwoImmediates => {
            let byte1 = program[pc + 1];
            let l_x = immediate_length((program[pc + 2] & 0x07) as usize);
            let l_y = immediate_length(skip.saturating_sub(l_x).saturating_sub(2));
            Args::TwoRegistersTwoImmediates {
                r_a: register(byte1 & 0x0F),
                r_b: register(byte1 >> 4),
                v_x: decode_and_extend(program, pc + 3, l_x),
                v_y: decode_and_extend(program, pc + 3 + l_x, l_y),
            }
        }
        ArgumentType::ThreeRegisters => {
            let byte1 = program[pc + 1];
            Args::ThreeRegisters {
                r_a: register(byte1 & 0x0F),
                r_b: register(byte1 >> 4),
                r_d: register(program[pc + 2]),
            }
        }
    }
}
