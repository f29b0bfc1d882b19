use crate::vm::instructions::opcodes::*;
use crate::vm::ops::bit;
use crate::vm::{InstructionResult, Vm};

#[inline(always)]
pub fn dispatch_two_registers(opcode: u8, r_d: usize, r_a: usize, vm: &mut Vm) -> InstructionResult {
    let w_a = vm.state.registers.get_u64(r_a);

    let result = match opcode {
        MOVE_REG => w_a,
        SBRK => return handle_sbrk(w_a, r_d, vm),
        COUNT_SET_BITS_64 => bit::count_set_bits_64(w_a),
        COUNT_SET_BITS_32 => bit::count_set_bits_32(w_a),
        LEADING_ZERO_BITS_64 => bit::leading_zero_bits_64(w_a),
        LEADING_ZERO_BITS_32 => bit::leading_zero_bits_32(w_a),
        TRAILING_ZERO_BITS_64 => bit::trailing_zero_bits_64(w_a),
        TRAILING_ZERO_BITS_32 => bit::trailing_zero_bits_32(w_a),
        SIGN_EXTEND_8 => bit::sign_extend_8(w_a),
        SIGN_EXTEND_16 => bit::sign_extend_16(w_a),
        ZERO_EXTEND_16 => bit::zero_extend_16(w_a),
        REVERSE_BYTES => bit::reverse_bytes(w_a),
        _ => return InstructionResult::Panic,
    };

    vm.state.registers.set_u64(r_d, result);
    InstructionResult::Continue
}

/// Writes the previous heap cursor to `r_d`, or zero when the heap is exhausted.
#[inline(always)]
fn handle_sbrk(length: u64, r_d: usize, vm: &mut Vm) -> InstructionResult {
    let previous = match vm.memory.sbrk(length) {
        Ok(previous) => previous,
        Err(error) => {
            tracing::debug!(%error, "sbrk failed");
            0
        }
    };

    vm.state.registers.set_u64(r_d, previous);
    InstructionResult::Continue
}
