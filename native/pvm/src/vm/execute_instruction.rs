use crate::vm::dispatchers::{
    no_args::dispatch_no_args, one_immediate::dispatch_one_immediate,
    one_offset::dispatch_one_offset, reg_extended_immediate::dispatch_reg_extended_immediate,
    reg_imm_offset::dispatch_reg_immediate_offset, reg_immediate::dispatch_reg_immediate,
    reg_two_imm::dispatch_reg_two_imm, three_registers::dispatch_three_registers,
    two_immediates::dispatch_two_immediates, two_registers::dispatch_two_registers,
    two_registers_one_immediate::dispatch_two_registers_one_immediate,
    two_registers_one_offset::dispatch_two_registers_one_offset,
    two_registers_two_immediates::dispatch_two_registers_two_immediates,
};
use crate::vm::{Args, Instruction, InstructionResult, Vm};

impl Vm {
    #[inline(always)]
    pub fn execute_instruction(&mut self, instruction: &Instruction) -> InstructionResult {
        let opcode = instruction.opcode;

        match instruction.args {
            Args::NoArgs => dispatch_no_args(opcode),
            Args::OneImmediate { v_x } => dispatch_one_immediate(opcode, v_x),
            Args::OneRegisterOneExtendedWidthImmediate { r_a, v_x } => {
                dispatch_reg_extended_immediate(opcode, r_a, v_x, self)
            }
            Args::TwoImmediates { v_x, v_y } => dispatch_two_immediates(opcode, v_x, v_y, self),
            Args::OneOffset { target } => dispatch_one_offset(opcode, target, &self.context),
            Args::OneRegisterOneImmediate { r_a, v_x } => {
                dispatch_reg_immediate(opcode, r_a, v_x, self)
            }
            Args::OneRegisterTwoImmediates { r_a, v_x, v_y } => {
                dispatch_reg_two_imm(opcode, r_a, v_x, v_y, self)
            }
            Args::OneRegisterOneImmediateOneOffset { r_a, v_x, target } => {
                dispatch_reg_immediate_offset(opcode, r_a, v_x, target, self)
            }
            Args::TwoRegisters { r_d, r_a } => dispatch_two_registers(opcode, r_d, r_a, self),
            Args::TwoRegistersOneImmediate { r_a, r_b, v_x } => {
                dispatch_two_registers_one_immediate(opcode, r_a, r_b, v_x, self)
            }
            Args::TwoRegistersOneOffset { r_a, r_b, target } => {
                dispatch_two_registers_one_offset(opcode, r_a, r_b, target, self)
            }
            Args::TwoRegistersTwoImmediates { r_a, r_b, v_x, v_y } => {
                dispatch_two_registers_two_immediates(opcode, r_a, r_b, v_x, v_y, self)
            }
            Args::ThreeRegisters { r_a, r_b, r_d } => {
                dispatch_three_registers(opcode, r_a, r_b, r_d, self)
            }
        }
    }
}
