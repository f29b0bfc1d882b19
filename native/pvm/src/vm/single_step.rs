use crate::core::consts::gas_cost;
use crate::vm::instructions::decode_instruction;
use crate::vm::instructions::opcodes::TRAP;
use crate::vm::{InstructionResult, Status, Vm};

impl Vm {
    /// Executes one instruction from `next_pc`. Terminal statuses are sticky;
    /// a `Host` status resumes past the `ecalli`.
    pub fn next_step(&mut self) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }
        self.status = Status::Ok;
        self.exit_param = None;

        let pc = self.next_pc;
        self.state.pc = pc;

        let instruction = decode_instruction(&self.context.program, &self.context.bitmask, pc);
        let gas = self.state.gas.get();

        tracing::trace!(pc, opcode = instruction.opcode, gas, "step");
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.record(pc, instruction.opcode, gas);
        }

        if self.state.gas.sub(gas_cost(instruction.opcode)) {
            return self.terminate(Status::OutOfGas);
        }

        let following = pc.wrapping_add(1 + instruction.skip);
        match self.execute_instruction(&instruction) {
            InstructionResult::Continue => self.next_pc = following,
            InstructionResult::Jump(target) => self.next_pc = target,
            InstructionResult::Halt => return self.terminate(Status::Halt),
            InstructionResult::Panic => return self.terminate(Status::Panic),
            InstructionResult::Fault { address } => {
                self.state.gas.sub(gas_cost(TRAP));
                self.exit_param = Some(address.as_u32());
                return self.terminate(Status::Panic);
            }
            InstructionResult::Host { index } => {
                self.next_pc = following;
                self.exit_param = Some(index);
                self.status = Status::Host;
                tracing::debug!(pc, index, gas = self.state.gas.get(), "host call");
            }
        }

        self.status
    }

    fn terminate(&mut self, status: Status) -> Status {
        self.status = status;
        tracing::debug!(
            %status,
            pc = self.state.pc,
            gas = self.state.gas.get(),
            exit_param = ?self.exit_param,
            "pvm terminated"
        );
        status
    }
}
