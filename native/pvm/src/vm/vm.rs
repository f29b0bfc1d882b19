use std::sync::Arc;

use crate::core::{Gas, GasCounter, Memory, PageNumber, Registers};
use crate::vm::{InterpreterConfig, Status, Tracer, VmContext, VmState};

/// A single interpreter instance. Owns its registers, gas and memory; the
/// program image is shared.
#[derive(Debug)]
pub struct Vm {
    pub context: Arc<VmContext>,
    pub state: VmState,
    pub memory: Memory,
    pub(crate) next_pc: usize,
    pub(crate) status: Status,
    pub(crate) exit_param: Option<u32>,
    config: InterpreterConfig,
    pub(crate) tracer: Option<Tracer>,
}

impl Vm {
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            context: Arc::new(VmContext::default()),
            state: VmState::default(),
            memory: Memory::new(),
            next_pc: 0,
            status: Status::Ok,
            exit_param: None,
            config,
            tracer: config.trace.then(Tracer::new),
        }
    }

    /// Loads `context` and starts over at `pc` with `gas`. Registers and memory
    /// are copied from the arguments when given, otherwise zeroed.
    pub fn reset(
        &mut self,
        context: Arc<VmContext>,
        pc: usize,
        gas: Gas,
        registers: Option<&Registers>,
        memory: Option<&Memory>,
    ) {
        tracing::info!(
            code_length = context.program.len(),
            jump_table = context.jump_table.len(),
            pc,
            gas,
            "pvm reset"
        );

        self.context = context;
        self.state = VmState::new(registers.copied().unwrap_or_default(), pc, gas);
        match memory {
            Some(memory) => self.memory.copy_from(memory),
            None => self.memory = Memory::new(),
        }
        self.next_pc = pc;
        self.status = Status::Ok;
        self.exit_param = None;
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.clear();
        }
    }

    /// Steps until the machine leaves `Ok`. A `Host` status can be resumed by
    /// calling this again once the host call is serviced.
    pub fn run_program(&mut self) -> Status {
        loop {
            let status = self.next_step();
            if status != Status::Ok {
                return status;
            }
        }
    }

    pub fn config(&self) -> InterpreterConfig {
        self.config
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.state.registers
    }

    /// Address of the last fetched instruction.
    pub fn pc(&self) -> usize {
        self.state.pc
    }

    /// Address the next step starts from.
    pub fn next_pc(&self) -> usize {
        self.next_pc
    }

    pub fn set_next_pc(&mut self, pc: usize) {
        self.next_pc = pc;
    }

    pub fn gas(&self) -> Gas {
        self.state.gas.get()
    }

    pub fn gas_counter_mut(&mut self) -> &mut GasCounter {
        &mut self.state.gas
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn memory_page(&self, page: u32) -> Option<Vec<u8>> {
        self.memory.get_page_dump(PageNumber::new(page)?)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Fault address after a memory fault, host-call index after `Host`.
    pub fn exit_param(&self) -> Option<u32> {
        self.exit_param
    }

    pub fn tracer(&self) -> Option<&Tracer> {
        self.tracer.as_ref()
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}
