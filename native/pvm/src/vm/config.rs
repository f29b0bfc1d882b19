/// Environment variable that turns on per-step tracing.
pub const TRACE_ENV_VAR: &str = "PVM_TRACE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Record a `(pc, opcode, gas)` entry for every executed instruction.
    pub trace: bool,
}

impl InterpreterConfig {
    pub fn from_env() -> Self {
        let trace = std::env::var(TRACE_ENV_VAR)
            .map(|value| value == "true" || value == "1")
            .unwrap_or(false);
        Self { trace }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
