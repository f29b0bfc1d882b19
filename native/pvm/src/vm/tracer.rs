use crate::core::Gas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
    pub pc: usize,
    pub opcode: u8,
    /// Gas left before the instruction was charged.
    pub gas: Gas,
}

/// Execution log kept when tracing is enabled. It is unbounded: entries
/// accumulate across `run_program` calls until `reset` clears them.
#[derive(Debug, Clone, Default)]
pub struct Tracer {
    entries: Vec<TraceEntry>,
}

impl Tracer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn record(&mut self, pc: usize, opcode: u8, gas: Gas) {
        self.entries.push(TraceEntry { pc, opcode, gas });
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
