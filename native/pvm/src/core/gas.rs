pub type Gas = u64;

/// Remaining execution budget. Subtraction never wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GasCounter {
    remaining: Gas,
}

impl GasCounter {
    pub fn new(initial: Gas) -> Self {
        Self { remaining: initial }
    }

    #[inline(always)]
    pub fn get(&self) -> Gas {
        self.remaining
    }

    pub fn set(&mut self, value: Gas) {
        self.remaining = value;
    }

    #[inline(always)]
    pub fn add(&mut self, cost: Gas) {
        self.remaining = self.remaining.saturating_add(cost);
    }

    /// Deducts `cost`. Returns `true` on underflow, leaving the counter at zero.
    #[inline(always)]
    pub fn sub(&mut self, cost: Gas) -> bool {
        match self.remaining.checked_sub(cost) {
            Some(remaining) => {
                self.remaining = remaining;
                false
            }
            None => {
                self.remaining = 0;
                true
            }
        }
    }
}
