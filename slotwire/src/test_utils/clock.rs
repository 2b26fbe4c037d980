/// A clock that always reports the same instant, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now_ms: u64,
}

impl FixedClock {
    /// Create a clock frozen at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self { now_ms }
    }

    /// The frozen instant.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
