/// Whole-second countdown owned by a timed phase
///
/// Never goes below zero. [`Countdown::tick`] reports the tick that brings
/// the count to zero, so the owner can fire its transition in the same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    /// Restart from `seconds`
    pub fn reset(&mut self, seconds: u32) {
        self.remaining = seconds;
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Decrement by one second. Returns `true` only on the tick that
    /// reaches zero; ticking an expired countdown is a no-op.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}
