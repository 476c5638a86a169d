//! Discrete feedback pulse fired on every committed page step.

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

pub trait Feedback {
    fn pulse(&mut self);
}

/// Rings the terminal bell, the closest thing a terminal has to a haptic tap.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Feedback for TerminalBell {
    fn pulse(&mut self) {
        let mut stdout = io::stdout();
        if let Err(err) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            tracing::debug!("bell write failed: {err}");
        }
    }
}

#[derive(Debug, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn pulse(&mut self) {}
}

/// Counts pulses. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct PulseCounter {
    pulses: Rc<Cell<usize>>,
}

impl PulseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.pulses.get()
    }
}

impl Feedback for PulseCounter {
    fn pulse(&mut self) {
        self.pulses.set(self.pulses.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_clones_share_state() {
        let counter = PulseCounter::new();
        let mut handle = counter.clone();
        handle.pulse();
        handle.pulse();
        assert_eq!(counter.count(), 2);
    }
}
