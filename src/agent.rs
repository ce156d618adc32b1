use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::Rng;

/// Plays a precomputed path back one cell at a time, spaced out in real time.
///
/// The step delay is redrawn uniformly from `[min_delay_ms, max_delay_ms)` on
/// every poll, not once per step: the wait actually served is whatever
/// threshold happens to be in effect on the tick where the elapsed time
/// finally crosses it.
#[derive(Debug, Clone)]
pub struct AgentScheduler {
    steps: VecDeque<i32>,
    last_step: Instant,
    delay: Duration,
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl AgentScheduler {
    /// Take ownership of the remaining steps of a path.
    /// The caller keeps the cell the agent currently stands on out of `steps`.
    pub fn new(steps: Vec<i32>, now: Instant, min_delay_ms: u64, max_delay_ms: u64) -> Self {
        AgentScheduler {
            steps: steps.into(),
            last_step: now,
            delay: Duration::from_millis(max_delay_ms),
            min_delay_ms,
            max_delay_ms,
        }
    }

    /// Advance the playback clock; returns the next cell when a step is due.
    /// At most one cell is released per call.
    pub fn poll(&mut self, now: Instant, rng: &mut impl Rng) -> Option<i32> {
        self.delay = Duration::from_millis(rng.gen_range(self.min_delay_ms..self.max_delay_ms));

        if self.steps.is_empty() {
            return None;
        }
        if now.duration_since(self.last_step) >= self.delay {
            self.last_step = now;
            return self.steps.pop_front();
        }
        None
    }

    /// Steps not yet played back
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}
