//! Typed-text reveal.
//!
//! A small state machine that discloses a string one character per interval
//! after a start delay. It owns no timer: the host advances it with elapsed
//! time, so the same code runs under `setInterval` in the browser and under a
//! simulated clock in tests.

use crate::constants::{TYPED_DELAY_MS, TYPED_INTERVAL_MS, TYPED_MIN_INTERVAL_MS};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypedTextConfig {
    pub interval: Duration,
    pub delay: Duration,
}

impl Default for TypedTextConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(TYPED_INTERVAL_MS),
            delay: Duration::from_millis(TYPED_DELAY_MS),
        }
    }
}

impl TypedTextConfig {
    pub fn new(interval: Duration, delay: Duration) -> Self {
        Self { interval, delay }
    }

    #[inline]
    fn effective_interval(&self) -> Duration {
        self.interval.max(Duration::from_millis(TYPED_MIN_INTERVAL_MS))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Pending { remaining: Duration },
    Revealing { until_next: Duration },
    Done,
}

/// One newly revealed prefix, timestamped from mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Emission {
    pub at: Duration,
    pub revealed_len: usize,
}

pub type Emissions = SmallVec<[Emission; 4]>;

/// Immutable view handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedTextSnapshot {
    pub text: String,
    pub revealed_len: usize,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct TypedText {
    full: String,
    // byte offset of every char boundary after the first, ending at full.len()
    boundaries: Vec<usize>,
    config: TypedTextConfig,
    revealed_len: usize,
    elapsed: Duration,
    phase: Phase,
}

impl TypedText {
    pub fn new(text: impl Into<String>, config: TypedTextConfig) -> Self {
        let mut t = Self {
            full: String::new(),
            boundaries: Vec::new(),
            config,
            revealed_len: 0,
            elapsed: Duration::ZERO,
            phase: Phase::Done,
        };
        t.load(text.into());
        t
    }

    fn load(&mut self, text: String) {
        self.boundaries = text
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .filter(|_| !text.is_empty())
            .collect();
        self.full = text;
        self.restart();
    }

    /// Start the run over with the current text and config.
    pub fn restart(&mut self) {
        self.revealed_len = 0;
        self.elapsed = Duration::ZERO;
        self.phase = if self.boundaries.is_empty() {
            Phase::Done
        } else {
            Phase::Pending {
                remaining: self.config.delay,
            }
        };
    }

    /// Replace the target. A different string restarts from empty.
    pub fn set_text(&mut self, text: &str) -> bool {
        if text == self.full {
            return false;
        }
        log::debug!("[typed] retarget to {:?}", text);
        self.load(text.to_owned());
        true
    }

    pub fn set_config(&mut self, config: TypedTextConfig) -> bool {
        if config == self.config {
            return false;
        }
        self.config = config;
        self.restart();
        true
    }

    /// Consume `dt` of elapsed time, returning every prefix revealed within it.
    pub fn advance(&mut self, dt: Duration) -> Emissions {
        let mut out = Emissions::new();
        let mut budget = dt;
        let interval = self.config.effective_interval();
        loop {
            match self.phase {
                Phase::Pending { remaining } => {
                    if budget < remaining {
                        self.phase = Phase::Pending {
                            remaining: remaining - budget,
                        };
                        self.elapsed += budget;
                        break;
                    }
                    budget -= remaining;
                    self.elapsed += remaining;
                    self.phase = Phase::Revealing {
                        until_next: interval,
                    };
                }
                Phase::Revealing { until_next } => {
                    if budget < until_next {
                        self.phase = Phase::Revealing {
                            until_next: until_next - budget,
                        };
                        self.elapsed += budget;
                        break;
                    }
                    budget -= until_next;
                    self.elapsed += until_next;
                    self.revealed_len += 1;
                    out.push(Emission {
                        at: self.elapsed,
                        revealed_len: self.revealed_len,
                    });
                    self.phase = if self.revealed_len >= self.boundaries.len() {
                        Phase::Done
                    } else {
                        Phase::Revealing {
                            until_next: interval,
                        }
                    };
                }
                Phase::Done => {
                    self.elapsed += budget;
                    break;
                }
            }
        }
        out
    }

    /// Time until the next character is due; `None` once nothing is scheduled.
    pub fn next_due(&self) -> Option<Duration> {
        match self.phase {
            Phase::Pending { remaining } => Some(remaining + self.config.effective_interval()),
            Phase::Revealing { until_next } => Some(until_next),
            Phase::Done => None,
        }
    }

    pub fn revealed(&self) -> &str {
        self.prefix(self.revealed_len)
    }

    /// The first `len` characters of the target.
    pub fn prefix(&self, len: usize) -> &str {
        match len.min(self.boundaries.len()) {
            0 => "",
            n => &self.full[..self.boundaries[n - 1]],
        }
    }

    #[inline]
    pub fn revealed_len(&self) -> usize {
        self.revealed_len
    }

    #[inline]
    pub fn char_len(&self) -> usize {
        self.boundaries.len()
    }

    #[inline]
    pub fn full_text(&self) -> &str {
        &self.full
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn config(&self) -> TypedTextConfig {
        self.config
    }

    pub fn snapshot(&self) -> TypedTextSnapshot {
        TypedTextSnapshot {
            text: self.revealed().to_owned(),
            revealed_len: self.revealed_len,
            done: self.is_done(),
        }
    }
}
