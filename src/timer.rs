//! Deterministic repeating timer driven by explicit time steps.
//!
//! The host advances the clock with [`Timer::advance`] (usually once per
//! frame) and gets back how many times the pending interval fired. Only one
//! interval can be pending: [`Timer::start`] cancels the previous one before
//! scheduling the new one.

use std::time::Duration;

use tracing::trace;

/// Handle of a scheduled repeating action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    id: u64,
    period: Duration,
    deadline: Duration,
}

impl Interval {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Clock time at which this interval fires next.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[derive(Debug, Default)]
pub struct Timer {
    now: Duration,
    pending: Option<Interval>,
    next_id: u64,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the timer was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> Option<&Interval> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancels any pending interval, then schedules a new one firing every
    /// `period` from now. Returns the id of the new interval.
    pub fn start(&mut self, period: Duration) -> u64 {
        self.cancel();

        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(Interval {
            id,
            period,
            deadline: self.now + period,
        });
        trace!(id, period_ms = period.as_millis() as u64, "interval scheduled");
        id
    }

    /// Drops the pending interval. Returns `false` if there was none.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(interval) => {
                trace!(id = interval.id, "interval cancelled");
                true
            }
            None => false,
        }
    }

    /// Moves the clock forward by `dt` and returns the number of times the
    /// pending interval fired during that step.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.now += dt;

        let Some(interval) = self.pending.as_mut() else {
            return 0;
        };
        if interval.period.is_zero() {
            return 0;
        }

        let mut fired = 0;
        while interval.deadline <= self.now {
            interval.deadline += interval.period;
            fired += 1;
        }
        if fired > 0 {
            trace!(id = interval.id, fired, "interval fired");
        }
        fired
    }

    /// Time left until the pending interval fires, if any.
    pub fn remaining(&self) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|interval| interval.deadline.saturating_sub(self.now))
    }
}
