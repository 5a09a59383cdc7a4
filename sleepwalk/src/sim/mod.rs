//! Logical time for deterministic runs.
//!
//! A [`SimClock`] starts at zero and only moves when a sleep advances it.
//! Providers hold a [`WeakSimClock`] so a dropped clock is observable as
//! [`TimeError::Shutdown`] instead of a silent hang.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use sleepwalk_core::TimeError;

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    sleeps: u64,
}

/// Owning handle to a logical clock.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    state: Rc<RefCell<ClockState>>,
}

impl SimClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of sleeps that advanced this clock.
    pub fn sleep_count(&self) -> u64 {
        self.state.borrow().sleeps
    }

    /// Non-owning handle for providers.
    pub fn downgrade(&self) -> WeakSimClock {
        WeakSimClock {
            state: Rc::downgrade(&self.state),
        }
    }
}

/// Non-owning handle to a [`SimClock`].
#[derive(Debug, Clone)]
pub struct WeakSimClock {
    state: Weak<RefCell<ClockState>>,
}

impl WeakSimClock {
    fn upgrade(&self) -> Result<Rc<RefCell<ClockState>>, TimeError> {
        self.state.upgrade().ok_or(TimeError::Shutdown)
    }

    /// Move the clock forward by `duration`, returning the new time.
    ///
    /// Fails with [`TimeError::ClockOverflow`], leaving the clock untouched,
    /// when the new time would not fit in a [`Duration`].
    pub fn advance(&self, duration: Duration) -> Result<Duration, TimeError> {
        let state = self.upgrade()?;
        let mut state = state.borrow_mut();
        state.now = state
            .now
            .checked_add(duration)
            .ok_or(TimeError::ClockOverflow)?;
        state.sleeps += 1;
        Ok(state.now)
    }

    /// Current logical time.
    pub fn now(&self) -> Result<Duration, TimeError> {
        let state = self.upgrade()?;
        let now = state.borrow().now;
        Ok(now)
    }
}
