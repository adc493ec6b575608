//! Offer countdown
//!
//! Decrements once per tick and saturates at zero.

use std::time::Duration;

/// Length of the offer window shown on the page (24 hours)
pub const DEFAULT_OFFER_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Tick interval of the countdown display
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Remaining time split for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl std::fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.days > 0 {
            write!(
                f,
                "{}d {:02}:{:02}:{:02}",
                self.days, self.hours, self.minutes, self.seconds
            )
        } else {
            write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: Duration,
}

impl Countdown {
    pub fn new(window: Duration) -> Self {
        Self { remaining: window }
    }

    /// Advance by one `step`.
    ///
    /// Returns true only on the tick that reaches zero.
    pub fn tick(&mut self, step: Duration) -> bool {
        if self.remaining.is_zero() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(step);
        self.remaining.is_zero()
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining.is_zero()
    }

    pub fn parts(&self) -> CountdownParts {
        let total = self.remaining.as_secs();
        CountdownParts {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_OFFER_WINDOW)
    }
}
