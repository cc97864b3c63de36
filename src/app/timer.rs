use std::time::{Duration, Instant};

/// Fixed period between automatic refreshes.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(5);

/// Repeating timer polled by the event loop.
///
/// The next tick is measured from when the previous callback *returned*
/// (`rearm`), so a slow refresh can never overlap the next one; ticks that
/// would have fired in the meantime are dropped, not queued.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    period: Duration,
    armed_at: Option<Instant>,
}

impl RefreshTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed_at: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Start (or restart) the countdown from `now`.
    pub fn rearm(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }

    /// Time since arming if a tick is due, else `None`. An unarmed timer
    /// never fires.
    pub fn poll(&self, now: Instant) -> Option<Duration> {
        let armed_at = self.armed_at?;
        let elapsed = now.saturating_duration_since(armed_at);
        (elapsed >= self.period).then_some(elapsed)
    }

    /// How long the event loop may wait before the next tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        match self.armed_at {
            Some(armed_at) => self
                .period
                .saturating_sub(now.saturating_duration_since(armed_at)),
            None => self.period,
        }
    }
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new(REFRESH_PERIOD)
    }
}
