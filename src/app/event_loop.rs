use std::time::Instant;

use crate::collectors::MetricSource;

use super::App;

impl<S: MetricSource> App<S> {
    /// Run the auto-refresh if the timer is due (every 5 seconds).
    /// The timer is re-armed only after the refresh returns.
    pub fn process_tick(&mut self) -> bool {
        let Some(elapsed) = self.timer.poll(Instant::now()) else {
            return false;
        };
        self.auto_refresh(elapsed);
        self.timer.rearm(Instant::now());
        true
    }
}
