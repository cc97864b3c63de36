use starship_battery::units::ratio::percent;
use starship_battery::units::time::second;
use starship_battery::{Manager, State};

use super::BatteryProbe;
use crate::error::QueryError;
use crate::model::{
    BatteryReading, BatteryStatus, BatteryTime, POWER_TIME_UNKNOWN, POWER_TIME_UNLIMITED,
};

/// Battery state from the platform power API (sysfs, IOKit, WinAPI and
/// friends) through `starship_battery`.
pub struct BatteryManagerProbe {
    manager: Manager,
}

impl BatteryManagerProbe {
    pub fn new() -> Result<Self, QueryError> {
        Ok(Self {
            manager: Manager::new()?,
        })
    }
}

impl BatteryProbe for BatteryManagerProbe {
    fn probe(&self) -> Result<BatteryStatus, QueryError> {
        // First battery only; hosts with none report Absent.
        let Some(battery) = self.manager.batteries()?.next() else {
            return Ok(BatteryStatus::Absent);
        };
        let battery = battery?;
        let reading = battery_reading(
            battery.state_of_charge().get::<percent>() as f64,
            battery.state(),
            battery.time_to_empty().map(|t| t.get::<second>() as f64),
        );
        Ok(BatteryStatus::Present(reading))
    }
}

/// Raw seconds left, sentinels included: unlimited while on external
/// power, unknown when the platform gives no estimate.
pub fn raw_seconds_left(state: State, time_to_empty: Option<f64>) -> i64 {
    if is_plugged(state) {
        return POWER_TIME_UNLIMITED;
    }
    match time_to_empty {
        Some(secs) if secs.is_finite() && secs >= 0.0 => secs as i64,
        _ => POWER_TIME_UNKNOWN,
    }
}

pub fn battery_reading(
    state_of_charge: f64,
    state: State,
    time_to_empty: Option<f64>,
) -> BatteryReading {
    BatteryReading {
        percent: super::round_percent(state_of_charge),
        charging: is_plugged(state),
        time_left: BatteryTime::from_secs(raw_seconds_left(state, time_to_empty)),
    }
}

fn is_plugged(state: State) -> bool {
    matches!(state, State::Charging | State::Full)
}
