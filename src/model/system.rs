// --- Per-domain readings ---

/// Static identity of the host operating system.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemIdentity {
    pub os_name: String,
    pub release: String,
    pub version: String,
    pub machine: String,
    pub processor: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CpuReading {
    pub usage_percent: f64,
    pub logical_cores: usize,
    /// Current frequency in MHz; `None` where the host does not expose it.
    pub frequency_mhz: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryReading {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub usage_percent: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StorageReading {
    pub mount_point: String,
    pub total: u64,
    pub free: u64,
    pub used: u64,
    pub usage_percent: f64,
}

/// Cumulative counters summed over every interface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkReading {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

// --- Battery ---

/// Raw provider value meaning "remaining time cannot be estimated".
pub const POWER_TIME_UNKNOWN: i64 = -1;
/// Raw provider value meaning "on external power, no discharge".
pub const POWER_TIME_UNLIMITED: i64 = -2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryTime {
    Remaining(u64),
    Unlimited,
    Unknown,
}

impl BatteryTime {
    /// Map a raw seconds value, sentinels included, onto a `BatteryTime`.
    pub fn from_secs(secs: i64) -> Self {
        match secs {
            POWER_TIME_UNLIMITED => BatteryTime::Unlimited,
            s if s < 0 => BatteryTime::Unknown,
            s => BatteryTime::Remaining(s as u64),
        }
    }

    /// Seconds left, only when the value is an actual estimate.
    pub fn remaining_secs(self) -> Option<u64> {
        match self {
            BatteryTime::Remaining(s) => Some(s),
            BatteryTime::Unlimited | BatteryTime::Unknown => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BatteryReading {
    pub percent: f64,
    pub charging: bool,
    pub time_left: BatteryTime,
}

/// Outcome of a battery query that did not fail: hosts without battery
/// hardware report `Absent`, which is not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum BatteryStatus {
    Present(BatteryReading),
    Absent,
}
