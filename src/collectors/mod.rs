use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::QueryError;
use crate::model::{
    BatteryStatus, CpuReading, MemoryReading, NetworkReading, StorageReading, SystemIdentity,
};

pub mod battery;
pub mod host;

pub use battery::BatteryManagerProbe;
pub use host::SysinfoSource;

/// Window over which CPU utilization is sampled.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Per-domain queries against the host metrics provider.
/// Every call either returns a complete reading or fails on its own;
/// implementations never retry.
pub trait MetricSource {
    fn system_identity(&mut self) -> Result<SystemIdentity, QueryError>;

    /// Blocks for `sample_window` so the figure reflects current load
    /// rather than an average since boot.
    fn cpu_reading(&mut self, sample_window: Duration) -> Result<CpuReading, QueryError>;

    fn memory_reading(&mut self) -> Result<MemoryReading, QueryError>;

    fn storage_reading(&mut self, mount_path: &Path) -> Result<StorageReading, QueryError>;

    fn network_reading(&mut self) -> Result<NetworkReading, QueryError>;

    /// `Ok(BatteryStatus::Absent)` on hosts without battery hardware.
    fn battery_reading(&mut self) -> Result<BatteryStatus, QueryError>;
}

/// Battery lookup, chosen once at startup.
pub trait BatteryProbe {
    fn probe(&self) -> Result<BatteryStatus, QueryError>;
}

/// Stand-in when the platform power API cannot be opened.
pub struct NoBattery;

impl BatteryProbe for NoBattery {
    fn probe(&self) -> Result<BatteryStatus, QueryError> {
        Ok(BatteryStatus::Absent)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Android,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }
}

/// Path whose filesystem the Storage section reports on.
pub fn storage_mount_path(platform: Platform) -> PathBuf {
    match platform {
        Platform::Windows => PathBuf::from("C:\\"),
        Platform::Android => PathBuf::from("/data"),
        Platform::Other => PathBuf::from("/"),
    }
}

/// Pick the entry whose mount point is the deepest one containing `path`.
pub fn containing_mount<T>(
    items: impl IntoIterator<Item = T>,
    path: &Path,
    mount_of: impl Fn(&T) -> &Path,
) -> Option<T> {
    items
        .into_iter()
        .filter(|item| path.starts_with(mount_of(item)))
        .max_by_key(|item| mount_of(item).components().count())
}

/// Percentage rounded to one decimal place; 0 when `total` is 0.
pub fn usage_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_percent(used as f64 / total as f64 * 100.0)
}

pub fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
