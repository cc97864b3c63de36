// Live metric source backed by sysinfo.

use std::path::Path;
use std::time::Duration;

use sysinfo::{Disks, Networks, System};
use tracing::instrument;

use super::{BatteryManagerProbe, BatteryProbe, MetricSource, NoBattery, containing_mount, round_percent, usage_percent};
use crate::error::QueryError;
use crate::model::{
    BatteryStatus, CpuReading, MemoryReading, NetworkReading, StorageReading, SystemIdentity,
};

pub struct SysinfoSource {
    sys: System,
    disks: Disks,
    networks: Networks,
    battery: Box<dyn BatteryProbe>,
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoSource {
    pub fn new() -> Self {
        let battery: Box<dyn BatteryProbe> = match BatteryManagerProbe::new() {
            Ok(probe) => Box::new(probe),
            Err(e) => {
                tracing::debug!(error = %e, "battery manager unavailable");
                Box::new(NoBattery)
            }
        };
        Self::with_battery_probe(battery)
    }

    pub fn with_battery_probe(battery: Box<dyn BatteryProbe>) -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();
        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            battery,
        }
    }

    fn processor_name(&self) -> String {
        self.sys
            .cpus()
            .first()
            .map(|c| c.brand().trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Unknown".into())
    }
}

/// Family name the way `uname -s` spells it, not the distribution.
fn os_family(os: &str) -> String {
    match os {
        "linux" => "Linux".into(),
        "macos" => "Darwin".into(),
        "windows" => "Windows".into(),
        "freebsd" => "FreeBSD".into(),
        "android" => "Android".into(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => "Unknown".into(),
            }
        }
    }
}

/// Kernel release on Unix; on Windows the product release ("10", "11")
/// rather than the build number.
fn os_release() -> Option<String> {
    if cfg!(target_os = "windows") {
        System::os_version()
            .and_then(|v| v.split_whitespace().next().map(str::to_string))
    } else {
        System::kernel_version()
    }
}

impl MetricSource for SysinfoSource {
    #[instrument(skip(self), fields(source = "sysinfo", operation = "system_identity"))]
    fn system_identity(&mut self) -> Result<SystemIdentity, QueryError> {
        Ok(SystemIdentity {
            os_name: os_family(std::env::consts::OS),
            release: os_release().unwrap_or_else(|| "Unknown".into()),
            version: System::long_os_version()
                .or_else(System::os_version)
                .unwrap_or_else(|| "Unknown".into()),
            machine: std::env::consts::ARCH.to_string(),
            processor: self.processor_name(),
        })
    }

    #[instrument(skip(self), fields(source = "sysinfo", operation = "cpu_reading"))]
    fn cpu_reading(&mut self, sample_window: Duration) -> Result<CpuReading, QueryError> {
        self.sys.refresh_cpu_all();
        std::thread::sleep(sample_window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        self.sys.refresh_cpu_all();

        let cpus = self.sys.cpus();
        if cpus.is_empty() {
            return Err(QueryError::new("no CPU information available"));
        }
        let frequency = cpus.first().map(|c| c.frequency()).unwrap_or(0);

        Ok(CpuReading {
            usage_percent: round_percent(self.sys.global_cpu_usage() as f64),
            logical_cores: cpus.len(),
            frequency_mhz: (frequency > 0).then_some(frequency as f64),
        })
    }

    #[instrument(skip(self), fields(source = "sysinfo", operation = "memory_reading"))]
    fn memory_reading(&mut self) -> Result<MemoryReading, QueryError> {
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        if total == 0 {
            return Err(QueryError::new("total memory reported as zero"));
        }
        let available = self.sys.available_memory();

        Ok(MemoryReading {
            total,
            available,
            used: self.sys.used_memory(),
            usage_percent: usage_percent(total.saturating_sub(available), total),
        })
    }

    #[instrument(skip(self), fields(source = "sysinfo", operation = "storage_reading"))]
    fn storage_reading(&mut self, mount_path: &Path) -> Result<StorageReading, QueryError> {
        self.disks.refresh(true);

        let disk = containing_mount(self.disks.list(), mount_path, |d| d.mount_point())
            .ok_or_else(|| {
                QueryError::new(format!("no filesystem mounted at {}", mount_path.display()))
            })?;

        let total = disk.total_space();
        let free = disk.available_space();
        let used = total.saturating_sub(free);

        Ok(StorageReading {
            mount_point: disk.mount_point().to_string_lossy().into_owned(),
            total,
            free,
            used,
            usage_percent: usage_percent(used, total),
        })
    }

    #[instrument(skip(self), fields(source = "sysinfo", operation = "network_reading"))]
    fn network_reading(&mut self) -> Result<NetworkReading, QueryError> {
        self.networks.refresh(true);

        let interfaces = self.networks.list();
        if interfaces.is_empty() {
            return Err(QueryError::new("no network interfaces found"));
        }

        let (bytes_sent, bytes_recv) = interfaces
            .values()
            .fold((0u64, 0u64), |(tx, rx), data| {
                (
                    tx.saturating_add(data.total_transmitted()),
                    rx.saturating_add(data.total_received()),
                )
            });

        Ok(NetworkReading {
            bytes_sent,
            bytes_recv,
        })
    }

    #[instrument(skip(self), fields(source = "battery", operation = "battery_reading"))]
    fn battery_reading(&mut self) -> Result<BatteryStatus, QueryError> {
        self.battery.probe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn source() -> SysinfoSource {
        SysinfoSource::with_battery_probe(Box::new(NoBattery))
    }

    #[test]
    fn cpu_reading_blocks_for_sample_window() {
        let window = Duration::from_millis(300);
        let mut source = source();
        let started = Instant::now();
        let cpu = source.cpu_reading(window).unwrap();
        assert!(started.elapsed() >= window);
        assert!(cpu.logical_cores > 0);
        assert!(cpu.usage_percent >= 0.0);
    }

    #[test]
    fn os_family_is_not_the_distribution() {
        assert_eq!(os_family("linux"), "Linux");
        assert_eq!(os_family("macos"), "Darwin");
        assert_eq!(os_family("windows"), "Windows");
        assert_eq!(os_family("openbsd"), "Openbsd");
    }

    #[test]
    fn system_identity_names_the_os_family() {
        let identity = source().system_identity().unwrap();
        assert_eq!(identity.os_name, os_family(std::env::consts::OS));
        assert_eq!(identity.machine, std::env::consts::ARCH);
        assert!(!identity.release.is_empty());
    }

    struct FixedBattery(BatteryStatus);

    impl BatteryProbe for FixedBattery {
        fn probe(&self) -> Result<BatteryStatus, QueryError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn injected_probe_answers_battery_queries() {
        assert_eq!(source().battery_reading().unwrap(), BatteryStatus::Absent);

        let present = BatteryStatus::Present(crate::model::BatteryReading {
            percent: 64.0,
            charging: false,
            time_left: crate::model::BatteryTime::Unknown,
        });
        let mut source = SysinfoSource::with_battery_probe(Box::new(FixedBattery(present.clone())));
        assert_eq!(source.battery_reading().unwrap(), present);
    }
}
