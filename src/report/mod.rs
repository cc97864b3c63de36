//! Telemetry aggregation: query every metric source in a fixed order and
//! turn the results into a [`Report`], isolating failures per section.

mod format;
mod section;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::collectors::{CPU_SAMPLE_WINDOW, MetricSource, Platform, storage_mount_path};
use crate::error::QueryError;
use crate::layout::SectionId;
use crate::model::{
    BatteryReading, BatteryStatus, CpuReading, MemoryReading, NetworkReading, StorageReading,
    SystemIdentity,
};

pub use format::{format_gb, format_hours_minutes, format_mb, format_mhz, format_percent, yes_no};
pub use section::{Report, Section, SectionBody};

pub struct Telemetry<S> {
    source: S,
    mount_path: PathBuf,
    cpu_sample_window: Duration,
}

impl<S: MetricSource> Telemetry<S> {
    pub fn new(source: S) -> Self {
        Self::with_mount_path(source, storage_mount_path(Platform::current()))
    }

    pub fn with_mount_path(source: S, mount_path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            mount_path: mount_path.into(),
            cpu_sample_window: CPU_SAMPLE_WINDOW,
        }
    }

    pub fn mount_path(&self) -> &Path {
        &self.mount_path
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Collect a fresh report. Never fails: a source error becomes that
    /// section's error line, and the remaining sources are still queried.
    pub fn refresh(&mut self) -> Report {
        let started = Instant::now();
        let mut report = Report::default();

        report.push(build_section(
            SectionId::System,
            self.source.system_identity(),
            system_lines,
        ));
        report.push(build_section(
            SectionId::Cpu,
            self.source.cpu_reading(self.cpu_sample_window),
            cpu_lines,
        ));
        report.push(build_section(
            SectionId::Memory,
            self.source.memory_reading(),
            memory_lines,
        ));
        report.push(build_section(
            SectionId::Storage,
            self.source.storage_reading(&self.mount_path),
            storage_lines,
        ));
        report.push(build_section(
            SectionId::Network,
            self.source.network_reading(),
            network_lines,
        ));
        if let Some(section) = self.battery_section() {
            report.push(section);
        }

        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            sections = report.sections().len(),
            failed = report.failed_count(),
            "report refreshed"
        );
        report
    }

    /// Timer entry point. The elapsed time is ignored.
    pub fn auto_refresh(&mut self, _elapsed: Duration) -> Report {
        self.refresh()
    }

    /// Battery is best-effort: absence and failure both drop the section.
    fn battery_section(&mut self) -> Option<Section> {
        match self.source.battery_reading() {
            Ok(BatteryStatus::Present(battery)) => {
                Some(Section::new(SectionId::Battery, battery_lines(&battery)))
            }
            Ok(BatteryStatus::Absent) => None,
            Err(e) => {
                tracing::debug!(error = %e, operation = "battery_reading", "battery query failed");
                None
            }
        }
    }
}

fn build_section<T>(
    id: SectionId,
    result: Result<T, QueryError>,
    lines: fn(&T) -> Vec<String>,
) -> Section {
    match result {
        Ok(reading) => Section::new(id, lines(&reading)),
        Err(e) => {
            tracing::warn!(section = %id, error = %e, "metric query failed");
            Section::failed(id, &e)
        }
    }
}

// --- Section bodies ---

fn system_lines(s: &SystemIdentity) -> Vec<String> {
    vec![
        format!("Operating system: {} {}", s.os_name, s.release),
        format!("System version: {}", s.version),
        format!("Machine type: {}", s.machine),
        format!("Processor: {}", s.processor),
    ]
}

fn cpu_lines(c: &CpuReading) -> Vec<String> {
    let mut lines = vec![
        format!("CPU usage: {}", format_percent(c.usage_percent)),
        format!("CPU cores: {}", c.logical_cores),
    ];
    if let Some(mhz) = c.frequency_mhz {
        lines.push(format!("CPU frequency: {}", format_mhz(mhz)));
    }
    lines
}

fn memory_lines(m: &MemoryReading) -> Vec<String> {
    vec![
        format!("Total memory: {}", format_gb(m.total)),
        format!("Available memory: {}", format_gb(m.available)),
        format!("Used memory: {}", format_gb(m.used)),
        format!("Memory usage: {}", format_percent(m.usage_percent)),
    ]
}

fn storage_lines(d: &StorageReading) -> Vec<String> {
    vec![
        format!("Total storage: {}", format_gb(d.total)),
        format!("Free storage: {}", format_gb(d.free)),
        format!("Used storage: {}", format_gb(d.used)),
        format!("Storage usage: {}", format_percent(d.usage_percent)),
    ]
}

fn network_lines(n: &NetworkReading) -> Vec<String> {
    vec![
        format!("Bytes sent: {}", format_mb(n.bytes_sent)),
        format!("Bytes received: {}", format_mb(n.bytes_recv)),
    ]
}

fn battery_lines(b: &BatteryReading) -> Vec<String> {
    let mut lines = vec![
        format!("Battery level: {}", format_percent(b.percent)),
        format!("Charging: {}", yes_no(b.charging)),
    ];
    if let Some(secs) = b.time_left.remaining_secs() {
        lines.push(format!("Time remaining: {}", format_hours_minutes(secs)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BatteryTime;

    #[test]
    fn cpu_frequency_line_is_optional() {
        let with = CpuReading {
            usage_percent: 12.5,
            logical_cores: 8,
            frequency_mhz: Some(2400.0),
        };
        assert_eq!(
            cpu_lines(&with),
            ["CPU usage: 12.5%", "CPU cores: 8", "CPU frequency: 2400.0 MHz"]
        );
        let without = CpuReading {
            frequency_mhz: None,
            ..with
        };
        assert_eq!(cpu_lines(&without), ["CPU usage: 12.5%", "CPU cores: 8"]);
    }

    #[test]
    fn memory_lines_in_gigabytes() {
        let m = MemoryReading {
            total: 8_589_934_592,
            available: 4_294_967_296,
            used: 4_294_967_296,
            usage_percent: 50.0,
        };
        assert_eq!(
            memory_lines(&m),
            [
                "Total memory: 8.00 GB",
                "Available memory: 4.00 GB",
                "Used memory: 4.00 GB",
                "Memory usage: 50.0%",
            ]
        );
    }

    #[test]
    fn network_lines_in_megabytes() {
        let n = NetworkReading {
            bytes_sent: 1_048_576,
            bytes_recv: 3_145_728,
        };
        assert_eq!(
            network_lines(&n),
            ["Bytes sent: 1.00 MB", "Bytes received: 3.00 MB"]
        );
    }

    #[test]
    fn battery_time_line_only_for_estimates() {
        let mut b = BatteryReading {
            percent: 80.0,
            charging: false,
            time_left: BatteryTime::Remaining(5400),
        };
        assert_eq!(
            battery_lines(&b),
            [
                "Battery level: 80.0%",
                "Charging: No",
                "Time remaining: 1 hour 30 minutes",
            ]
        );
        b.time_left = BatteryTime::from_secs(-1);
        assert_eq!(battery_lines(&b), ["Battery level: 80.0%", "Charging: No"]);
        b.time_left = BatteryTime::Unlimited;
        b.charging = true;
        assert_eq!(battery_lines(&b), ["Battery level: 80.0%", "Charging: Yes"]);
    }
}
