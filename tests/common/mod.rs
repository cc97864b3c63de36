// Shared test helpers: an in-memory metric source with scripted results.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use hostglance::QueryError;
use hostglance::collectors::MetricSource;
use hostglance::model::*;

pub struct ScriptedSource {
    pub system: Result<SystemIdentity, QueryError>,
    pub cpu: Result<CpuReading, QueryError>,
    pub memory: Result<MemoryReading, QueryError>,
    pub storage: Result<StorageReading, QueryError>,
    pub network: Result<NetworkReading, QueryError>,
    pub battery: Result<BatteryStatus, QueryError>,
    pub calls: usize,
    pub last_mount_path: Option<PathBuf>,
    pub last_sample_window: Option<Duration>,
}

impl ScriptedSource {
    pub fn healthy() -> Self {
        Self {
            system: Ok(SystemIdentity {
                os_name: "Linux".into(),
                release: "6.8.0".into(),
                version: "#1 SMP PREEMPT_DYNAMIC".into(),
                machine: "x86_64".into(),
                processor: "Test CPU @ 3.00GHz".into(),
            }),
            cpu: Ok(CpuReading {
                usage_percent: 12.5,
                logical_cores: 8,
                frequency_mhz: Some(3000.0),
            }),
            memory: Ok(MemoryReading {
                total: 8_589_934_592,
                available: 4_294_967_296,
                used: 3_221_225_472,
                usage_percent: 50.0,
            }),
            storage: Ok(StorageReading {
                mount_point: "/".into(),
                total: 107_374_182_400,
                free: 53_687_091_200,
                used: 53_687_091_200,
                usage_percent: 50.0,
            }),
            network: Ok(NetworkReading {
                bytes_sent: 1_048_576,
                bytes_recv: 10_485_760,
            }),
            battery: Ok(BatteryStatus::Absent),
            calls: 0,
            last_mount_path: None,
            last_sample_window: None,
        }
    }

    pub fn with_battery(mut self, battery: BatteryReading) -> Self {
        self.battery = Ok(BatteryStatus::Present(battery));
        self
    }

    fn tick(&mut self) {
        self.calls += 1;
    }
}

impl MetricSource for ScriptedSource {
    fn system_identity(&mut self) -> Result<SystemIdentity, QueryError> {
        self.tick();
        self.system.clone()
    }

    fn cpu_reading(&mut self, sample_window: Duration) -> Result<CpuReading, QueryError> {
        self.tick();
        self.last_sample_window = Some(sample_window);
        self.cpu.clone()
    }

    fn memory_reading(&mut self) -> Result<MemoryReading, QueryError> {
        self.tick();
        self.memory.clone()
    }

    fn storage_reading(&mut self, mount_path: &Path) -> Result<StorageReading, QueryError> {
        self.tick();
        self.last_mount_path = Some(mount_path.to_path_buf());
        self.storage.clone()
    }

    fn network_reading(&mut self) -> Result<NetworkReading, QueryError> {
        self.tick();
        self.network.clone()
    }

    fn battery_reading(&mut self) -> Result<BatteryStatus, QueryError> {
        self.tick();
        self.battery.clone()
    }
}

/// Header lines of a rendered report, in order.
pub fn headers(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.starts_with("===")).collect()
}

/// Lines between `header` and the next blank line.
pub fn section_body<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|l| *l != header)
        .skip(1)
        .take_while(|l| !l.is_empty())
        .collect()
}
