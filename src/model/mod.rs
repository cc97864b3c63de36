// Re-export all model types from submodules.

pub use app::{CONTENT_PADDING, DisplayState, Frame, PLACEHOLDER_TEXT, UIState};
pub use system::{
    BatteryReading, BatteryStatus, BatteryTime, CpuReading, MemoryReading, NetworkReading,
    POWER_TIME_UNKNOWN, POWER_TIME_UNLIMITED, StorageReading, SystemIdentity,
};

mod app;
mod system;
