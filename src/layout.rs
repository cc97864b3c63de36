use std::fmt;

/// Report sections in their fixed display order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SectionId {
    System,
    Cpu,
    Memory,
    Storage,
    Network,
    Battery,
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionId::System => write!(f, "System"),
            SectionId::Cpu => write!(f, "CPU"),
            SectionId::Memory => write!(f, "Memory"),
            SectionId::Storage => write!(f, "Storage"),
            SectionId::Network => write!(f, "Network"),
            SectionId::Battery => write!(f, "Battery"),
        }
    }
}

impl SectionId {
    /// Sections every report carries, in order. Battery follows when present.
    pub const MANDATORY: [SectionId; 5] = [
        SectionId::System,
        SectionId::Cpu,
        SectionId::Memory,
        SectionId::Storage,
        SectionId::Network,
    ];

    /// Title line, e.g. `=== Memory ===`.
    pub fn header(&self) -> String {
        format!("=== {} ===", self)
    }
}
