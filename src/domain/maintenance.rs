// Maintenance schedule domain model
use serde::{Deserialize, Serialize};

/// `data/maintenance.json`
#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceSchedule {
    pub upcoming: Vec<MaintenanceRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MaintenanceRecord {
    pub equipment: String,
    pub date: String,
}

impl MaintenanceRecord {
    pub fn new(equipment: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            equipment: equipment.into(),
            date: date.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekCount {
    pub week: u32,
    pub count: usize,
}

/// One line of the maintenance calendar list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEntry {
    pub date: String,
    pub equipment: String,
}

impl CalendarEntry {
    pub fn label(&self) -> String {
        format!("{}: {}", self.date, self.equipment)
    }
}

impl From<&MaintenanceRecord> for CalendarEntry {
    fn from(record: &MaintenanceRecord) -> Self {
        Self {
            date: record.date.clone(),
            equipment: record.equipment.clone(),
        }
    }
}
