// Equipment domain model
use serde::{Deserialize, Serialize};

/// `data/equipment_status.json`
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentStatus {
    pub status: Vec<EquipmentStatusRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EquipmentStatusRecord {
    pub equipment: String,
    pub state: String,
}

impl EquipmentStatusRecord {
    pub fn new(equipment: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            equipment: equipment.into(),
            state: state.into(),
        }
    }

    pub fn kind(&self) -> EquipmentState {
        EquipmentState::classify(&self.state)
    }

    /// Case-insensitive substring match on the equipment name. An empty
    /// filter matches everything.
    pub fn matches(&self, filter: &str) -> bool {
        self.equipment
            .to_lowercase()
            .contains(&filter.trim().to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentState {
    Running,
    Maintenance,
    Idle,
    Other,
}

impl EquipmentState {
    pub fn classify(state: &str) -> Self {
        match state.trim().to_lowercase().as_str() {
            "running" => Self::Running,
            "maintenance" => Self::Maintenance,
            "idle" => Self::Idle,
            _ => Self::Other,
        }
    }

    /// Chart fill colour for the state.
    pub fn color(self) -> &'static str {
        match self {
            Self::Running => "rgba(75, 192, 192, 0.6)",
            Self::Maintenance => "rgba(255, 206, 86, 0.6)",
            Self::Idle => "rgba(201, 203, 207, 0.6)",
            Self::Other => "rgba(153, 102, 255, 0.6)",
        }
    }
}

/// Number of machines reporting one exact state label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub state: String,
    pub count: usize,
}
