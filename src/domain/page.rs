// Page identity - which dashboard variant a request is for
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The three JSON resources the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    ProductionStats,
    EquipmentStatus,
    Maintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageMode {
    ProductionStats,
    EquipmentStatus,
    Maintenance,
    Dashboard,
    Unknown,
}

/// Heading keywords in priority order; the first hit wins.
const TITLE_KEYWORDS: &[(&str, PageMode)] = &[
    ("production statistics", PageMode::ProductionStats),
    ("equipment status", PageMode::EquipmentStatus),
    ("maintenance", PageMode::Maintenance),
    ("dashboard", PageMode::Dashboard),
    ("home", PageMode::Dashboard),
];

/// Detect the page mode from a page heading.
pub fn select_page_mode(page_title: &str) -> PageMode {
    let title = page_title.to_lowercase();
    TITLE_KEYWORDS
        .iter()
        .find(|(keyword, _)| title.contains(keyword))
        .map(|(_, mode)| *mode)
        .unwrap_or(PageMode::Unknown)
}

impl PageMode {
    pub fn slug(self) -> &'static str {
        match self {
            Self::ProductionStats => "production-stats",
            Self::EquipmentStatus => "equipment-status",
            Self::Maintenance => "maintenance",
            Self::Dashboard => "dashboard",
            Self::Unknown => "unknown",
        }
    }

    /// Id of the page region that receives the content, or the error message.
    pub fn region(self) -> Option<&'static str> {
        match self {
            Self::ProductionStats => Some("production-stats"),
            Self::EquipmentStatus => Some("equipment-status"),
            Self::Maintenance => Some("maintenance"),
            Self::Dashboard => Some("overview"),
            Self::Unknown => None,
        }
    }

    pub fn datasets(self) -> &'static [Dataset] {
        match self {
            Self::ProductionStats => &[Dataset::ProductionStats],
            Self::EquipmentStatus => &[Dataset::EquipmentStatus],
            Self::Maintenance => &[Dataset::Maintenance],
            Self::Dashboard => &[
                Dataset::ProductionStats,
                Dataset::EquipmentStatus,
                Dataset::Maintenance,
            ],
            Self::Unknown => &[],
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Self::Dashboard => "Error loading overview data.",
            _ => "Error loading data.",
        }
    }
}

impl fmt::Display for PageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for PageMode {
    type Err = UnknownPage;

    /// Typed route identifiers. `unknown` is not routable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production-stats" => Ok(Self::ProductionStats),
            "equipment-status" => Ok(Self::EquipmentStatus),
            "maintenance" => Ok(Self::Maintenance),
            "dashboard" => Ok(Self::Dashboard),
            other => Err(UnknownPage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_page_mode() {
        assert_eq!(select_page_mode("Production Statistics Overview"), PageMode::ProductionStats);
        assert_eq!(select_page_mode("Equipment Status"), PageMode::EquipmentStatus);
        assert_eq!(select_page_mode("Upcoming MAINTENANCE"), PageMode::Maintenance);
        assert_eq!(select_page_mode("Dashboard"), PageMode::Dashboard);
        assert_eq!(select_page_mode("Plant Home"), PageMode::Dashboard);
        assert_eq!(select_page_mode("Random Page"), PageMode::Unknown);
        assert_eq!(select_page_mode(""), PageMode::Unknown);
    }

    #[test]
    fn test_select_page_mode_priority() {
        assert_eq!(
            select_page_mode("Production Statistics and Maintenance"),
            PageMode::ProductionStats
        );
        assert_eq!(select_page_mode("Maintenance Dashboard"), PageMode::Maintenance);
    }

    #[test]
    fn test_slug_round_trip() {
        for mode in [
            PageMode::ProductionStats,
            PageMode::EquipmentStatus,
            PageMode::Maintenance,
            PageMode::Dashboard,
        ] {
            assert_eq!(mode.slug().parse::<PageMode>(), Ok(mode));
        }
        assert!("unknown".parse::<PageMode>().is_err());
        assert!("home".parse::<PageMode>().is_err());
    }

    #[test]
    fn test_unknown_page_loads_nothing() {
        assert!(PageMode::Unknown.datasets().is_empty());
        assert_eq!(PageMode::Unknown.region(), None);
        assert_eq!(PageMode::Dashboard.datasets().len(), 3);
    }
}
