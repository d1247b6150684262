// Page service - Bootstraps one page session: load, aggregate, hand over to rendering
use crate::application::aggregation::{
    count_by_state, count_by_week, count_in_state, monthly_totals, sum_amounts, validate_daily,
    weekly_totals,
};
use crate::application::data_loader::DataLoader;
use crate::application::dataset_source::LoadError;
use crate::domain::dashboard::Overview;
use crate::domain::equipment::{EquipmentState, EquipmentStatusRecord, StatusCount};
use crate::domain::maintenance::{CalendarEntry, WeekCount};
use crate::domain::page::PageMode;
use crate::domain::production::{DailyRecord, MonthBucket, WeekBucket};

/// Everything one page load needs to know about itself.
#[derive(Debug, Clone)]
pub struct PageSession {
    pub mode: PageMode,
    /// Equipment table filter
    pub search: Option<String>,
}

impl PageSession {
    pub fn new(mode: PageMode) -> Self {
        Self { mode, search: None }
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|s| !s.trim().is_empty());
        self
    }
}

#[derive(Debug, Clone)]
pub enum PageView {
    ProductionStats {
        daily: Vec<DailyRecord>,
        weekly: Vec<WeekBucket>,
        monthly: Vec<MonthBucket>,
    },
    EquipmentStatus {
        records: Vec<EquipmentStatusRecord>,
        counts: Vec<StatusCount>,
    },
    Maintenance {
        weekly: Vec<WeekCount>,
        calendar: Vec<CalendarEntry>,
    },
    Dashboard(Overview),
    Unknown,
}

/// What the page shows in place of its content when loading fails.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub mode: PageMode,
    pub region: &'static str,
    pub message: &'static str,
    pub cause: String,
}

#[derive(Debug, Clone)]
pub enum PageOutcome {
    Loaded(PageView),
    Failed(LoadFailure),
}

#[derive(Clone)]
pub struct PageService {
    loader: DataLoader,
}

impl PageService {
    pub fn new(loader: DataLoader) -> Self {
        Self { loader }
    }

    pub async fn bootstrap(&self, session: &PageSession) -> PageOutcome {
        tracing::debug!("Bootstrapping {} page from {:?}", session.mode, session.mode.datasets());
        let result = match session.mode {
            PageMode::ProductionStats => self.production_stats().await,
            PageMode::EquipmentStatus => self.equipment_status(session.search.as_deref()).await,
            PageMode::Maintenance => self.maintenance().await,
            PageMode::Dashboard => self.dashboard().await,
            PageMode::Unknown => return PageOutcome::Loaded(PageView::Unknown),
        };

        match result {
            Ok(view) => PageOutcome::Loaded(view),
            Err(err) => {
                tracing::warn!("Error loading {} page: {}", session.mode, err);
                PageOutcome::Failed(LoadFailure {
                    mode: session.mode,
                    region: session.mode.region().unwrap_or("overview"),
                    message: session.mode.error_message(),
                    cause: err.to_string(),
                })
            }
        }
    }

    async fn production_stats(&self) -> Result<PageView, LoadError> {
        let stats = self.loader.load_production().await?;
        tracing::debug!("Loaded {} daily production records", stats.daily.len());

        let daily = validate_daily(&stats.daily)?;
        Ok(PageView::ProductionStats {
            weekly: weekly_totals(&daily)?,
            monthly: monthly_totals(&daily),
            daily,
        })
    }

    async fn equipment_status(&self, search: Option<&str>) -> Result<PageView, LoadError> {
        let equipment = self.loader.load_equipment().await?;
        let counts = count_by_state(&equipment.status);

        // The chart always covers the whole fleet; only the table is filtered
        let records = match search {
            Some(filter) => equipment
                .status
                .into_iter()
                .filter(|r| r.matches(filter))
                .collect(),
            None => equipment.status,
        };

        Ok(PageView::EquipmentStatus { records, counts })
    }

    async fn maintenance(&self) -> Result<PageView, LoadError> {
        let schedule = self.loader.load_maintenance().await?;

        Ok(PageView::Maintenance {
            weekly: count_by_week(&schedule.upcoming)?,
            calendar: schedule.upcoming.iter().map(CalendarEntry::from).collect(),
        })
    }

    async fn dashboard(&self) -> Result<PageView, LoadError> {
        let (production, equipment, maintenance) = self.loader.load_overview().await?;
        let daily = validate_daily(&production.daily)?;

        Ok(PageView::Dashboard(Overview {
            total_production: sum_amounts(&daily),
            running_equipment: count_in_state(&equipment.status, EquipmentState::Running),
            maintenance_equipment: count_in_state(&equipment.status, EquipmentState::Maintenance),
            upcoming_maintenance: maintenance.upcoming.len(),
            daily,
            status_counts: count_by_state(&equipment.status),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dataset_source::stub::StubSource;
    use crate::infrastructure::config::DataPaths;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn production() -> Value {
        json!({"daily": [
            {"date": "2024-01-01", "amount": 10},
            {"date": "2024-01-02", "amount": 5},
            {"date": "2024-01-08", "amount": 7}
        ]})
    }

    fn equipment() -> Value {
        json!({"status": [
            {"equipment": "Press Line 1", "state": "Running"},
            {"equipment": "Press Line 2", "state": "Maintenance"},
            {"equipment": "Lathe", "state": "running"},
            {"equipment": "Saw", "state": "Idle"}
        ]})
    }

    fn maintenance() -> Value {
        json!({"upcoming": [
            {"equipment": "Press Line 2", "date": "2024-01-03"},
            {"equipment": "Saw", "date": "2024-01-04"}
        ]})
    }

    fn full_source() -> StubSource {
        StubSource::default()
            .with("data/production_stats.json", production())
            .with("data/equipment_status.json", equipment())
            .with("data/maintenance.json", maintenance())
    }

    fn service(source: Arc<StubSource>) -> PageService {
        PageService::new(DataLoader::new(source, DataPaths::default()))
    }

    #[tokio::test]
    async fn test_production_page_aggregates() {
        let outcome = service(Arc::new(full_source()))
            .bootstrap(&PageSession::new(PageMode::ProductionStats))
            .await;
        let PageOutcome::Loaded(PageView::ProductionStats { daily, weekly, monthly }) = outcome else {
            panic!("expected production view");
        };
        assert_eq!(daily.len(), 3);
        let amounts: Vec<f64> = weekly.iter().map(|b| b.amount).collect();
        assert_eq!(amounts, vec![15.0, 7.0]);
        assert_eq!(monthly, vec![MonthBucket { month: "January 2024".to_string(), amount: 22.0 }]);
    }

    #[tokio::test]
    async fn test_production_page_fetches_one_dataset() {
        let source = Arc::new(full_source());
        service(source.clone())
            .bootstrap(&PageSession::new(PageMode::ProductionStats))
            .await;
        assert_eq!(source.requested(), vec!["data/production_stats.json".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_record_fails_the_page() {
        let source = StubSource::default().with(
            "data/production_stats.json",
            json!({"daily": [{"date": "2024-01-01", "amount": "ten"}]}),
        );
        let outcome = service(Arc::new(source))
            .bootstrap(&PageSession::new(PageMode::ProductionStats))
            .await;
        let PageOutcome::Failed(failure) = outcome else {
            panic!("expected failure");
        };
        assert_eq!(failure.region, "production-stats");
        assert_eq!(failure.message, "Error loading data.");
        assert!(failure.cause.contains("not a number"));
    }

    #[tokio::test]
    async fn test_equipment_search_filters_table_only() {
        let session = PageSession::new(PageMode::EquipmentStatus).with_search(Some("press".to_string()));
        let outcome = service(Arc::new(full_source())).bootstrap(&session).await;
        let PageOutcome::Loaded(PageView::EquipmentStatus { records, counts }) = outcome else {
            panic!("expected equipment view");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 4);
    }

    #[tokio::test]
    async fn test_maintenance_page() {
        let outcome = service(Arc::new(full_source()))
            .bootstrap(&PageSession::new(PageMode::Maintenance))
            .await;
        let PageOutcome::Loaded(PageView::Maintenance { weekly, calendar }) = outcome else {
            panic!("expected maintenance view");
        };
        assert_eq!(weekly, vec![WeekCount { week: 1, count: 2 }]);
        assert_eq!(calendar[0].label(), "2024-01-03: Press Line 2");
    }

    #[tokio::test]
    async fn test_dashboard_overview() {
        let outcome = service(Arc::new(full_source()))
            .bootstrap(&PageSession::new(PageMode::Dashboard))
            .await;
        let PageOutcome::Loaded(PageView::Dashboard(overview)) = outcome else {
            panic!("expected dashboard view");
        };
        assert_eq!(overview.total_production, 22.0);
        assert_eq!(overview.running_equipment, 2);
        assert_eq!(overview.maintenance_equipment, 1);
        assert_eq!(overview.upcoming_maintenance, 2);
        assert_eq!(overview.daily.len(), 3);
        assert_eq!(overview.status_counts.len(), 4);
    }

    #[tokio::test]
    async fn test_dashboard_fails_whole_when_one_dataset_fails() {
        let source = StubSource::default()
            .with("data/production_stats.json", production())
            .with("data/equipment_status.json", equipment());
        let outcome = service(Arc::new(source))
            .bootstrap(&PageSession::new(PageMode::Dashboard))
            .await;
        let PageOutcome::Failed(failure) = outcome else {
            panic!("dashboard must not render partially");
        };
        assert_eq!(failure.region, "overview");
        assert_eq!(failure.message, "Error loading overview data.");
        assert!(failure.cause.contains("data/maintenance.json"));
    }

    #[tokio::test]
    async fn test_unknown_page_loads_nothing() {
        let source = Arc::new(full_source());
        let outcome = service(source.clone())
            .bootstrap(&PageSession::new(PageMode::Unknown))
            .await;
        assert!(matches!(outcome, PageOutcome::Loaded(PageView::Unknown)));
        assert!(source.requested().is_empty());
    }
}
