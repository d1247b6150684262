// View models - JSON payloads the browser hands to its charting and table code
use crate::application::page_service::{LoadFailure, PageView};
use crate::domain::dashboard::Overview;
use crate::domain::equipment::{EquipmentState, EquipmentStatusRecord, StatusCount};
use crate::domain::maintenance::{CalendarEntry, WeekCount};
use crate::domain::page::PageMode;
use crate::domain::production::{DailyRecord, MonthBucket, WeekBucket};
use serde::Serialize;

const MONTH_PALETTE: [&str; 5] = [
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(153, 102, 255, 0.6)",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    /// Canvas id
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<&'static str>,
}

impl ChartView {
    fn new(id: &'static str, title: &'static str, kind: ChartKind) -> Self {
        Self {
            id,
            title,
            kind,
            labels: Vec::new(),
            data: Vec::new(),
            colors: Vec::new(),
        }
    }

    fn point(mut self, label: String, value: f64) -> Self {
        self.labels.push(label);
        self.data.push(value);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TileView {
    pub id: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum PageBody {
    ProductionStats {
        region: &'static str,
        charts: Vec<ChartView>,
        weekly: Vec<WeekBucket>,
        monthly: Vec<MonthBucket>,
        report: &'static str,
    },
    EquipmentStatus {
        region: &'static str,
        charts: Vec<ChartView>,
        table: Vec<EquipmentStatusRecord>,
    },
    Maintenance {
        region: &'static str,
        charts: Vec<ChartView>,
        calendar: Vec<String>,
    },
    Dashboard {
        region: &'static str,
        tiles: Vec<TileView>,
        charts: Vec<ChartView>,
    },
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub mode: PageMode,
    pub region: &'static str,
    pub message: &'static str,
    pub cause: String,
}

impl From<LoadFailure> for ErrorBody {
    fn from(failure: LoadFailure) -> Self {
        Self {
            mode: failure.mode,
            region: failure.region,
            message: failure.message,
            cause: failure.cause,
        }
    }
}

impl From<PageView> for PageBody {
    fn from(view: PageView) -> Self {
        match view {
            PageView::ProductionStats { daily, weekly, monthly } => PageBody::ProductionStats {
                region: "production-stats",
                charts: vec![
                    daily_chart("dailyChart", ChartKind::Bar, &daily),
                    weekly_chart(&weekly),
                    monthly_chart(&monthly),
                ],
                weekly,
                monthly,
                report: "production_report.pdf",
            },
            PageView::EquipmentStatus { records, counts } => PageBody::EquipmentStatus {
                region: "equipment-status",
                charts: vec![status_chart("equipmentStatusChart", ChartKind::Doughnut, &counts)],
                table: records,
            },
            PageView::Maintenance { weekly, calendar } => PageBody::Maintenance {
                region: "maintenance",
                charts: vec![maintenance_chart(&weekly)],
                calendar: calendar.iter().map(CalendarEntry::label).collect(),
            },
            PageView::Dashboard(overview) => dashboard_body(overview),
            PageView::Unknown => PageBody::Unknown,
        }
    }
}

fn week_label(week: u32) -> String {
    format!("Week {}", week)
}

fn daily_chart(id: &'static str, kind: ChartKind, daily: &[DailyRecord]) -> ChartView {
    daily.iter().fold(ChartView::new(id, "Daily Production", kind), |chart, r| {
        chart.point(r.date.to_string(), r.amount)
    })
}

fn weekly_chart(weekly: &[WeekBucket]) -> ChartView {
    weekly
        .iter()
        .fold(ChartView::new("weeklyChart", "Weekly Production", ChartKind::Line), |chart, b| {
            chart.point(week_label(b.week), b.amount)
        })
}

fn monthly_chart(monthly: &[MonthBucket]) -> ChartView {
    let mut chart = monthly
        .iter()
        .fold(ChartView::new("monthlyChart", "Monthly Production", ChartKind::Pie), |chart, b| {
            chart.point(b.month.clone(), b.amount)
        });
    chart.colors = MONTH_PALETTE.to_vec();
    chart
}

fn status_chart(id: &'static str, kind: ChartKind, counts: &[StatusCount]) -> ChartView {
    let mut chart = ChartView::new(id, "Equipment Status", kind);
    for count in counts {
        chart = chart.point(count.state.clone(), count.count as f64);
        chart.colors.push(EquipmentState::classify(&count.state).color());
    }
    chart
}

fn maintenance_chart(weekly: &[WeekCount]) -> ChartView {
    weekly.iter().fold(
        ChartView::new("maintenanceChart", "Upcoming Maintenance Tasks", ChartKind::Bar),
        |chart, w| chart.point(week_label(w.week), w.count as f64),
    )
}

fn dashboard_body(overview: Overview) -> PageBody {
    PageBody::Dashboard {
        region: "overview",
        tiles: vec![
            TileView {
                id: "total-production",
                value: format!("{} units", overview.total_production),
            },
            TileView {
                id: "running-equipment",
                value: overview.running_equipment.to_string(),
            },
            TileView {
                id: "maintenance-equipment",
                value: overview.maintenance_equipment.to_string(),
            },
            TileView {
                id: "upcoming-maintenance",
                value: overview.upcoming_maintenance.to_string(),
            },
        ],
        charts: vec![
            daily_chart("overviewProductionChart", ChartKind::Line, &overview.daily),
            status_chart("overviewEquipmentChart", ChartKind::Pie, &overview.status_counts),
        ],
    }
}
