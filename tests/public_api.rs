use production_dashboard::application::aggregation::{
    aggregate_monthly, aggregate_weekly, count_by_state, count_by_week, total_amount,
};
use production_dashboard::application::dataset_source::{DatasetSource, LoadError};
use production_dashboard::domain::equipment::EquipmentStatusRecord;
use production_dashboard::domain::maintenance::{MaintenanceRecord, WeekCount};
use production_dashboard::domain::production::{RawDailyRecord, WeekBucket};
use production_dashboard::infrastructure::http_source::HttpDatasetSource;
use std::net::TcpListener;

#[test]
fn aggregates_raw_daily_records() {
    let records = vec![
        RawDailyRecord::new("2024-01-01", 10.0),
        RawDailyRecord::new("2024-01-02", 5.0),
        RawDailyRecord::new("2024-01-08", 7.0),
    ];

    assert_eq!(
        aggregate_weekly(&records).unwrap(),
        vec![
            WeekBucket { week: 1, amount: 15.0 },
            WeekBucket { week: 2, amount: 7.0 },
        ]
    );
    assert_eq!(aggregate_monthly(&records).unwrap().len(), 1);
    assert_eq!(total_amount(&records).unwrap(), 22.0);
}

#[test]
fn rejects_date_at_end_of_calendar() {
    let records = vec![RawDailyRecord::new("+262142-12-31", 1.0)];
    assert!(aggregate_weekly(&records).is_err());
}

#[test]
fn counts_equipment_and_maintenance() {
    let status = vec![
        EquipmentStatusRecord::new("Press", "Running"),
        EquipmentStatusRecord::new("Lathe", "Running"),
    ];
    assert_eq!(count_by_state(&status)[0].count, 2);

    let upcoming = vec![MaintenanceRecord::new("Press", "2024-01-03")];
    assert_eq!(count_by_week(&upcoming).unwrap(), vec![WeekCount { week: 1, count: 1 }]);
}

#[tokio::test]
async fn fetch_error_reports_url() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = HttpDatasetSource::new(base.clone())
        .fetch_json("data/maintenance.json")
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Fetch { .. }));
    assert_eq!(err.url(), Some(format!("{}/data/maintenance.json", base).as_str()));
}
