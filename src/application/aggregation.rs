// Aggregation - weekly/monthly production totals and record counts
//
// Buckets come out in the order their key was first seen, not sorted, and
// periods without records are not filled in.
use crate::domain::calendar::{month_label, parse_date, week_number};
use crate::domain::equipment::{EquipmentState, EquipmentStatusRecord, StatusCount};
use crate::domain::error::ValidationError;
use crate::domain::maintenance::{MaintenanceRecord, WeekCount};
use crate::domain::production::{DailyRecord, MonthBucket, RawDailyRecord, WeekBucket};
use std::collections::HashMap;
use std::hash::Hash;

/// Accumulates values per key, remembering first-seen key order.
struct Buckets<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K: Eq + Hash + Clone, V: Default> Buckets<K, V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn slot(&mut self, key: K) -> &mut V {
        let existing = self.index.get(&key).copied();
        let position = match existing {
            Some(position) => position,
            None => {
                self.entries.push((key.clone(), V::default()));
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].1
    }

    fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

/// Validate every record, failing on the first malformed one.
pub fn validate_daily(records: &[RawDailyRecord]) -> Result<Vec<DailyRecord>, ValidationError> {
    records
        .iter()
        .enumerate()
        .map(|(index, raw)| DailyRecord::from_raw(index, raw))
        .collect()
}

/// Production totals per ISO week number over validated records. Weeks are
/// keyed by number alone, so the same week number in two different years
/// shares a bucket.
pub fn weekly_totals(records: &[DailyRecord]) -> Result<Vec<WeekBucket>, ValidationError> {
    let mut buckets: Buckets<u32, f64> = Buckets::new();
    for (index, record) in records.iter().enumerate() {
        let week = week_number(record.date).ok_or_else(|| ValidationError::InvalidDate {
            index,
            value: record.date.to_string(),
        })?;
        *buckets.slot(week) += record.amount;
    }
    Ok(buckets
        .into_entries()
        .into_iter()
        .map(|(week, amount)| WeekBucket { week, amount })
        .collect())
}

/// Production totals per "Month Year" label over validated records.
pub fn monthly_totals(records: &[DailyRecord]) -> Vec<MonthBucket> {
    let mut buckets: Buckets<String, f64> = Buckets::new();
    for record in records {
        *buckets.slot(month_label(record.date)) += record.amount;
    }
    buckets
        .into_entries()
        .into_iter()
        .map(|(month, amount)| MonthBucket { month, amount })
        .collect()
}

pub fn sum_amounts(records: &[DailyRecord]) -> f64 {
    records.iter().map(|r| r.amount).sum()
}

pub fn aggregate_weekly(records: &[RawDailyRecord]) -> Result<Vec<WeekBucket>, ValidationError> {
    weekly_totals(&validate_daily(records)?)
}

pub fn aggregate_monthly(records: &[RawDailyRecord]) -> Result<Vec<MonthBucket>, ValidationError> {
    Ok(monthly_totals(&validate_daily(records)?))
}

pub fn total_amount(records: &[RawDailyRecord]) -> Result<f64, ValidationError> {
    Ok(sum_amounts(&validate_daily(records)?))
}

/// Scheduled maintenance tasks per ISO week number.
pub fn count_by_week(records: &[MaintenanceRecord]) -> Result<Vec<WeekCount>, ValidationError> {
    let mut buckets: Buckets<u32, usize> = Buckets::new();
    for (index, record) in records.iter().enumerate() {
        let invalid = || ValidationError::InvalidDate {
            index,
            value: record.date.clone(),
        };
        let date = parse_date(&record.date).ok_or_else(invalid)?;
        *buckets.slot(week_number(date).ok_or_else(invalid)?) += 1;
    }
    Ok(buckets
        .into_entries()
        .into_iter()
        .map(|(week, count)| WeekCount { week, count })
        .collect())
}

/// Machines per exact state label, e.g. "Running" and "running" are
/// counted separately.
pub fn count_by_state(records: &[EquipmentStatusRecord]) -> Vec<StatusCount> {
    let mut buckets: Buckets<String, usize> = Buckets::new();
    for record in records {
        *buckets.slot(record.state.clone()) += 1;
    }
    buckets
        .into_entries()
        .into_iter()
        .map(|(state, count)| StatusCount { state, count })
        .collect()
}

pub fn count_in_state(records: &[EquipmentStatusRecord], state: EquipmentState) -> usize {
    records.iter().filter(|r| r.kind() == state).count()
}
