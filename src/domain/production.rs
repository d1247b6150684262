// Production domain model - daily records and their aggregation buckets
use super::calendar::parse_date;
use super::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `data/production_stats.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductionStats {
    pub daily: Vec<RawDailyRecord>,
}

/// A daily record exactly as fetched. Both fields stay untyped until
/// [`DailyRecord::from_raw`] validates them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawDailyRecord {
    #[serde(default)]
    pub date: Value,
    #[serde(default)]
    pub amount: Value,
}

impl RawDailyRecord {
    pub fn new(date: &str, amount: f64) -> Self {
        Self {
            date: Value::from(date),
            amount: Value::from(amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub amount: f64,
}

impl DailyRecord {
    /// Validate the record at position `index` of its dataset.
    pub fn from_raw(index: usize, raw: &RawDailyRecord) -> Result<Self, ValidationError> {
        let date = match &raw.date {
            Value::Null => return Err(ValidationError::MissingDate { index }),
            Value::String(s) => parse_date(s).ok_or_else(|| ValidationError::InvalidDate {
                index,
                value: s.clone(),
            })?,
            other => {
                return Err(ValidationError::InvalidDate {
                    index,
                    value: other.to_string(),
                })
            }
        };

        let amount = match &raw.amount {
            Value::Null => return Err(ValidationError::MissingAmount { index }),
            Value::Number(n) => n.as_f64().ok_or_else(|| ValidationError::NonNumericAmount {
                index,
                value: n.to_string(),
            })?,
            other => {
                return Err(ValidationError::NonNumericAmount {
                    index,
                    value: other.to_string(),
                })
            }
        };

        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::InvalidAmount { index, value: amount });
        }

        Ok(Self { date, amount })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBucket {
    pub week: u32,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    pub month: String,
    pub amount: f64,
}
